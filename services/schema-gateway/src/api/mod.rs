//! Gateway HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules, the API error mapping and payload types.
pub mod clients;
pub mod error;
pub mod openapi;
pub mod schemas;
pub mod system;
pub mod types;
