//! Schema gateway library crate.
//!
//! # Purpose
//! Mediates access to schemas held in an external schema registry and keeps
//! every topic bound to exactly one schema subject/version across all the
//! producers and consumers that use it.
//!
//! # Notes
//! `access` holds the orchestration logic; `registry` and `store` are its two
//! collaborators; `api` and `app` expose it over HTTP.
pub mod access;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod registry;
pub mod store;
