//! Gateway data model module.
//!
//! # Purpose
//! Re-exports the recorded client usage and its action enum, shared by the
//! orchestrator, the client directory and the HTTP API.
mod client;

pub use client::{Action, ClientUsage, LATEST_VERSION};
