//! Schema registry gateway.
//!
//! # Purpose
//! Wraps the external schema registry behind a single read operation and
//! translates its failures into the gateway error taxonomy:
//! - the registry reports the schema absent → `ErrorKind::NotFound`
//! - transport, status or body problems → `ErrorKind::Remote`
//!
//! # Notes
//! One attempt per call, no retries. Cancellation is driven by the caller
//! dropping or racing the returned future.
use crate::error::Result;
use async_trait::async_trait;

pub mod http;

pub use http::HttpRegistryClient;

#[async_trait]
pub trait SchemaRegistry: Send + Sync {
    /// Fetch the schema text registered under `subject` at `version`
    /// (`"latest"` or a positive integer).
    async fn fetch_schema(&self, subject: &str, version: &str) -> Result<String>;

    /// Base address used for diagnostics.
    fn endpoint(&self) -> String;
}
