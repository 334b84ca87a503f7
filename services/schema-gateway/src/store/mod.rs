//! Client directory storage.
//!
//! # Purpose
//! Defines the contract the access orchestrator relies on to record and look
//! up client usages. Backends only guarantee id uniqueness and consistent
//! reads; the one-schema-per-topic rule lives in the orchestrator.
use crate::model::ClientUsage;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Add a usage. Fails with `Conflict` only when the id is already taken.
    async fn register_client(&self, client: ClientUsage) -> StoreResult<()>;
    /// All usages recorded for `topic`, in no particular order.
    async fn clients_on_topic(&self, topic: &str) -> StoreResult<Vec<ClientUsage>>;
    async fn client_by_id(&self, client_id: &str) -> StoreResult<Option<ClientUsage>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
