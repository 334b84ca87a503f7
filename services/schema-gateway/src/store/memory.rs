//! In-memory implementation of the client directory.
//!
//! # Purpose
//! Implements `ClientStore` with a single `HashMap` guarded by
//! `tokio::sync::RwLock`. Used for local development, tests and deployments
//! where losing the directory on restart is acceptable.
//!
//! # Durability and consistency
//! - **Not durable**: all usages are lost on process restart.
//! - Reads take the shared lock, registration takes the exclusive lock, so a
//!   reader never observes a half-applied insert.
//! - **No multi-node coordination**: each gateway instance has its own
//!   directory.
//!
//! # Performance characteristics
//! Topic lookups scan every usage. Fine for the expected number of clients;
//! a durable backend should index by topic.
use super::{ClientStore, StoreError, StoreResult};
use crate::model::ClientUsage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    /// Recorded usages keyed by their server-generated id.
    clients: Arc<RwLock<HashMap<String, ClientUsage>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryStore {
    async fn register_client(&self, client: ClientUsage) -> StoreResult<()> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.id) {
            return Err(StoreError::Conflict(format!(
                "try to register client {:?} twice",
                client.id
            )));
        }
        clients.insert(client.id.clone(), client);
        metrics::gauge!("schema_gateway_clients_total").set(clients.len() as f64);
        Ok(())
    }

    async fn clients_on_topic(&self, topic: &str) -> StoreResult<Vec<ClientUsage>> {
        let items = self
            .clients
            .read()
            .await
            .values()
            .filter(|client| client.topic == topic)
            .cloned()
            .collect();
        Ok(items)
    }

    async fn client_by_id(&self, client_id: &str) -> StoreResult<Option<ClientUsage>> {
        Ok(self.clients.read().await.get(client_id).cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
