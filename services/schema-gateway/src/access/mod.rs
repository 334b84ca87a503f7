//! Schema access orchestration.
//!
//! # Purpose
//! Decides whether a client may use a schema on a topic. A request is
//! validated, the schema is fetched from the registry, the request is checked
//! against every usage already recorded for the topic, and the new usage is
//! registered before the schema text is returned.
//!
//! # Key invariants
//! - All usages recorded for one topic share the same subject/version.
//! - Nothing is fetched or recorded for a request that fails validation.
//! - Any failure returns before later steps run; usages are only ever added.
//!
//! # Concurrency
//! The topic lookup, the compatibility check and the registration run inside
//! a per-topic async mutex, so two concurrent first registrations with
//! different subjects cannot both succeed. The registry fetch runs before the
//! lock is taken and is not serialized.
//!
//! # Cancellation
//! `get_schema` races the registry fetch and the per-topic lock against a
//! `CancellationToken`; cancelling it returns an `ErrorKind::Cancelled` error
//! promptly.
mod ids;
mod validate;

pub use ids::{IdGenerator, UuidGenerator};
pub use validate::{ValidationError, ValidationReason, validate};

use crate::error::{Error, Result};
use crate::model::{Action, ClientUsage};
use crate::registry::SchemaRegistry;
use crate::store::ClientStore;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

/// Parameters of a schema access request, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GetSchemaCmd {
    pub topic: String,
    pub application: String,
    pub action: String,
    pub subject: String,
    pub version: String,
}

pub struct AccessService {
    registry: Arc<dyn SchemaRegistry>,
    store: Arc<dyn ClientStore>,
    ids: Arc<dyn IdGenerator>,
    /// Serializes check-then-register per topic. Entries are kept for the
    /// process lifetime; one small mutex per governed topic.
    topic_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl AccessService {
    pub fn new(registry: Arc<dyn SchemaRegistry>, store: Arc<dyn ClientStore>) -> Self {
        Self::with_id_generator(registry, store, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(
        registry: Arc<dyn SchemaRegistry>,
        store: Arc<dyn ClientStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            registry,
            store,
            ids,
            topic_locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn ClientStore> {
        &self.store
    }

    pub fn registry(&self) -> &Arc<dyn SchemaRegistry> {
        &self.registry
    }

    /// Check that the client may use the schema on the topic, record the
    /// usage and return the schema text.
    ///
    /// # Errors
    /// - `Validation` for a missing or malformed field (returned unwrapped).
    /// - `NotFound`/`Remote` when the registry fetch fails.
    /// - `BadRequest` when the topic is bound to another subject/version.
    /// - `Internal` when the directory fails.
    /// - `Cancelled` when `cancel` fires before the work completes.
    pub async fn get_schema(&self, cmd: &GetSchemaCmd, cancel: &CancellationToken) -> Result<String> {
        validate(cmd)?;
        let action: Action = cmd
            .action
            .parse()
            .map_err(|_| Error::internal("validated action failed to parse"))?;

        let schema = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(Error::cancelled("request cancelled while fetching the schema"));
            }
            fetched = self.registry.fetch_schema(&cmd.subject, &cmd.version) => {
                fetched.map_err(|err| err.context("failed to fetch the schema"))?
            }
        };

        let topic_lock = self.topic_lock(&cmd.topic);
        let _guard = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(Error::cancelled("request cancelled while waiting for the topic"));
            }
            guard = topic_lock.lock() => guard,
        };

        let existing = self.store.clients_on_topic(&cmd.topic).await.map_err(|err| {
            Error::from(err).context(format!(
                "failed to retrieve the list of clients connected to the topic {:?}",
                cmd.topic
            ))
        })?;

        if let Some(conflict) = existing
            .iter()
            .find(|client| !client.same_schema(&cmd.subject, &cmd.version))
        {
            tracing::info!(
                topic = %cmd.topic,
                application = %cmd.application,
                conflicting_application = %conflict.application,
                "schema access rejected"
            );
            return Err(Error::bad_request(format!(
                "you can't use the subject {:?} because the application {:?} uses the schema {:?}",
                cmd.subject,
                conflict.application,
                conflict.schema_ref()
            ))
            .context("invalid subject"));
        }

        let client = ClientUsage {
            id: self.ids.generate(),
            topic: cmd.topic.clone(),
            application: cmd.application.clone(),
            action,
            subject: cmd.subject.clone(),
            version: cmd.version.clone(),
        };
        let client_id = client.id.clone();
        self.store
            .register_client(client)
            .await
            .map_err(|err| Error::from(err).context("failed to register the client"))?;

        tracing::info!(
            %client_id,
            topic = %cmd.topic,
            application = %cmd.application,
            action = %action,
            "client registered"
        );
        Ok(schema)
    }

    fn topic_lock(&self, topic: &str) -> Arc<Mutex<()>> {
        self.topic_locks
            .entry(topic.to_string())
            .or_default()
            .clone()
    }
}
