#![allow(dead_code)]

use async_trait::async_trait;
use schema_gateway::access::{AccessService, IdGenerator};
use schema_gateway::app::{AppState, build_router};
use schema_gateway::error::{Error, Result};
use schema_gateway::registry::SchemaRegistry;
use schema_gateway::store::memory::InMemoryStore;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

/// Registry double answering from a fixed `(subject, version)` table.
#[derive(Default)]
pub struct TableRegistry {
    schemas: HashMap<(String, String), Result<String>>,
}

impl TableRegistry {
    pub fn with(mut self, subject: &str, version: &str, answer: Result<String>) -> Self {
        self.schemas
            .insert((subject.to_string(), version.to_string()), answer);
        self
    }
}

#[async_trait]
impl SchemaRegistry for TableRegistry {
    async fn fetch_schema(&self, subject: &str, version: &str) -> Result<String> {
        self.schemas
            .get(&(subject.to_string(), version.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Err(Error::not_found(format!(
                    "schema {subject}/{version} not found"
                )))
            })
    }

    fn endpoint(&self) -> String {
        "table://registry".to_string()
    }
}

pub fn sequential_ids() -> Arc<dyn IdGenerator> {
    let next = AtomicUsize::new(0);
    Arc::new(move || format!("client-{}", next.fetch_add(1, Ordering::SeqCst)))
}

pub fn app_with_registry(
    registry: TableRegistry,
) -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let access = AccessService::with_id_generator(
        Arc::new(registry),
        Arc::new(InMemoryStore::new()),
        sequential_ids(),
    );
    build_router(AppState::new(Arc::new(access))).into_service()
}
