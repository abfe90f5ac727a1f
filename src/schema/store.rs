//! Name-keyed schema storage

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::Schema;

/// Keyed collection of schemas shared by all requests.
///
/// Implementations must be safe for concurrent lookup, upsert and delete
/// from simultaneous requests; the endpoint holds no locks of its own.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Fetch a copy of the schema stored under `name`.
    async fn lookup(&self, name: &str) -> Option<Schema>;

    /// Insert or replace the schema stored under `name`.
    async fn upsert(&self, name: &str, schema: Schema);

    /// Remove `name`, returning whether it existed.
    async fn delete(&self, name: &str) -> bool;

    /// All stored names, sorted.
    async fn names(&self) -> Vec<String>;
}

/// In-memory store backed by a `HashMap` behind a tokio `RwLock`
#[derive(Debug, Default)]
pub struct MemoryStore {
    schemas: RwLock<HashMap<String, Schema>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchemaStore for MemoryStore {
    async fn lookup(&self, name: &str) -> Option<Schema> {
        let schemas = self.schemas.read().await;
        schemas.get(name).cloned()
    }

    async fn upsert(&self, name: &str, schema: Schema) {
        let mut schemas = self.schemas.write().await;
        schemas.insert(name.to_string(), schema);
    }

    async fn delete(&self, name: &str) -> bool {
        let mut schemas = self.schemas.write().await;
        schemas.remove(name).is_some()
    }

    async fn names(&self) -> Vec<String> {
        let schemas = self.schemas.read().await;
        let mut names: Vec<String> = schemas.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn schema(yaml: &str) -> Schema {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_missing_name() {
        let store = MemoryStore::new();
        assert!(store.lookup("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_value() {
        let store = MemoryStore::new();
        store.upsert("demo", schema("{type: object}")).await;
        store.upsert("demo", schema("{type: array}")).await;

        assert_eq!(store.lookup("demo").await, Some(schema("{type: array}")));
        assert_eq!(store.names().await, vec!["demo".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let store = MemoryStore::new();
        store.upsert("demo", schema("{type: object}")).await;

        assert!(store.delete("demo").await);
        assert!(!store.delete("demo").await);
        assert!(store.lookup("demo").await.is_none());
    }

    #[tokio::test]
    async fn test_names_are_sorted() {
        let store = MemoryStore::new();
        for name in ["zeta", "alpha", "mid"] {
            store.upsert(name, Schema::default()).await;
        }
        assert_eq!(store.names().await, vec!["alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn test_concurrent_writers() {
        let store = Arc::new(MemoryStore::new());
        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.upsert(&format!("s{}", i), Schema::default()).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.names().await.len(), 32);
    }
}
