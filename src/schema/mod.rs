// schema/mod.rs - Named schema documents and the store that holds them

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

pub mod store;

pub use store::{MemoryStore, SchemaStore};

/// A data-generation schema document.
///
/// The endpoint treats the document as opaque: any YAML/JSON mapping is
/// accepted and round-trips unchanged. Scalars and sequences are rejected
/// at decode time because a schema is always keyed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Mapping);

impl Schema {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode the document as YAML for the read path.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
