use serde::{Deserialize, Serialize};

/// Untyped payload carried by the transport. The shape is whatever the
/// remote side returns; nothing here narrows it.
pub type Payload = serde_json::Value;

/// Payment amount in dollars.
pub type Amount = f64;

/// Record returned by every `BaseDataService` fulfiller.
///
/// `id` and `name` are always present; anything else rides along in `extra`
/// and is flattened back into the top-level object on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DataRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
