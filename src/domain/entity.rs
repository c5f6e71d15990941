use serde::de::DeserializeOwned;
use serde::Serialize;

use super::validation::Validate;

/// A storefront record that is created, read, replaced and deleted as a
/// whole through the generic CRUD surface.
pub trait Entity: Validate + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const NAME: &'static str;
}

/// A record together with its surrogate key. Serializes flat, so a stored
/// customer reads as `{"id": 3, "full_name": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<T> {
    pub id: i32,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Stored<T> {
    pub fn new(id: i32, data: T) -> Self {
        Self { id, data }
    }
}
