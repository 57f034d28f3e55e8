//! Tag Entity
//!
//! Tags can be attached to tasks for categorization and reporting.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::wire;

/// A tag for categorizing tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    #[serde(deserialize_with = "wire::string_or_number")]
    pub id: String,
    /// Tag name
    pub name: String,
}

impl Entity for Tag {
    fn id(&self) -> &str {
        &self.id
    }
}
