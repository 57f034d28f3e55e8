//! Staff Profile
//!
//! Used to map staff ids to display names.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
}

impl StaffProfile {
    /// Full name, or the id when the profile has none
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.id.as_str())
    }
}

impl Entity for StaffProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Display name for a staff id, falling back to the id itself.
pub fn staff_name<'a>(staff: &'a [StaffProfile], id: &'a str) -> &'a str {
    staff
        .iter()
        .find(|profile| profile.id == id)
        .map(StaffProfile::display_name)
        .unwrap_or(id)
}
