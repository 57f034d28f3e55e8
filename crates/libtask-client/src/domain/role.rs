//! Role Entity
//!
//! The two application roles and the one-way hierarchy between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application role as recorded in the backend profile table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    /// Whether a session holding `self` may enter an area that requires `required`.
    ///
    /// Admins may enter staff areas; staff may never enter admin areas.
    pub fn grants(self, required: Role) -> bool {
        match (required, self) {
            (Role::Admin, Role::Admin) => true,
            (Role::Staff, Role::Staff | Role::Admin) => true,
            (Role::Admin, Role::Staff) => false,
        }
    }

    /// Route prefix of the area this role lands on after login
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Staff => "/staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}
