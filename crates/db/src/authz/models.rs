use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("unknown role: {value}")),
        }
    }
}

/// Allowed-role sets for route protection. The resolver checks exact set
/// membership, not a hierarchy; callers always pass the full set.
pub const READ_ROLES: &[Role] = &[Role::Admin, Role::Member, Role::Viewer];
pub const WRITE_ROLES: &[Role] = &[Role::Admin, Role::Member];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// What a request is scoped to. A project scope resolves to its owning
/// workspace before the membership lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceScope {
    Workspace(Uuid),
    Project(Uuid),
}
