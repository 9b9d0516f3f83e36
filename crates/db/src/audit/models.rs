use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Delete,
    AddUser,
    Update,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::AddUser => "add_user",
            Self::Update => "update",
        }
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            "add_user" => Ok(Self::AddUser),
            "update" => Ok(Self::Update),
            _ => Err(format!("unknown audit action: {value}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntity {
    Workspace,
    Membership,
    Project,
    Ticket,
    Comment,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Membership => "membership",
            Self::Project => "project",
            Self::Ticket => "ticket",
            Self::Comment => "comment",
        }
    }
}

impl FromStr for AuditEntity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "workspace" => Ok(Self::Workspace),
            "membership" => Ok(Self::Membership),
            "project" => Ok(Self::Project),
            "ticket" => Ok(Self::Ticket),
            "comment" => Ok(Self::Comment),
            _ => Err(format!("unknown audit entity: {value}")),
        }
    }
}
