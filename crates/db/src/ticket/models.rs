use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Statuses reachable from `self` in one step. The lifecycle is a strict
    /// path: open -> in_progress -> resolved -> closed, closed is terminal.
    pub fn transitions(self) -> &'static [TicketStatus] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::Resolved],
            Self::Resolved => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    pub fn can_transition_to(self, next: TicketStatus) -> bool {
        self.transitions().contains(&next)
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("unknown ticket status: {value}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub content: String,
    pub project_id: Uuid,
    pub created_by: Uuid,
    pub status: TicketStatus,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One accepted transition, including the initial `open` row at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub status: TicketStatus,
    pub updated_by: Uuid,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<Uuid>,
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    #[test]
    fn status_round_trips() {
        for status in ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("reopened".parse::<TicketStatus>().is_err());
        assert!("OPEN".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn lifecycle_is_a_strict_path() {
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::InProgress));
        assert!(TicketStatus::InProgress.can_transition_to(TicketStatus::Resolved));
        assert!(TicketStatus::Resolved.can_transition_to(TicketStatus::Closed));
    }

    #[test]
    fn closed_is_terminal() {
        assert!(TicketStatus::Closed.transitions().is_empty());
    }

    #[test]
    fn every_pair_outside_the_table_is_rejected() {
        let allowed = [
            (TicketStatus::Open, TicketStatus::InProgress),
            (TicketStatus::InProgress, TicketStatus::Resolved),
            (TicketStatus::Resolved, TicketStatus::Closed),
        ];
        for from in ALL {
            for to in ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "{} -> {}",
                    from.as_str(),
                    to.as_str()
                );
            }
        }
    }
}
