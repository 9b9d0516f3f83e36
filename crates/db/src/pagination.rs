use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use ticketry_common::error::TicketryError;
use uuid::Uuid;

/// Hard ceiling on page size; requests above it are clamped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 50;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Keyset cursor over (created_at, id).
///
/// `created_at` alone is not unique, so the row id is folded in to give the
/// ordering a total order; ties at a page boundary are neither skipped nor
/// duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl Cursor {
    pub fn new(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { created_at, id }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.created_at.timestamp_micros(), self.id)
    }
}

impl FromStr for Cursor {
    type Err = TicketryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bad = || TicketryError::BadRequest(format!("invalid cursor: {value}"));

        let (micros, id) = value.split_once(':').ok_or_else(|| bad())?;
        let micros: i64 = micros.parse().map_err(|_| bad())?;
        let created_at = DateTime::from_timestamp_micros(micros).ok_or_else(|| bad())?;
        let id = Uuid::parse_str(id).map_err(|_| bad())?;

        Ok(Self { created_at, id })
    }
}

/// One page of a listing, newest-first.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Wrap rows already ordered newest-first. A short page means the stream
    /// is exhausted, so `next_cursor` is only set when the page is full.
    pub fn from_rows(items: Vec<T>, limit: i64, cursor_of: impl Fn(&T) -> Cursor) -> Self {
        let next_cursor = if items.len() as i64 == limit {
            items.last().map(|row| cursor_of(row).to_string())
        } else {
            None
        };
        Self { items, next_cursor }
    }
}

pub fn clamp_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_round_trips_through_string_form() {
        let cursor = Cursor::new(Utc::now(), Uuid::new_v4());
        let parsed: Cursor = cursor.to_string().parse().expect("should parse");
        // Display truncates to microseconds, which is Postgres resolution
        assert_eq!(
            parsed.created_at.timestamp_micros(),
            cursor.created_at.timestamp_micros()
        );
        assert_eq!(parsed.id, cursor.id);
    }

    #[test]
    fn cursor_rejects_garbage() {
        assert!("not-a-cursor".parse::<Cursor>().is_err());
        assert!("123".parse::<Cursor>().is_err());
        assert!("abc:123e4567-e89b-12d3-a456-426614174000"
            .parse::<Cursor>()
            .is_err());
        assert!("1700000000000000:not-a-uuid".parse::<Cursor>().is_err());
    }

    #[test]
    fn clamp_limit_applies_default_and_ceiling() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
    }

    #[test]
    fn full_page_carries_next_cursor() {
        let ts = Utc::now();
        let rows = vec![(ts, Uuid::new_v4()), (ts, Uuid::new_v4())];
        let last = rows[1];

        let page = Page::from_rows(rows, 2, |&(created_at, id)| Cursor::new(created_at, id));
        assert_eq!(page.next_cursor, Some(Cursor::new(last.0, last.1).to_string()));
    }

    #[test]
    fn short_page_has_no_next_cursor() {
        let rows = vec![(Utc::now(), Uuid::new_v4())];
        let page = Page::from_rows(rows, 2, |&(created_at, id)| Cursor::new(created_at, id));
        assert!(page.next_cursor.is_none());

        let empty: Vec<(DateTime<Utc>, Uuid)> = Vec::new();
        let page = Page::from_rows(empty, 2, |&(created_at, id)| Cursor::new(created_at, id));
        assert!(page.next_cursor.is_none());
    }
}
