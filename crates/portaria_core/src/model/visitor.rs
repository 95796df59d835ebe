//! Visitor presence model and check-in/check-out lifecycle.
//!
//! # Invariants
//! - A visitor is created `inside` with no `exit_time`.
//! - `record_exit` flips the record to `left` exactly once; the terminal
//!   state is never reopened.

use crate::model::prefixed_id;
use serde::{Deserialize, Serialize};

/// Presence state for a checked-in visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    /// Currently in the building (initial state).
    Inside,
    /// Checked out (terminal state).
    Left,
}

/// One visitor check-in record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    pub name: String,
    /// Associates to a resident's unit by raw string equality, not by
    /// enforced reference.
    pub residence_number: String,
    /// Wall-clock entry time, `HH:MM`.
    pub entry_time: String,
    /// Set exactly once at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<String>,
    /// Calendar day of entry, `YYYY-MM-DD`.
    pub date: String,
    pub status: VisitorStatus,
}

impl Visitor {
    /// Creates a checked-in visitor with a generated stable id.
    pub fn check_in(
        name: impl Into<String>,
        residence_number: impl Into<String>,
        entry_time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: prefixed_id("visitor"),
            name: name.into(),
            residence_number: residence_number.into(),
            entry_time: entry_time.into(),
            exit_time: None,
            date: date.into(),
            status: VisitorStatus::Inside,
        }
    }

    /// Records checkout, setting `left` and the exit time.
    ///
    /// Returns `false` without touching the record when the visitor has
    /// already left; the transition runs at most once.
    pub fn record_exit(&mut self, exit_time: impl Into<String>) -> bool {
        if self.status == VisitorStatus::Left {
            return false;
        }
        self.status = VisitorStatus::Left;
        self.exit_time = Some(exit_time.into());
        true
    }

    pub fn is_inside(&self) -> bool {
        self.status == VisitorStatus::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::{Visitor, VisitorStatus};

    #[test]
    fn record_exit_runs_exactly_once() {
        let mut visitor = Visitor::check_in("Carlos", "101", "14:30", "2024-01-25");
        assert!(visitor.is_inside());
        assert!(visitor.exit_time.is_none());

        assert!(visitor.record_exit("16:00"));
        assert_eq!(visitor.status, VisitorStatus::Left);
        assert_eq!(visitor.exit_time.as_deref(), Some("16:00"));

        assert!(!visitor.record_exit("18:00"));
        assert_eq!(visitor.exit_time.as_deref(), Some("16:00"));
    }
}
