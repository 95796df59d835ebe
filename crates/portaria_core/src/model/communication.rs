//! Administrative announcement model.
//!
//! # Invariants
//! - `id` and `date` are immutable after publication.
//! - Title, content, author and priority may be edited in place; there is
//!   no status machine.

use crate::model::prefixed_id;
use serde::{Deserialize, Serialize};

/// Announcement urgency used for display emphasis and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// One published announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Publication timestamp, RFC 3339. Never changed by edits.
    pub date: String,
    pub author: String,
    pub priority: Priority,
}

/// Replacement values for the mutable fields of a communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationEdit {
    pub title: String,
    pub content: String,
    pub author: String,
    pub priority: Priority,
}

impl Communication {
    /// Creates a new announcement with a generated stable id.
    pub fn publish(
        title: impl Into<String>,
        content: impl Into<String>,
        priority: Priority,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: prefixed_id("communication"),
            title: title.into(),
            content: content.into(),
            date: date.into(),
            author: author.into(),
            priority,
        }
    }

    /// Replaces the mutable fields, preserving id and publication date.
    pub fn apply_edit(&mut self, edit: &CommunicationEdit) {
        self.title = edit.title.clone();
        self.content = edit.content.clone();
        self.author = edit.author.clone();
        self.priority = edit.priority;
    }
}
