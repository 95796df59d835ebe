//! Incoming correspondence model and delivery lifecycle.
//!
//! # Invariants
//! - A correspondence is created `waiting` with no `delivered_at`.
//! - `record_delivery` flips the record to `delivered` exactly once; the
//!   terminal state is never reopened.

use crate::model::prefixed_id;
use serde::{Deserialize, Serialize};

/// Category of an incoming item, serialized as `type` to match the
/// persisted wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrespondenceKind {
    Package,
    Letter,
    FoodDelivery,
    Other,
}

/// Delivery state for a registered correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Held at the front desk (initial state).
    Waiting,
    /// Handed over to the resident (terminal state).
    Delivered,
}

/// One registered correspondence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correspondence {
    pub id: String,
    pub residence_number: String,
    #[serde(rename = "type")]
    pub kind: CorrespondenceKind,
    pub description: String,
    /// Arrival timestamp, RFC 3339.
    pub date: String,
    pub status: DeliveryStatus,
    /// Set exactly once when the item is handed over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
}

impl Correspondence {
    /// Creates a waiting correspondence with a generated stable id.
    pub fn register(
        residence_number: impl Into<String>,
        kind: CorrespondenceKind,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: prefixed_id("correspondence"),
            residence_number: residence_number.into(),
            kind,
            description: description.into(),
            date: date.into(),
            status: DeliveryStatus::Waiting,
            delivered_at: None,
        }
    }

    /// Records handover, setting `delivered` and the delivery timestamp.
    ///
    /// Returns `false` without touching the record when the item was
    /// already delivered; the transition runs at most once.
    pub fn record_delivery(&mut self, delivered_at: impl Into<String>) -> bool {
        if self.status == DeliveryStatus::Delivered {
            return false;
        }
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = Some(delivered_at.into());
        true
    }

    pub fn is_waiting(&self) -> bool {
        self.status == DeliveryStatus::Waiting
    }
}

#[cfg(test)]
mod tests {
    use super::{Correspondence, CorrespondenceKind, DeliveryStatus};

    #[test]
    fn record_delivery_runs_exactly_once() {
        let mut item = Correspondence::register(
            "102",
            CorrespondenceKind::Package,
            "Encomenda X",
            "2024-01-25T10:00:00.000Z",
        );
        assert!(item.is_waiting());

        assert!(item.record_delivery("2024-01-25T15:00:00.000Z"));
        assert_eq!(item.status, DeliveryStatus::Delivered);

        assert!(!item.record_delivery("2024-01-26T09:00:00.000Z"));
        assert_eq!(item.delivered_at.as_deref(), Some("2024-01-25T15:00:00.000Z"));
    }

    #[test]
    fn kind_uses_snake_case_type_token() {
        let item = Correspondence::register(
            "101",
            CorrespondenceKind::FoodDelivery,
            "iFood",
            "2024-01-25T10:00:00.000Z",
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "food_delivery");
        assert_eq!(json["status"], "waiting");
        assert!(json.get("deliveredAt").is_none());
    }
}
