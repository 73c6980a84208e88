//! The Order record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted purchase order
///
/// `id` is assigned by the store on first save and is `None` on records
/// that have not been persisted yet. It is omitted from JSON when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub order_name: String,
    pub buyer_name: String,
    pub buyer_surname: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Order {
    /// Build an unsaved order (no identifier)
    pub fn new(
        order_name: impl Into<String>,
        buyer_name: impl Into<String>,
        buyer_surname: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            order_name: order_name.into(),
            buyer_name: buyer_name.into(),
            buyer_surname: buyer_surname.into(),
            date,
        }
    }

    /// Copy of this order carrying the given identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this order with the identifier stripped
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}
