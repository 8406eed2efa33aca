use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use landedcost_core::AggregateId;

use crate::order::PurchaseOrderId;

/// Logistics expense identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub AggregateId);

impl ExpenseId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Closed set of expense categories used as configuration keys for
/// allocation-basis overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Freight,
    InlandTransport,
    Storage,
    Customs,
    Tax,
    Insurance,
    Brokerage,
    Other,
}

impl ExpenseCategory {
    /// Classify a free-form expense-type label into a category.
    ///
    /// Case-insensitive substring match over the keywords operators actually
    /// type ("Flete internacional", "Aduana / DGA", ...). Unrecognized
    /// labels land in [`ExpenseCategory::Other`].
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("flete") {
            Self::Freight
        } else if label.contains("transporte") {
            Self::InlandTransport
        } else if label.contains("almacenaje") {
            Self::Storage
        } else if label.contains("aduana") {
            Self::Customs
        } else if label.contains("impuesto") {
            Self::Tax
        } else if label.contains("seguro") {
            Self::Insurance
        } else if label.contains("broker") {
            Self::Brokerage
        } else {
            Self::Other
        }
    }
}

/// A shared logistics expense, already expressed in base currency.
///
/// `order_id` is `None` for shipment-level expenses that span several orders
/// and get split across them by the allocation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsExpense {
    pub id: ExpenseId,
    pub order_id: Option<PurchaseOrderId>,
    /// Free-form expense-type label as entered ("Flete internacional").
    pub label: String,
    /// Amount in base currency.
    pub amount_base: f64,
    pub incurred_at: DateTime<Utc>,
}

impl LogisticsExpense {
    /// Category derived from the label.
    pub fn category(&self) -> ExpenseCategory {
        ExpenseCategory::classify(&self.label)
    }
}
