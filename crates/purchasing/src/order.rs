use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use landedcost_core::{AggregateId, Currency};

use crate::expense::LogisticsExpense;
use crate::payment::Payment;

/// Purchase order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseOrderId(pub AggregateId);

impl PurchaseOrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PurchaseOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Inventory receipt identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub AggregateId);

impl ReceiptId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One product/SKU row within a purchase order.
///
/// `unit_price` is in the order's declared currency. Weight and volume are
/// optional because suppliers frequently omit them; the allocation engine
/// degrades to unit-count distribution when they are missing across the
/// board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_no: u32,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Unit weight in kilograms, when known.
    pub unit_weight_kg: Option<f64>,
    /// Unit volume in cubic meters, when known.
    pub unit_volume_m3: Option<f64>,
}

impl LineItem {
    /// Declared value of the row: quantity × unit price.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A recorded receipt of physical inventory against the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReceipt {
    pub id: ReceiptId,
    pub order_id: PurchaseOrderId,
    pub quantity: u32,
    pub received_at: DateTime<Utc>,
}

/// Immutable snapshot of a purchase order and its child collections.
///
/// `fob_total` is the declared merchandise value in `currency` as entered on
/// the order; the per-line declared values live on the items themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    /// Human-facing order reference (e.g. "PO-2024-0131").
    pub reference: String,
    pub currency: Currency,
    pub ordered_qty: u32,
    /// Declared (FOB) merchandise value in `currency`.
    pub fob_total: f64,
    pub items: Vec<LineItem>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<LogisticsExpense>,
    pub receipts: Vec<InventoryReceipt>,
}

impl PurchaseOrder {
    /// Sum of per-line declared values.
    pub fn declared_total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total received quantity across all receipts.
    pub fn received_qty(&self) -> u32 {
        self.receipts.iter().map(|r| r.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, unit_price: f64) -> LineItem {
        LineItem {
            line_no: 1,
            description: "widget".to_string(),
            quantity,
            unit_price,
            unit_weight_kg: None,
            unit_volume_m3: None,
        }
    }

    #[test]
    fn subtotal_is_quantity_times_price() {
        assert_eq!(item(100, 2.5).subtotal(), 250.0);
        assert_eq!(item(0, 99.0).subtotal(), 0.0);
    }

    #[test]
    fn declared_total_sums_line_subtotals() {
        let order = PurchaseOrder {
            id: PurchaseOrderId::new(AggregateId::new()),
            reference: "PO-1".to_string(),
            currency: Currency::Usd,
            ordered_qty: 150,
            fob_total: 700.0,
            items: vec![item(100, 2.5), item(50, 9.0)],
            payments: Vec::new(),
            expenses: Vec::new(),
            receipts: Vec::new(),
        };
        assert_eq!(order.declared_total(), 700.0);
        assert_eq!(order.received_qty(), 0);
    }
}
