//! Order-level financial aggregation.
//!
//! Folds an order's payments, expenses, and receipts into its realized
//! totals. Total over every input shape: empty collections and zero
//! quantities produce zeroed results, never errors.

use serde::{Deserialize, Serialize};

use landedcost_core::round2;

use crate::expense::LogisticsExpense;
use crate::order::{InventoryReceipt, PurchaseOrder};
use crate::payment::Payment;

/// Realized totals for one purchase order.
///
/// Monetary fields and the reception percentage are rounded to 2 decimal
/// places; `units_difference` is negative when the order was over-received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub total_paid: f64,
    pub total_expenses: f64,
    pub total_investment: f64,
    pub received_qty: u32,
    /// Investment per received unit; 0 until something is received.
    pub unit_cost: f64,
    /// Declared value per ordered unit; 0 for a zero-quantity order.
    pub fob_unit_cost: f64,
    pub units_difference: i64,
    pub reception_percent: f64,
}

/// Aggregate one order's payments, expenses, and receipts.
///
/// Pending payments contribute 0 to `total_paid`. A negative paid or expense
/// component is clamped to 0 before entering `total_investment`, so a bad
/// component can never drag the total below what the others produce alone.
pub fn aggregate_order(
    fob_total: f64,
    ordered_qty: u32,
    payments: &[Payment],
    expenses: &[LogisticsExpense],
    receipts: &[InventoryReceipt],
) -> OrderTotals {
    let total_paid: f64 = payments.iter().filter_map(Payment::net_base).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount_base).sum();
    let total_investment = total_paid.max(0.0) + total_expenses.max(0.0);

    let received_qty: u32 = receipts.iter().map(|r| r.quantity).sum();

    let unit_cost = if received_qty > 0 {
        total_investment / f64::from(received_qty)
    } else {
        0.0
    };
    let fob_unit_cost = if ordered_qty > 0 {
        fob_total / f64::from(ordered_qty)
    } else {
        0.0
    };
    let reception_percent = if ordered_qty > 0 {
        f64::from(received_qty) / f64::from(ordered_qty) * 100.0
    } else {
        0.0
    };

    OrderTotals {
        total_paid: round2(total_paid),
        total_expenses: round2(total_expenses),
        total_investment: round2(total_investment),
        received_qty,
        unit_cost: round2(unit_cost),
        fob_unit_cost: round2(fob_unit_cost),
        units_difference: i64::from(ordered_qty) - i64::from(received_qty),
        reception_percent: round2(reception_percent),
    }
}

impl PurchaseOrder {
    /// Aggregate this snapshot's own collections.
    pub fn totals(&self) -> OrderTotals {
        aggregate_order(
            self.fob_total,
            self.ordered_qty,
            &self.payments,
            &self.expenses,
            &self.receipts,
        )
    }
}
