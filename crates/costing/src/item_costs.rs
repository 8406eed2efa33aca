//! Per-line-item cost breakdown for one order.
//!
//! This is the on-screen breakdown view: every line gets its slice of the
//! merchandise spend and of the logistics spend, both keyed by the line's
//! share of the order's declared value. True multi-basis allocation lives in
//! [`crate::distribution`]; this view deliberately sticks to the value key.

use serde::{Deserialize, Serialize};

use landedcost_core::round2;
use landedcost_purchasing::{LineItem, LogisticsExpense, Payment};

/// Cost assignment for one line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCost {
    pub line_no: u32,
    /// Fraction (0–1) of the order's declared value carried by this line.
    pub value_share: f64,
    /// Share of the merchandise spend (total paid), in base currency.
    pub fob_cost: f64,
    /// Share of the logistics spend, in base currency.
    pub logistics_cost: f64,
    /// `fob_cost + logistics_cost`.
    pub total_cost: f64,
    /// `total_cost / quantity`; 0 for a zero-quantity line.
    pub unit_cost: f64,
}

/// Assign each line item its share of the order's merchandise and logistics
/// spend, proportional to declared value.
///
/// Returns an empty vector when there are no items or the order's declared
/// total is zero — there is nothing to key the split on.
pub fn distribute_order_costs(
    items: &[LineItem],
    expenses: &[LogisticsExpense],
    payments: &[Payment],
) -> Vec<ItemCost> {
    let declared_total: f64 = items.iter().map(LineItem::subtotal).sum();
    if items.is_empty() || declared_total == 0.0 {
        return Vec::new();
    }

    let total_paid: f64 = payments.iter().filter_map(Payment::net_base).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount_base).sum();

    items
        .iter()
        .map(|item| {
            let value_share = item.subtotal() / declared_total;
            let fob_cost = value_share * total_paid;
            let logistics_cost = value_share * total_expenses;
            let total_cost = fob_cost + logistics_cost;
            let unit_cost = if item.quantity > 0 {
                total_cost / f64::from(item.quantity)
            } else {
                0.0
            };

            ItemCost {
                line_no: item.line_no,
                value_share,
                fob_cost: round2(fob_cost),
                logistics_cost: round2(logistics_cost),
                total_cost: round2(total_cost),
                unit_cost: round2(unit_cost),
            }
        })
        .collect()
}
