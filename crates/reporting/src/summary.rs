//! Order financial summary.

use serde::{Deserialize, Serialize};

use landedcost_core::round2;
use landedcost_purchasing::{LineItem, LogisticsExpense, Payment};

use crate::exchange::average_exchange_rate;

/// Top-level financial roll-up of one order, ready for a dashboard row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderFinancialSummary {
    pub total_units: u32,
    /// Declared (FOB) value: sum of line subtotals, in the order currency.
    pub total_fob: f64,
    /// Sum of settled payment net amounts, in base currency.
    pub total_paid: f64,
    /// Sum of logistics expenses, in base currency.
    pub total_expenses: f64,
    /// `total_paid + total_expenses`.
    pub total_cost: f64,
    /// Mean realized rate of the foreign-currency payments.
    pub average_exchange_rate: f64,
    /// `total_cost / total_units`; 0 for an order with no units.
    pub average_unit_cost: f64,
}

/// Roll up an order's items, payments, and expenses.
pub fn summarize_order(
    items: &[LineItem],
    payments: &[Payment],
    expenses: &[LogisticsExpense],
) -> OrderFinancialSummary {
    let total_units: u32 = items.iter().map(|i| i.quantity).sum();
    let total_fob: f64 = items.iter().map(LineItem::subtotal).sum();
    let total_paid: f64 = payments.iter().filter_map(Payment::net_base).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount_base).sum();
    let total_cost = total_paid + total_expenses;

    let average_unit_cost = if total_units > 0 {
        total_cost / f64::from(total_units)
    } else {
        0.0
    };

    OrderFinancialSummary {
        total_units,
        total_fob: round2(total_fob),
        total_paid: round2(total_paid),
        total_expenses: round2(total_expenses),
        total_cost: round2(total_cost),
        average_exchange_rate: round2(average_exchange_rate(payments)),
        average_unit_cost: round2(average_unit_cost),
    }
}
