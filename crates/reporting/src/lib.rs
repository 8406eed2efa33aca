//! `landedcost-reporting` — order-level roll-ups for dashboards and reports.

pub mod exchange;
pub mod summary;

pub use exchange::average_exchange_rate;
pub use summary::{summarize_order, OrderFinancialSummary};
