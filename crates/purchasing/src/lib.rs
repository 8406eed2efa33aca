//! `landedcost-purchasing` — purchase-order snapshot records and totals.
//!
//! Collaborators (forms, persistence) build these records and hand them to
//! the costing functions as immutable snapshots; nothing in this crate
//! mutates or persists anything.

pub mod expense;
pub mod order;
pub mod payment;
pub mod totals;

pub use expense::{ExpenseCategory, ExpenseId, LogisticsExpense};
pub use order::{InventoryReceipt, LineItem, PurchaseOrder, PurchaseOrderId, ReceiptId};
pub use payment::{Payment, PaymentId, PaymentStatus};
pub use totals::{aggregate_order, OrderTotals};
