//! `landedcost-costing` — shared-cost allocation.
//!
//! The distribution engine splits a shared cost figure across cost-bearing
//! entities (line items, or whole orders sharing a shipment) proportionally
//! to a chosen basis, the resolver picks that basis for an expense, and the
//! item distributor assigns each line of an order its slice of merchandise
//! and logistics cost.

pub mod basis;
pub mod distribution;
pub mod item_costs;
pub mod resolver;

pub use basis::AllocationBasis;
pub use distribution::{distribute, Allocatable, DistributionShare, ShipmentOrder};
pub use item_costs::{distribute_order_costs, ItemCost};
pub use resolver::{BasisOverrideTable, BasisOverrides, BasisResolver};
