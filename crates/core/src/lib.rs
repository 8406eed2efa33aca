//! `landedcost-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): strongly-typed identifiers, the error taxonomy, the closed
//! currency set, and the monetary conversion/rounding helpers everything
//! else builds on.

pub mod currency;
pub mod error;
pub mod id;
pub mod money;

pub use currency::Currency;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use money::{net_base_amount, round2, to_base_amount};
