//! Proportional cost distribution.
//!
//! One generic engine over the [`Allocatable`] seam, instantiated for two
//! entity shapes: purchase-order line items (weight / volume / value / unit
//! bases) and whole orders sharing a shipment ([`ShipmentOrder`], which adds
//! the box-count basis). The engine is total: degenerate inputs produce
//! all-zero shares, and a basis with no usable data degrades to unit-count
//! before the routing layer escalates further.

use serde::{Deserialize, Serialize};

use landedcost_core::round2;
use landedcost_purchasing::{LineItem, PurchaseOrderId};

use crate::basis::AllocationBasis;

/// A cost-bearing entity the engine can distribute over.
///
/// `quantity` is mandatory; the remaining accessors return `None` when the
/// entity shape does not carry that attribute. The derived magnitudes
/// (`weight`, `volume`, `declared_value`) treat missing attributes as zero.
pub trait Allocatable {
    fn quantity(&self) -> f64;

    fn unit_weight_kg(&self) -> Option<f64> {
        None
    }

    fn unit_volume_m3(&self) -> Option<f64> {
        None
    }

    fn unit_price(&self) -> Option<f64> {
        None
    }

    fn box_count(&self) -> Option<f64> {
        None
    }

    /// Total weight this entity contributes to a weight-basis split.
    fn weight(&self) -> f64 {
        self.quantity() * self.unit_weight_kg().unwrap_or(0.0)
    }

    /// Total volume this entity contributes to a volume-basis split.
    fn volume(&self) -> f64 {
        self.quantity() * self.unit_volume_m3().unwrap_or(0.0)
    }

    /// Declared value in base currency at `rate`.
    fn declared_value(&self, rate: f64) -> f64 {
        self.quantity() * self.unit_price().unwrap_or(0.0) * rate
    }
}

impl Allocatable for LineItem {
    fn quantity(&self) -> f64 {
        f64::from(self.quantity)
    }

    fn unit_weight_kg(&self) -> Option<f64> {
        self.unit_weight_kg
    }

    fn unit_volume_m3(&self) -> Option<f64> {
        self.unit_volume_m3
    }

    fn unit_price(&self) -> Option<f64> {
        Some(self.unit_price)
    }
}

/// Order-level entity for splitting a shipment-wide expense across the
/// orders that shared the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentOrder {
    pub order_id: PurchaseOrderId,
    /// Total units ordered.
    pub units: u32,
    /// Declared (FOB) total of the order, in base currency.
    pub declared_total: f64,
    /// Container boxes attributed to the order, when reported.
    pub boxes: Option<u32>,
}

impl Allocatable for ShipmentOrder {
    fn quantity(&self) -> f64 {
        f64::from(self.units)
    }

    fn box_count(&self) -> Option<f64> {
        self.boxes.map(f64::from)
    }

    fn declared_value(&self, rate: f64) -> f64 {
        self.declared_total * rate
    }
}

/// Per-entity outcome of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionShare {
    /// Fraction of the total cost (0–1), unrounded.
    pub share: f64,
    /// Amount of the total cost assigned to the entity, rounded to cents.
    pub amount: f64,
    /// `amount / quantity` when the entity has units, else 0.
    pub unit_cost: f64,
}

impl DistributionShare {
    fn zero() -> Self {
        Self {
            share: 0.0,
            amount: 0.0,
            unit_cost: 0.0,
        }
    }
}

/// Distribute `total_cost` across `entities` proportionally to `basis`.
///
/// `exchange_rate` converts declared values into base currency and only
/// matters for the declared-value basis; pass `1.0` when prices are already
/// in base currency.
///
/// Degenerate inputs (`total_cost == 0`, no entities) yield all-zero shares.
/// A basis whose governing sum is zero degrades to unit-count; if the chosen
/// basis still produces an all-zero distribution, routing escalates through
/// declared-value and then unit-count before giving up.
pub fn distribute<T: Allocatable>(
    entities: &[T],
    total_cost: f64,
    basis: AllocationBasis,
    exchange_rate: f64,
) -> Vec<DistributionShare> {
    if entities.is_empty() || total_cost == 0.0 {
        return entities.iter().map(|_| DistributionShare::zero()).collect();
    }

    for candidate in escalation_chain(basis) {
        let shares = distribute_by(entities, total_cost, candidate, exchange_rate);
        if shares.iter().any(|s| s.share != 0.0) {
            if candidate != basis {
                tracing::debug!(
                    requested = %basis,
                    used = %candidate,
                    "allocation basis produced no usable distribution, escalated"
                );
            }
            return shares;
        }
    }

    // Nothing to key on at all (every quantity is zero).
    entities.iter().map(|_| DistributionShare::zero()).collect()
}

/// Fixed escalation order: requested basis, declared value, unit count.
fn escalation_chain(basis: AllocationBasis) -> impl Iterator<Item = AllocationBasis> {
    let mut chain = vec![basis];
    if basis != AllocationBasis::DeclaredValue {
        chain.push(AllocationBasis::DeclaredValue);
    }
    if basis != AllocationBasis::Units {
        chain.push(AllocationBasis::Units);
    }
    chain.into_iter()
}

/// One basis, including its own zero-sum degradation to unit count.
fn distribute_by<T: Allocatable>(
    entities: &[T],
    total_cost: f64,
    basis: AllocationBasis,
    exchange_rate: f64,
) -> Vec<DistributionShare> {
    let magnitudes = basis_magnitudes(entities, basis, exchange_rate);
    let governing_sum: f64 = magnitudes.iter().sum();

    if governing_sum == 0.0 && basis != AllocationBasis::Units {
        // No usable size/value data: split evenly per unit instead.
        return distribute_by(entities, total_cost, AllocationBasis::Units, exchange_rate);
    }
    if governing_sum == 0.0 {
        return entities.iter().map(|_| DistributionShare::zero()).collect();
    }

    assign_amounts(entities, &magnitudes, governing_sum, total_cost)
}

fn basis_magnitudes<T: Allocatable>(
    entities: &[T],
    basis: AllocationBasis,
    exchange_rate: f64,
) -> Vec<f64> {
    let rate = if exchange_rate.is_finite() && exchange_rate > 0.0 {
        exchange_rate
    } else {
        1.0
    };
    entities
        .iter()
        .map(|e| match basis {
            AllocationBasis::Weight => e.weight(),
            AllocationBasis::Volume => e.volume(),
            AllocationBasis::DeclaredValue => e.declared_value(rate),
            AllocationBasis::Units => e.quantity(),
            AllocationBasis::Boxes => e.box_count().unwrap_or(0.0),
        })
        .collect()
}

/// Turn magnitudes into shares and cent-rounded amounts.
///
/// The last entity with a non-zero share absorbs the rounding residue so the
/// assigned amounts reconcile with the input total.
fn assign_amounts<T: Allocatable>(
    entities: &[T],
    magnitudes: &[f64],
    governing_sum: f64,
    total_cost: f64,
) -> Vec<DistributionShare> {
    let shares: Vec<f64> = magnitudes.iter().map(|m| m / governing_sum).collect();
    let last_nonzero = shares.iter().rposition(|&s| s != 0.0);

    let mut assigned = 0.0;
    shares
        .iter()
        .zip(entities)
        .enumerate()
        .map(|(i, (&share, entity))| {
            let amount = if Some(i) == last_nonzero {
                round2(total_cost - assigned)
            } else {
                round2(share * total_cost)
            };
            assigned += amount;

            let quantity = entity.quantity();
            let unit_cost = if quantity > 0.0 {
                round2(amount / quantity)
            } else {
                0.0
            };

            DistributionShare {
                share,
                amount,
                unit_cost,
            }
        })
        .collect()
}
