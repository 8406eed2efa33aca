use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use landedcost_core::{net_base_amount, to_base_amount, AggregateId, Currency};

use crate::order::PurchaseOrderId;

/// Payment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub AggregateId);

impl PaymentId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Settlement state of a payment.
///
/// Pending payments have no realized base amount yet and contribute nothing
/// to an order's paid total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Settled,
}

/// A payment made to a supplier against a purchase order.
///
/// `exchange_rate` is the realized rate to base currency for this payment;
/// it is ignored when `currency` is already the base currency.
/// `commission_base` is the bank commission, already expressed in base
/// currency by the bank statement the record was keyed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: PurchaseOrderId,
    pub amount: f64,
    pub currency: Currency,
    pub exchange_rate: f64,
    pub commission_base: f64,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    /// Gross amount in base currency (before commission).
    pub fn gross_base(&self) -> f64 {
        to_base_amount(self.amount, self.currency, self.exchange_rate)
    }

    /// Net amount in base currency (gross plus bank commission), or `None`
    /// while the payment is still pending.
    pub fn net_base(&self) -> Option<f64> {
        match self.status {
            PaymentStatus::Pending => None,
            PaymentStatus::Settled => Some(net_base_amount(self.gross_base(), self.commission_base)),
        }
    }

    /// Whether this payment was made in a foreign currency.
    pub fn is_foreign(&self) -> bool {
        !self.currency.is_base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: f64, currency: Currency, rate: f64, commission: f64) -> Payment {
        Payment {
            id: PaymentId::new(AggregateId::new()),
            order_id: PurchaseOrderId::new(AggregateId::new()),
            amount,
            currency,
            exchange_rate: rate,
            commission_base: commission,
            status: PaymentStatus::Settled,
            paid_at: Utc::now(),
        }
    }

    #[test]
    fn foreign_payment_converts_and_adds_commission() {
        let p = payment(1000.0, Currency::Usd, 60.0, 500.0);
        assert_eq!(p.gross_base(), 60000.0);
        assert_eq!(p.net_base(), Some(60500.0));
    }

    #[test]
    fn base_currency_payment_ignores_rate() {
        let p = payment(25000.0, Currency::Dop, 57.0, 150.0);
        assert_eq!(p.gross_base(), 25000.0);
        assert_eq!(p.net_base(), Some(25150.0));
    }

    #[test]
    fn pending_payment_has_no_net_amount() {
        let mut p = payment(1000.0, Currency::Usd, 60.0, 500.0);
        p.status = PaymentStatus::Pending;
        assert_eq!(p.net_base(), None);
    }

    #[test]
    fn bad_rate_clamps_gross_to_zero() {
        let p = payment(1000.0, Currency::Usd, -3.0, 500.0);
        assert_eq!(p.gross_base(), 0.0);
        // Commission still counts once settled; the clamp only kills the
        // converted principal.
        assert_eq!(p.net_base(), Some(500.0));
    }
}
