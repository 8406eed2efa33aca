//! Realized exchange-rate metric.

use landedcost_purchasing::Payment;

/// Average of the exchange rates realized by an order's foreign-currency
/// payments; 0 when none qualify.
///
/// Deliberately a plain arithmetic mean, not an amount-weighted one: the
/// figure is informational, shown next to the per-payment rates already
/// baked into each net amount. Base-currency payments and payments with a
/// non-positive or non-finite rate are left out.
pub fn average_exchange_rate(payments: &[Payment]) -> f64 {
    let rates: Vec<f64> = payments
        .iter()
        .filter(|p| p.is_foreign())
        .map(|p| p.exchange_rate)
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect();

    if rates.is_empty() {
        return 0.0;
    }
    rates.iter().sum::<f64>() / rates.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use landedcost_core::{AggregateId, Currency};
    use landedcost_purchasing::{PaymentId, PaymentStatus, PurchaseOrderId};

    fn payment(amount: f64, currency: Currency, rate: f64) -> Payment {
        Payment {
            id: PaymentId::new(AggregateId::new()),
            order_id: PurchaseOrderId::new(AggregateId::new()),
            amount,
            currency,
            exchange_rate: rate,
            commission_base: 0.0,
            status: PaymentStatus::Settled,
            paid_at: Utc::now(),
        }
    }

    #[test]
    fn simple_mean_of_two_rates_regardless_of_amounts() {
        // 100 at 58 and 10,000 at 62: the mean stays 60.
        let payments = vec![
            payment(100.0, Currency::Usd, 58.0),
            payment(10_000.0, Currency::Usd, 62.0),
        ];
        assert_eq!(average_exchange_rate(&payments), 60.0);
    }

    #[test]
    fn base_currency_payments_are_excluded() {
        let payments = vec![
            payment(5_000.0, Currency::Dop, 1.0),
            payment(1_000.0, Currency::Usd, 59.0),
        ];
        assert_eq!(average_exchange_rate(&payments), 59.0);
    }

    #[test]
    fn invalid_rates_are_excluded() {
        let payments = vec![
            payment(1_000.0, Currency::Usd, 0.0),
            payment(1_000.0, Currency::Usd, -4.0),
            payment(1_000.0, Currency::Usd, f64::NAN),
            payment(1_000.0, Currency::Usd, 61.0),
        ];
        assert_eq!(average_exchange_rate(&payments), 61.0);
    }

    #[test]
    fn no_qualifying_payments_means_zero() {
        assert_eq!(average_exchange_rate(&[]), 0.0);
        let payments = vec![payment(5_000.0, Currency::Dop, 1.0)];
        assert_eq!(average_exchange_rate(&payments), 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The mean of qualifying rates stays inside their range.
            #[test]
            fn mean_is_bounded_by_the_rates(
                rates in proptest::collection::vec(0.01f64..500.0, 1..10),
            ) {
                let payments: Vec<Payment> = rates
                    .iter()
                    .map(|&r| payment(1_000.0, Currency::Usd, r))
                    .collect();

                let mean = average_exchange_rate(&payments);
                let min = rates.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
            }

            /// Amounts never influence the figure: only rates do.
            #[test]
            fn amounts_do_not_weight_the_mean(
                amount_a in 0.01f64..1.0e6,
                amount_b in 0.01f64..1.0e6,
            ) {
                let small = vec![
                    payment(amount_a, Currency::Usd, 58.0),
                    payment(amount_b, Currency::Usd, 62.0),
                ];
                prop_assert_eq!(average_exchange_rate(&small), 60.0);
            }
        }
    }
}
