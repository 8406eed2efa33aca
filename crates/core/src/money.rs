//! Monetary conversion and rounding primitives.
//!
//! All amounts are `f64` in major units; externally visible totals are
//! rounded with [`round2`]. Conversions are total: bad rates clamp to zero
//! instead of producing negative or infinite money (input validation is the
//! form layer's job, not ours).

use crate::currency::Currency;

/// Convert an original amount into the base currency.
///
/// Base-currency amounts pass through unchanged regardless of `rate`.
/// Foreign amounts multiply by `rate`; a non-positive or non-finite rate
/// yields `0.0`.
pub fn to_base_amount(amount: f64, currency: Currency, rate: f64) -> f64 {
    if currency.is_base() {
        return amount;
    }
    if !rate.is_finite() || rate <= 0.0 {
        return 0.0;
    }
    amount * rate
}

/// Net amount of a payment in base currency: converted gross plus the bank
/// commission (already expressed in base currency).
pub fn net_base_amount(base_amount: f64, base_commission: f64) -> f64 {
    base_amount + base_commission
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_currency_is_identity_for_any_rate() {
        assert_eq!(to_base_amount(1250.0, Currency::Dop, 0.0), 1250.0);
        assert_eq!(to_base_amount(1250.0, Currency::Dop, 57.3), 1250.0);
        assert_eq!(to_base_amount(-40.0, Currency::Dop, -3.0), -40.0);
    }

    #[test]
    fn foreign_amount_multiplies_by_rate() {
        assert_eq!(to_base_amount(1000.0, Currency::Usd, 60.0), 60000.0);
    }

    #[test]
    fn non_positive_rate_clamps_to_zero() {
        assert_eq!(to_base_amount(1000.0, Currency::Usd, 0.0), 0.0);
        assert_eq!(to_base_amount(1000.0, Currency::Usd, -58.0), 0.0);
    }

    #[test]
    fn non_finite_rate_clamps_to_zero() {
        assert_eq!(to_base_amount(1000.0, Currency::Usd, f64::NAN), 0.0);
        assert_eq!(to_base_amount(1000.0, Currency::Usd, f64::INFINITY), 0.0);
    }

    #[test]
    fn net_amount_adds_commission() {
        // 1000 USD at 60 with RD$500 commission.
        let gross = to_base_amount(1000.0, Currency::Usd, 60.0);
        assert_eq!(gross, 60000.0);
        assert_eq!(net_base_amount(gross, 500.0), 60500.0);
    }

    #[test]
    fn round2_is_half_up() {
        assert_eq!(round2(10.344), 10.34);
        assert_eq!(round2(10.346), 10.35);
        // 0.125 is exact in binary, so the tie is a true tie.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(80.0), 80.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Base-currency conversion is the identity for every rate.
            #[test]
            fn base_identity(amount in -1.0e9f64..1.0e9, rate in -1.0e6f64..1.0e6) {
                prop_assert_eq!(to_base_amount(amount, Currency::Dop, rate), amount);
            }

            /// Non-positive rates clamp to zero instead of propagating.
            #[test]
            fn non_positive_rates_clamp(
                amount in -1.0e9f64..1.0e9,
                rate in -1.0e6f64..=0.0,
            ) {
                prop_assert_eq!(to_base_amount(amount, Currency::Usd, rate), 0.0);
            }
        }
    }
}
