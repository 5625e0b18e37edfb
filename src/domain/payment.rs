use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A net payment amount.
///
/// Wrapper around `rust_decimal::Decimal` kept at full precision; rounding to
/// 2 fractional digits is a presentation concern, see [`Payment::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Payment(pub Decimal);

impl Payment {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to 2 fractional digits, for presentation.
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

impl Add for Payment {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// One row of the compensation table: an inclusive upper bound on total hours,
/// the hourly rate for the whole range, and the discount taken off the gross.
struct RateTier {
    upper_bound: Option<u32>,
    hourly_rate: Decimal,
    discount_rate: Decimal,
}

impl RateTier {
    fn contains(&self, total_hours: u32) -> bool {
        match self.upper_bound {
            Some(bound) => total_hours <= bound,
            None => true,
        }
    }
}

/// Ordered, mutually exclusive and exhaustive over all non-negative hours.
/// The final open-ended tier makes the first-match scan total.
static RATE_TABLE: [RateTier; 4] = [
    RateTier {
        upper_bound: Some(14),
        hourly_rate: dec!(200),
        discount_rate: dec!(0.15),
    },
    RateTier {
        upper_bound: Some(28),
        hourly_rate: dec!(250),
        discount_rate: dec!(0.16),
    },
    RateTier {
        upper_bound: Some(47),
        hourly_rate: dec!(300),
        discount_rate: dec!(0.17),
    },
    RateTier {
        upper_bound: None,
        hourly_rate: dec!(350),
        discount_rate: dec!(0.18),
    },
];

/// Computes the net payment for a technician's total worked hours.
///
/// gross = hours × rate of the matching tier; net = gross − gross × discount.
/// Total over all `u32` inputs and free of side effects.
pub fn calculate_payment(total_hours: u32) -> Payment {
    let tier = RATE_TABLE
        .iter()
        .find(|tier| tier.contains(total_hours))
        .unwrap_or(&RATE_TABLE[RATE_TABLE.len() - 1]);

    let gross = Decimal::from(total_hours) * tier.hourly_rate;
    let net = gross - gross * tier.discount_rate;
    Payment(net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_arithmetic() {
        let a = Payment::new(dec!(10.0));
        let b = Payment::new(dec!(5.0));
        assert_eq!(a + b, Payment::new(dec!(15.0)));
    }

    #[test]
    fn test_zero_hours_zero_payment() {
        assert_eq!(calculate_payment(0), Payment::ZERO);
    }

    #[test]
    fn test_first_tier() {
        // 10h × 200 = 2000, minus 15% = 1700
        assert_eq!(calculate_payment(10), Payment::new(dec!(1700)));
    }

    #[test]
    fn test_second_tier() {
        // 20h × 250 = 5000, minus 16% = 4200
        assert_eq!(calculate_payment(20), Payment::new(dec!(4200)));
    }

    #[test]
    fn test_tier_boundaries() {
        // Each boundary value resolves to the tier whose inclusive bound matches.
        let cases = [
            (0, dec!(0)),
            (14, dec!(2380)),   // 14 × 200 − 15%
            (15, dec!(3150)),   // 15 × 250 − 16%
            (28, dec!(5880)),   // 28 × 250 − 16%
            (29, dec!(7221)),   // 29 × 300 − 17%
            (47, dec!(11703)),  // 47 × 300 − 17%
            (48, dec!(13776)),  // 48 × 350 − 18%
            (100, dec!(28700)), // 100 × 350 − 18%
        ];
        for (hours, expected) in cases {
            assert_eq!(
                calculate_payment(hours),
                Payment::new(expected),
                "hours = {hours}"
            );
        }
    }

    #[test]
    fn test_monotonic_within_tiers() {
        let tiers = [(0u32, 14u32), (15, 28), (29, 47), (48, 200)];
        for (lo, hi) in tiers {
            for hours in lo..hi {
                assert!(
                    calculate_payment(hours) <= calculate_payment(hours + 1),
                    "payment decreased between {hours} and {} hours",
                    hours + 1
                );
            }
        }
    }

    #[test]
    fn test_payment_rounding_is_presentation_only() {
        let payment = Payment::new(dec!(1234.5678));
        assert_eq!(payment.rounded(), dec!(1234.57));
        assert_eq!(payment.value(), dec!(1234.5678));
    }
}
