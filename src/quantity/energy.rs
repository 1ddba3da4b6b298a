use std::ops::Mul;

use crate::quantity::{cost::Cents, rate::CentsPerKilowattHour};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

impl KilowattHours {
    /// Whole hundredths of a kilowatt-hour, rounded half away from zero.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hundredths(self) -> u64 {
        (self.0 * 100.0).round() as u64
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths as f64 / 100.0)
    }
}

impl Mul<CentsPerKilowattHour> for KilowattHours {
    type Output = Cents;

    fn mul(self, rate: CentsPerKilowattHour) -> Self::Output {
        Cents(self.0 * rate.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_hundredths() {
        assert_eq!(KilowattHours(123.45).to_hundredths(), 12345);
        assert_eq!(KilowattHours(999.99).to_hundredths(), 99999);
        assert_eq!(KilowattHours(0.005).to_hundredths(), 1);
        assert_abs_diff_eq!(KilowattHours::from_hundredths(2001).0, 20.01);
    }

    #[test]
    fn test_mul_rate() {
        assert_abs_diff_eq!((KilowattHours(2.0) * CentsPerKilowattHour(25.0)).0, 50.0);
    }
}
