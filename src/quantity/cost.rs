use crate::quantity::{energy::KilowattHours, rate::CentsPerKilowattHour};

quantity!(
    /// Money in cents, the unit of tariff sheets and of the internal accumulation.
    Cents, suffix: "¢", precision: 2
);

quantity!(
    /// Money in dollars, the unit of every figure reported to the presentation layer.
    Dollars, prefix: "$", precision: 2
);

impl Cents {
    /// Average rate over the energy, zero when no energy has been consumed.
    #[must_use]
    pub fn per(self, energy: KilowattHours) -> CentsPerKilowattHour {
        if energy.0 == 0.0 {
            CentsPerKilowattHour::ZERO
        } else {
            CentsPerKilowattHour(self.0 / energy.0)
        }
    }
}

impl From<Cents> for Dollars {
    fn from(cents: Cents) -> Self {
        Self(cents.0 / 100.0)
    }
}

impl From<Dollars> for Cents {
    fn from(dollars: Dollars) -> Self {
        Self(dollars.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cents_to_dollars() {
        assert_abs_diff_eq!(Dollars::from(Cents(18_000.0)).0, 180.0);
    }

    #[test]
    fn test_per_zero_energy() {
        assert_eq!(Cents(10.0).per(KilowattHours::ZERO), CentsPerKilowattHour::ZERO);
        assert_abs_diff_eq!(Cents(10.0).per(KilowattHours(4.0)).0, 2.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dollars(270.0).to_string(), "$270.00");
        assert_eq!(Dollars(-1.5).to_string(), "-$1.50");
        assert_eq!(Cents(26.439).to_string(), "26.44 ¢");
    }
}
