quantity!(Percentage, suffix: "%", precision: 1);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the percentage into `0.0..=1.0`.
    #[must_use]
    pub const fn to_ratio(self) -> f64 {
        0.01 * self.0
    }
}
