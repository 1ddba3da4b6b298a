quantity!(
    /// Energy price in cents per kilowatt-hour.
    CentsPerKilowattHour, suffix: "¢/kWh", precision: 2
);

impl CentsPerKilowattHour {
    #[must_use]
    pub fn is_free(self) -> bool {
        self.0 == 0.0
    }
}
