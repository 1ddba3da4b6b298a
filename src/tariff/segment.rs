use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::{LAST_HOUR, quantity::CentsPerKilowattHour, tariff::DayScope};

/// Presentation class of a rate zone. It never takes part in pricing.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneClass {
    Peak,

    #[default]
    Shoulder,

    #[display("Off-peak")]
    OffPeak,

    Free,
}

impl ZoneClass {
    pub const fn color(self) -> Color {
        match self {
            Self::Peak => Color::Red,
            Self::Shoulder => Color::DarkYellow,
            Self::OffPeak => Color::Green,
            Self::Free => Color::Blue,
        }
    }
}

/// One priced interval of a plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[builder(on(String, into))]
pub struct RateSegment {
    /// Inclusive.
    pub start_hour: u8,

    /// Inclusive.
    pub end_hour: u8,

    #[serde(rename = "rateCents")]
    #[builder(into)]
    pub rate: CentsPerKilowattHour,

    #[serde(alias = "dayType")]
    #[builder(into, default = DayScope::EVERYDAY)]
    pub day_scope: DayScope,

    /// Display label, also the key the bill breakdown aggregates on.
    pub zone_name: String,

    #[serde(alias = "zoneColor")]
    #[builder(default)]
    pub zone_class: ZoneClass,
}

impl RateSegment {
    #[must_use]
    pub const fn contains(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// Whether the segment spans the whole day on every day.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.day_scope == DayScope::EVERYDAY && self.start_hour == 0 && self.end_hour == LAST_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::Day;

    #[test]
    fn test_contains_is_inclusive() {
        let segment = RateSegment::builder()
            .start_hour(7)
            .end_hour(8)
            .rate(52.99)
            .zone_name("Peak")
            .zone_class(ZoneClass::Peak)
            .build();
        assert!(!segment.contains(6));
        assert!(segment.contains(7));
        assert!(segment.contains(8));
        assert!(!segment.contains(9));
        assert!(!segment.is_catch_all());
    }

    #[test]
    fn test_builder_defaults() {
        let segment =
            RateSegment::builder().start_hour(0).end_hour(23).rate(25.0).zone_name("Anytime").build();
        assert_eq!(segment.day_scope, DayScope::EVERYDAY);
        assert_eq!(segment.zone_class, ZoneClass::Shoulder);
        assert!(segment.is_catch_all());
    }

    #[test]
    fn test_deserialize_importer_shape() {
        let segment: RateSegment = toml::from_str(
            r#"
            startHour = 22
            endHour = 23
            rateCents = 13.2
            dayType = "TUE"
            zoneName = "Half price"
            zoneColor = "OFF_PEAK"
            "#,
        )
        .unwrap();
        assert_eq!(segment.day_scope, DayScope::SpecificDay(Day::Tue));
        assert_eq!(segment.zone_class, ZoneClass::OffPeak);
        assert_eq!(segment.rate, CentsPerKilowattHour(13.2));
    }
}
