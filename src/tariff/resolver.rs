use itertools::iproduct;

use crate::{
    LAST_HOUR,
    tariff::{Day, RateSegment, TariffPlan, ZoneClass},
};

impl TariffPlan {
    /// Find the segment pricing the hour of the day.
    ///
    /// A segment scoped to the very day wins over one scoped to the day's category
    /// (weekday or weekend), which in turn wins over an every-day segment. Within the same
    /// precedence, the first segment in plan order wins. Overlaps are not validated.
    #[must_use]
    pub fn resolve(&self, day: Day, hour: u8) -> Option<&RateSegment> {
        self.rates
            .iter()
            .filter(|segment| segment.contains(hour))
            .filter_map(|segment| Some((segment.day_scope.precedence_on(day)?, segment)))
            .min_by_key(|(precedence, _)| *precedence)
            .map(|(_, segment)| segment)
    }

    /// Zone class at the hour, used to colour usage bars.
    #[must_use]
    pub fn zone_class_at(&self, day: Day, hour: u8) -> Option<ZoneClass> {
        self.resolve(day, hour).map(|segment| segment.zone_class)
    }

    /// All the day-hours no segment covers. Empty for a well-formed plan.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<(Day, u8)> {
        iproduct!(Day::ALL, 0..=LAST_HOUR)
            .filter(|(day, hour)| self.resolve(*day, *hour).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::{
        DayScope,
        fixtures::{flat_plan, layered_plan},
    };

    #[test]
    fn test_specific_day_wins() {
        let plan = layered_plan();
        assert_eq!(plan.resolve(Day::Tue, 18).unwrap().zone_name, "Tuesday special");
        assert_eq!(plan.resolve(Day::Tue, 22).unwrap().zone_name, "Tuesday special");
    }

    #[test]
    fn test_falls_through_to_category() {
        let mut plan = layered_plan();
        plan.rates.retain(|segment| segment.day_scope != DayScope::from(Day::Tue));
        assert_eq!(plan.resolve(Day::Tue, 18).unwrap().zone_name, "Peak");
        assert_eq!(plan.resolve(Day::Wed, 18).unwrap().zone_name, "Peak");
    }

    #[test]
    fn test_falls_through_to_everyday() {
        let mut plan = layered_plan();
        plan.rates.retain(|segment| segment.day_scope == DayScope::EVERYDAY);
        assert_eq!(plan.resolve(Day::Tue, 18).unwrap().zone_name, "Anytime");
        assert_eq!(plan.resolve(Day::Sat, 18).unwrap().zone_name, "Anytime");
    }

    #[test]
    fn test_category_does_not_leak_to_other_days() {
        let plan = layered_plan();
        assert_eq!(plan.resolve(Day::Sun, 18).unwrap().zone_name, "Anytime");
        assert_eq!(plan.resolve(Day::Mon, 16).unwrap().zone_name, "Anytime");
    }

    #[test]
    fn test_first_match_within_tier() {
        let mut plan = flat_plan();
        let mut shadowed = plan.rates[0].clone();
        shadowed.zone_name = "Shadowed".to_owned();
        plan.rates.push(shadowed);
        assert_eq!(plan.resolve(Day::Mon, 0).unwrap().zone_name, "Anytime");
    }

    #[test]
    fn test_not_found() {
        let mut plan = layered_plan();
        plan.rates.remove(0);
        assert!(plan.resolve(Day::Sat, 3).is_none());
        assert!(plan.resolve(Day::Mon, 17).is_some());
        let gaps = plan.coverage_gaps();
        assert!(gaps.contains(&(Day::Sat, 3)));
        assert!(!gaps.contains(&(Day::Tue, 17)));
    }

    #[test]
    fn test_catch_all_covers_every_hour() {
        for plan in [flat_plan(), layered_plan()] {
            assert!(plan.coverage_gaps().is_empty());
            for day in Day::ALL {
                for hour in 0..=LAST_HOUR {
                    assert!(plan.zone_class_at(day, hour).is_some());
                }
            }
        }
    }
}
