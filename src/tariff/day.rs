use enumset::{EnumSet, EnumSetType, enum_set};
use serde::{Deserialize, Serialize};

/// Day of the week, Monday first.
#[derive(Debug, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display, EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    #[serde(alias = "MON")]
    Mon,

    #[serde(alias = "TUE")]
    Tue,

    #[serde(alias = "WED")]
    Wed,

    #[serde(alias = "THU")]
    Thu,

    #[serde(alias = "FRI")]
    Fri,

    #[serde(alias = "SAT")]
    Sat,

    #[serde(alias = "SUN")]
    Sun,
}

impl Day {
    pub const ALL: [Self; 7] =
        [Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri, Self::Sat, Self::Sun];

    pub const WEEKDAYS: EnumSet<Self> =
        enum_set!(Day::Mon | Day::Tue | Day::Wed | Day::Thu | Day::Fri);

    pub const WEEKEND: EnumSet<Self> = enum_set!(Day::Sat | Day::Sun);

    #[must_use]
    pub const fn category(self) -> DayCategory {
        match self {
            Self::Mon | Self::Tue | Self::Wed | Self::Thu | Self::Fri => DayCategory::Weekday,
            Self::Sat | Self::Sun => DayCategory::Weekend,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayCategory {
    Weekday,
    Weekend,

    /// Every day of the week.
    All,
}

impl DayCategory {
    #[must_use]
    pub fn days(self) -> EnumSet<Day> {
        match self {
            Self::Weekday => Day::WEEKDAYS,
            Self::Weekend => Day::WEEKEND,
            Self::All => EnumSet::all(),
        }
    }
}

/// Days a rate segment applies to.
///
/// Serialized as `WEEKDAY`, `WEEKEND`, `ALL`, or a day key (`mon`, `MON`, …).
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(untagged)]
pub enum DayScope {
    Category(DayCategory),
    SpecificDay(Day),
}

/// How specific a matching scope is, most specific first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Precedence {
    SpecificDay,
    Category,
    Everyday,
}

impl DayScope {
    pub const EVERYDAY: Self = Self::Category(DayCategory::All);

    /// Precedence of the scope on the given day, or `None` if the scope does not cover the day.
    #[must_use]
    pub fn precedence_on(self, day: Day) -> Option<Precedence> {
        match self {
            Self::SpecificDay(scope_day) => (scope_day == day).then_some(Precedence::SpecificDay),
            Self::Category(DayCategory::Weekday) => {
                (day.category() == DayCategory::Weekday).then_some(Precedence::Category)
            }
            Self::Category(DayCategory::Weekend) => {
                (day.category() == DayCategory::Weekend).then_some(Precedence::Category)
            }
            Self::Category(DayCategory::All) => Some(Precedence::Everyday),
        }
    }

    #[must_use]
    pub fn days(self) -> EnumSet<Day> {
        match self {
            Self::Category(category) => category.days(),
            Self::SpecificDay(day) => EnumSet::only(day),
        }
    }

    #[must_use]
    pub const fn is_specific_day(self) -> bool {
        matches!(self, Self::SpecificDay(_))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Scoped {
        scope: DayScope,
    }

    fn parse_scope(value: &str) -> DayScope {
        toml::from_str::<Scoped>(&format!("scope = \"{value}\"")).unwrap().scope
    }

    #[test]
    fn test_category() {
        assert_eq!(Day::Fri.category(), DayCategory::Weekday);
        assert_eq!(Day::Sun.category(), DayCategory::Weekend);
        assert_eq!(Day::WEEKDAYS.len() + Day::WEEKEND.len(), 7);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(DayScope::from(Day::Tue).precedence_on(Day::Tue), Some(Precedence::SpecificDay));
        assert_eq!(DayScope::from(Day::Tue).precedence_on(Day::Wed), None);
        assert_eq!(
            DayScope::from(DayCategory::Weekend).precedence_on(Day::Sat),
            Some(Precedence::Category),
        );
        assert_eq!(DayScope::from(DayCategory::Weekend).precedence_on(Day::Mon), None);
        assert_eq!(DayScope::EVERYDAY.precedence_on(Day::Sun), Some(Precedence::Everyday));
    }

    #[test]
    fn test_deserialize_scope() {
        assert_eq!(parse_scope("WEEKDAY"), DayScope::Category(DayCategory::Weekday));
        assert_eq!(parse_scope("ALL"), DayScope::EVERYDAY);
        assert_eq!(parse_scope("MON"), DayScope::SpecificDay(Day::Mon));
        assert_eq!(parse_scope("sat"), DayScope::SpecificDay(Day::Sat));
        assert!(toml::from_str::<Scoped>("scope = \"FORTNIGHTLY\"").is_err());
    }

    #[test]
    fn test_scope_days() {
        assert_eq!(DayScope::from(DayCategory::Weekday).days(), Day::WEEKDAYS);
        assert_eq!(DayScope::EVERYDAY.days().len(), 7);
        assert_eq!(DayScope::from(Day::Wed).days(), EnumSet::only(Day::Wed));
    }
}
