//! Household usage: hourly kWh for every day of the week.

mod pattern;
mod scaler;

use std::{collections::BTreeMap, ops::Index};

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

pub use self::{
    pattern::UsagePattern,
    scaler::{allocate, scale},
};
use crate::{
    HOURS_PER_DAY,
    error::{Error, Result},
    quantity::KilowattHours,
    tariff::Day,
};

/// Hourly consumption over one day: exactly 24 finite, non-negative kWh values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
#[must_use]
pub struct DailyUsage([KilowattHours; HOURS_PER_DAY]);

impl DailyUsage {
    pub const ZERO: Self = Self([KilowattHours::ZERO; HOURS_PER_DAY]);

    /// Usage assumed for an hour nobody described.
    pub const DEFAULT_HOURLY: KilowattHours = KilowattHours(0.5);

    pub fn new(hourly: [f64; HOURS_PER_DAY]) -> Result<Self> {
        for (hour, value) in hourly.iter().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                return Err(Error::usage_shape(format!(
                    "hour {hour} has {value} kWh, expected a finite non-negative number",
                )));
            }
        }
        Ok(Self::from_trusted(hourly))
    }

    /// Build from compile-time shapes, skipping validation.
    pub(crate) const fn from_trusted(hourly: [f64; HOURS_PER_DAY]) -> Self {
        let mut values = [KilowattHours::ZERO; HOURS_PER_DAY];
        let mut hour = 0;
        while hour < HOURS_PER_DAY {
            values[hour] = KilowattHours(hourly[hour]);
            hour += 1;
        }
        Self(values)
    }

    pub fn from_hundredths(hundredths: [u64; HOURS_PER_DAY]) -> Self {
        Self(hundredths.map(KilowattHours::from_hundredths))
    }

    pub const fn flat(hourly: KilowattHours) -> Self {
        Self([hourly; HOURS_PER_DAY])
    }

    #[must_use]
    pub const fn hourly(&self) -> &[KilowattHours; HOURS_PER_DAY] {
        &self.0
    }

    #[must_use]
    pub fn total(&self) -> KilowattHours {
        self.0.iter().copied().sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|value| *value == KilowattHours::ZERO)
    }
}

impl Default for DailyUsage {
    fn default() -> Self {
        Self::flat(Self::DEFAULT_HOURLY)
    }
}

impl Index<u8> for DailyUsage {
    type Output = KilowattHours;

    fn index(&self, hour: u8) -> &Self::Output {
        &self.0[usize::from(hour)]
    }
}

impl TryFrom<Vec<f64>> for DailyUsage {
    type Error = Error;

    fn try_from(hourly: Vec<f64>) -> Result<Self> {
        let length = hourly.len();
        let hourly: [f64; HOURS_PER_DAY] = hourly.try_into().map_err(|_| {
            Error::usage_shape(format!("expected {HOURS_PER_DAY} hourly values, got {length}"))
        })?;
        Self::new(hourly)
    }
}

impl From<DailyUsage> for Vec<f64> {
    fn from(usage: DailyUsage) -> Self {
        usage.0.iter().map(|value| value.0).collect()
    }
}

/// How far a usage edit spreads across the week.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum UsageMode {
    /// Same usage every day.
    #[default]
    Simple,

    /// One profile for weekdays, another one for the weekend.
    #[display("Weekday & weekend")]
    WeekdayWeekend,

    /// Every day on its own.
    #[display("Per day")]
    PerDay,
}

impl UsageMode {
    /// Days an edit made on `day` applies to.
    #[must_use]
    pub fn affected_days(self, day: Day) -> EnumSet<Day> {
        match self {
            Self::Simple => EnumSet::all(),
            Self::WeekdayWeekend => day.category().days(),
            Self::PerDay => EnumSet::only(day),
        }
    }

    /// Switch to a finer mode if the plan needs one, never to a coarser one.
    #[must_use]
    pub fn upgrade(self, recommended: Self) -> Self {
        self.max(recommended)
    }
}

/// Usage for each day of the week. Owned by the caller, the engine only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Day, DailyUsage>", into = "BTreeMap<Day, DailyUsage>")]
#[must_use]
pub struct WeeklyUsageProfile([DailyUsage; 7]);

impl WeeklyUsageProfile {
    pub const fn uniform(usage: DailyUsage) -> Self {
        Self([usage; 7])
    }

    pub fn set(&mut self, day: Day, usage: DailyUsage) {
        self.0[day.index()] = usage;
    }

    /// Write the usage to every day the mode ties to `day`.
    pub fn apply(&mut self, mode: UsageMode, day: Day, usage: DailyUsage) {
        for day in mode.affected_days(day) {
            self.set(day, usage);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &DailyUsage)> {
        Day::ALL.into_iter().zip(&self.0)
    }

    #[must_use]
    pub fn weekly_total(&self) -> KilowattHours {
        self.0.iter().map(DailyUsage::total).sum()
    }
}

impl Default for WeeklyUsageProfile {
    fn default() -> Self {
        Self::uniform(DailyUsage::default())
    }
}

impl Index<Day> for WeeklyUsageProfile {
    type Output = DailyUsage;

    fn index(&self, day: Day) -> &Self::Output {
        &self.0[day.index()]
    }
}

impl TryFrom<BTreeMap<Day, DailyUsage>> for WeeklyUsageProfile {
    type Error = Error;

    fn try_from(mut days: BTreeMap<Day, DailyUsage>) -> Result<Self> {
        let mut profile = Self::uniform(DailyUsage::ZERO);
        for day in Day::ALL {
            let usage = days
                .remove(&day)
                .ok_or_else(|| Error::usage_shape(format!("no usage given for {day}")))?;
            profile.set(day, usage);
        }
        Ok(profile)
    }
}

impl From<WeeklyUsageProfile> for BTreeMap<Day, DailyUsage> {
    fn from(profile: WeeklyUsageProfile) -> Self {
        profile.iter().map(|(day, usage)| (day, *usage)).collect()
    }
}
