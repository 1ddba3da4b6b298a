//! Plan and usage files.
//!
//! Both are TOML. The library only parses them, reading is up to the caller.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    tariff::{Day, TariffPlan},
    usage::{DailyUsage, UsageMode, WeeklyUsageProfile},
};

/// `[[plans]]` tables with the same keys as the plan importer produces.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    #[serde(default)]
    pub plans: Vec<TariffPlan>,
}

impl PlanFile {
    /// Parse and validate the plans, `origin` names the source in errors.
    pub fn parse(source: &str, origin: &str) -> Result<Vec<TariffPlan>> {
        let file: Self = toml::from_str(source)
            .map_err(|error| Error::plan(origin, error.message().to_owned()))?;
        for plan in &file.plans {
            plan.validate()?;
        }
        Ok(file.plans)
    }
}

/// Weekly usage, as broad or as detailed as needed:
///
/// ```toml
/// everyday = [0.2, 0.2, …]  # 24 values
/// weekend = […]
/// sun = […]
/// ```
///
/// The tables are applied over the default usage from the broadest to the most specific,
/// so a day key wins over `weekday` or `weekend`, which win over `everyday`.
#[derive(Debug, Default, Deserialize)]
pub struct UsageFile {
    pub everyday: Option<DailyUsage>,

    pub weekday: Option<DailyUsage>,

    pub weekend: Option<DailyUsage>,

    #[serde(flatten)]
    pub days: BTreeMap<Day, DailyUsage>,
}

impl UsageFile {
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|error| Error::usage_shape(error.message().to_owned()))
    }

    pub fn into_profile(self) -> WeeklyUsageProfile {
        let mut profile = WeeklyUsageProfile::default();
        if let Some(usage) = self.everyday {
            profile.apply(UsageMode::Simple, Day::Mon, usage);
        }
        if let Some(usage) = self.weekday {
            profile.apply(UsageMode::WeekdayWeekend, Day::Mon, usage);
        }
        if let Some(usage) = self.weekend {
            profile.apply(UsageMode::WeekdayWeekend, Day::Sat, usage);
        }
        for (day, usage) in self.days {
            profile.apply(UsageMode::PerDay, day, usage);
        }
        profile
    }
}
