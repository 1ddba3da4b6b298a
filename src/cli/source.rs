use std::{fs, path::PathBuf};

use clap::Parser;
use tariff_engine::{
    billing::BillingOptions,
    catalog,
    config::{PlanFile, UsageFile},
    quantity::KilowattHours,
    tariff::TariffPlan,
    usage::{DailyUsage, UsagePattern, WeeklyUsageProfile, scale},
};

use crate::prelude::*;

#[derive(Parser)]
pub struct PlanArgs {
    /// Plan files with `[[plans]]` tables.
    #[clap(long = "plans", env = "TARIFF_PLANS", value_delimiter = ',')]
    files: Vec<PathBuf>,

    /// Do not load the built-in plans.
    #[clap(long, env = "TARIFF_NO_CATALOG")]
    no_catalog: bool,
}

impl PlanArgs {
    pub fn load(&self) -> Result<Vec<TariffPlan>> {
        let mut plans = if self.no_catalog { Vec::new() } else { catalog::plans()? };
        for path in &self.files {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            let loaded = PlanFile::parse(&source, &path.display().to_string())?;
            debug!(path = %path.display(), n_plans = loaded.len(), "loaded");
            plans.extend(loaded);
        }
        ensure!(!plans.is_empty(), "no plans to work with");
        Ok(plans)
    }

    pub fn find(&self, id: &str) -> Result<TariffPlan> {
        self.load()?
            .into_iter()
            .find(|plan| plan.id == id)
            .with_context(|| format!("plan `{id}` is not found, see `tariff plans`"))
    }
}

#[derive(Parser)]
pub struct UsageArgs {
    /// Usage file with `everyday`, `weekday`, `weekend`, or per-day (`mon`…`sun`) hourly values.
    #[clap(long = "usage", env = "TARIFF_USAGE", conflicts_with = "pattern")]
    file: Option<PathBuf>,

    #[clap(flatten)]
    pattern: PatternArgs,
}

impl UsageArgs {
    /// Usage file, or the pattern scaled to the daily total, or the default usage.
    pub fn load(&self) -> Result<WeeklyUsageProfile> {
        if let Some(path) = &self.file {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            let profile = UsageFile::parse(&source)
                .with_context(|| format!("failed to parse `{}`", path.display()))?
                .into_profile();
            return Ok(profile);
        }
        match self.pattern.pattern {
            Some(pattern) => Ok(WeeklyUsageProfile::uniform(self.pattern.scale(pattern)?)),
            None => Ok(WeeklyUsageProfile::default()),
        }
    }
}

#[derive(Parser)]
pub struct PatternArgs {
    /// Named usage pattern.
    #[clap(long, env = "TARIFF_PATTERN")]
    pub pattern: Option<UsagePattern>,

    /// Daily total the pattern is scaled to.
    #[clap(long = "daily-kwh", env = "TARIFF_DAILY_KWH", default_value = "12")]
    pub daily_total: KilowattHours,
}

impl PatternArgs {
    pub fn scale(&self, pattern: UsagePattern) -> Result<DailyUsage> {
        let usage = scale(&pattern.shape(), self.daily_total)
            .with_context(|| format!("failed to scale the {} pattern", pattern.label()))?;
        info!(pattern = pattern.label(), total = %usage.total(), "scaled");
        Ok(usage)
    }
}

#[derive(Parser)]
pub struct BillingArgs {
    /// Add bundled services, such as broadband, to the bill.
    #[clap(long, env = "TARIFF_INCLUDE_BUNDLED")]
    include_bundled: bool,

    /// Subtract the joining credit, spread over 12 months, and the plan's discount.
    #[clap(long, env = "TARIFF_INCLUDE_DISCOUNT")]
    include_discount: bool,
}

impl BillingArgs {
    pub fn options(&self) -> BillingOptions {
        BillingOptions::builder()
            .include_bundled(self.include_bundled)
            .include_discount(self.include_discount)
            .build()
    }
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Show an average day instead of the whole month.
    #[clap(long, env = "TARIFF_DAILY")]
    pub daily: bool,

    /// Print JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}
