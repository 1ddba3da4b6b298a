//! Monthly bill projection for a plan and a weekly usage profile.

mod result;

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

pub use self::result::{CalculationResult, CostCategory};
use crate::{
    LAST_HOUR,
    error::{Error, Result},
    quantity::{Cents, Dollars, KilowattHours},
    tariff::{Day, TariffPlan, ZoneClass},
    usage::WeeklyUsageProfile,
};

/// Length of the normalised billing month.
pub const DAYS_IN_MONTH: f64 = 30.0;

pub const WEEKDAYS_IN_MONTH: f64 = 21.0;

pub const WEEKEND_DAYS_IN_MONTH: f64 = DAYS_IN_MONTH - WEEKDAYS_IN_MONTH;

/// The joining credit is spread over this many months, for as long as the plan is kept.
pub const CREDIT_AMORTIZATION_MONTHS: f64 = 12.0;

/// Number of days in the normalised month a single day of the week stands for.
#[must_use]
pub fn month_weight(day: Day) -> f64 {
    if Day::WEEKEND.contains(day) {
        WEEKEND_DAYS_IN_MONTH / 2.0
    } else {
        WEEKDAYS_IN_MONTH / 5.0
    }
}

/// Optional terms of the bill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bon::Builder)]
pub struct BillingOptions {
    /// Add the plan's bundled monthly cost.
    #[builder(default)]
    pub include_bundled: bool,

    /// Subtract the amortised joining credit and the percentage discount.
    #[builder(default)]
    pub include_discount: bool,
}

/// Running totals of one rate zone.
struct Zone {
    class: ZoneClass,
    cost: Cents,
    energy: KilowattHours,
}

/// Project the monthly bill.
///
/// Every day of the week is weighted by [`month_weight`], every hour is priced with the segment
/// [`TariffPlan::resolve`] picks, and the costs are grouped by the segment's zone name.
/// The plan is checked with [`TariffPlan::validate`] first, so a malformed plan fails with
/// [`Error::InvalidPlan`]. A hour no segment covers aborts the calculation with
/// [`Error::UnresolvedRate`].
///
/// Rates carry fractions of a cent, so costs are accumulated as floating-point cents and
/// converted to dollars once, not rounded to whole cents on the way.
///
/// A negative total, possible with a large credit and little usage, is returned as is.
#[instrument(skip_all, fields(plan_id = %plan.id))]
pub fn calculate_monthly_cost(
    plan: &TariffPlan,
    usage: &WeeklyUsageProfile,
    options: BillingOptions,
) -> Result<CalculationResult> {
    plan.validate()?;
    let fixed_cost = plan.fixed_daily_charge * DAYS_IN_MONTH;

    let mut zones: BTreeMap<&str, Zone> = BTreeMap::new();
    for (day, daily_usage) in usage.iter() {
        let weight = month_weight(day);
        for (hour, energy) in (0..=LAST_HOUR).zip(daily_usage.hourly()) {
            let segment = plan.resolve(day, hour).ok_or_else(|| Error::UnresolvedRate {
                plan_id: plan.id.clone(),
                day,
                hour,
            })?;
            let energy = *energy * weight;
            let zone = zones.entry(&segment.zone_name).or_insert_with(|| Zone {
                class: segment.zone_class,
                cost: Cents::ZERO,
                energy: KilowattHours::ZERO,
            });
            zone.cost += energy * segment.rate;
            zone.energy += energy;
        }
    }

    let variable_cost: Cents = zones.values().map(|zone| zone.cost).sum();
    let bundled_cost = if options.include_bundled {
        plan.bundled_monthly_cost.unwrap_or(Dollars::ZERO)
    } else {
        Dollars::ZERO
    };
    let discount = if options.include_discount {
        let credit = plan.joining_credit.unwrap_or(Dollars::ZERO) / CREDIT_AMORTIZATION_MONTHS;
        let percentage = plan.discount_pct.map_or(0.0, |discount| discount.to_ratio());
        credit + Dollars::from((fixed_cost + variable_cost) * percentage)
    } else {
        Dollars::ZERO
    };

    let fixed_cost = Dollars::from(fixed_cost);
    let variable_cost = Dollars::from(variable_cost);
    let monthly_total = fixed_cost + variable_cost + bundled_cost - discount;
    if monthly_total < Dollars::ZERO {
        warn!(%monthly_total, "the credits exceed the bill");
    }

    let mut categories = zones
        .into_iter()
        .map(|(name, zone)| CostCategory {
            name: name.to_owned(),
            total_cost: zone.cost.into(),
            total_energy: zone.energy,
            zone_class: zone.class,
        })
        .collect::<Vec<_>>();
    categories.sort_by(|lhs, rhs| {
        rhs.total_cost.cmp(&lhs.total_cost).then_with(|| lhs.name.cmp(&rhs.name))
    });
    debug!(%monthly_total, %fixed_cost, %variable_cost, n_zones = categories.len(), "calculated");

    Ok(CalculationResult {
        plan_id: plan.id.clone(),
        monthly_total,
        fixed_cost,
        variable_cost,
        bundled_cost,
        discount,
        categories,
    })
}
