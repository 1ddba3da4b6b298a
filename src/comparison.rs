//! Ranking of several plans against the same usage.

use std::collections::BTreeMap;

use enumset::EnumSet;
use itertools::{Either, Itertools};
use tracing::{info, instrument, warn};

use crate::{
    billing::{BillingOptions, CalculationResult, calculate_monthly_cost},
    error::Error,
    quantity::Dollars,
    tariff::{PlanFeature, PlanType, TariffPlan},
    usage::WeeklyUsageProfile,
};

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPlan<'a> {
    pub plan: &'a TariffPlan,
    pub result: CalculationResult,
}

/// Plan that could not be priced, for example because it does not cover every hour.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanFailure<'a> {
    pub plan: &'a TariffPlan,
    pub error: Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison<'a> {
    /// Cheapest plan first.
    pub ranked: Vec<RankedPlan<'a>>,

    pub failures: Vec<PlanFailure<'a>>,
}

/// Price every plan. A failing plan is set aside and does not affect the others.
#[instrument(skip_all, fields(n_plans = plans.len()))]
pub fn compare<'a>(
    plans: &'a [TariffPlan],
    usage: &WeeklyUsageProfile,
    options: BillingOptions,
) -> Comparison<'a> {
    let (mut ranked, failures): (Vec<_>, Vec<_>) =
        plans.iter().partition_map(|plan| match calculate_monthly_cost(plan, usage, options) {
            Ok(result) => Either::Left(RankedPlan { plan, result }),
            Err(error) => {
                warn!(plan_id = %plan.id, "skipping the plan: {error}");
                Either::Right(PlanFailure { plan, error })
            }
        });
    ranked.sort_by(|lhs, rhs| {
        lhs.result
            .monthly_total
            .cmp(&rhs.result.monthly_total)
            .then_with(|| lhs.plan.id.cmp(&rhs.plan.id))
    });
    info!(n_ranked = ranked.len(), n_failed = failures.len(), "compared");
    Comparison { ranked, failures }
}

/// Plans of a single provider, summarised.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderGroup<'c, 'a> {
    pub provider: &'a str,

    /// Cheapest first.
    pub plans: Vec<&'c RankedPlan<'a>>,

    pub best_monthly_total: Dollars,

    pub plan_types: EnumSet<PlanType>,

    /// Distinct features across the plans, in order of first appearance.
    pub features: Vec<PlanFeature>,
}

impl<'a> Comparison<'a> {
    #[must_use]
    pub fn cheapest(&self) -> Option<&RankedPlan<'a>> {
        self.ranked.first()
    }

    /// Group the ranked plans by provider, the provider with the cheapest plan first.
    #[must_use]
    pub fn provider_groups(&self) -> Vec<ProviderGroup<'_, 'a>> {
        let mut by_provider: BTreeMap<&'a str, Vec<&RankedPlan<'a>>> = BTreeMap::new();
        for ranked in &self.ranked {
            by_provider.entry(ranked.plan.provider.as_str()).or_default().push(ranked);
        }
        by_provider
            .into_iter()
            .filter_map(|(provider, plans)| {
                let best_monthly_total = plans.first()?.result.monthly_total;
                let plan_types = plans
                    .iter()
                    .fold(EnumSet::empty(), |types, ranked| types | ranked.plan.plan_types());
                let features =
                    plans.iter().flat_map(|ranked| ranked.plan.features()).unique().collect();
                Some(ProviderGroup { provider, plans, best_monthly_total, plan_types, features })
            })
            .sorted_by(|lhs, rhs| {
                lhs.best_monthly_total
                    .cmp(&rhs.best_monthly_total)
                    .then_with(|| lhs.provider.cmp(rhs.provider))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        quantity::Percentage,
        tariff::{
            DayCategory,
            RateSegment,
            fixtures::{flat_plan, layered_plan},
        },
    };

    fn plans() -> Vec<TariffPlan> {
        let cheap = TariffPlan {
            id: "cheap".to_owned(),
            provider: "Other Power".to_owned(),
            fixed_daily_charge: 100.0.into(),
            discount_pct: Some(Percentage(3.0)),
            ..flat_plan()
        };
        let broken = TariffPlan {
            id: "weekdays-only".to_owned(),
            rates: vec![
                RateSegment::builder()
                    .start_hour(0)
                    .end_hour(23)
                    .rate(1.0)
                    .day_scope(DayCategory::Weekday)
                    .zone_name("Weekdays")
                    .build(),
            ],
            ..flat_plan()
        };
        vec![layered_plan(), flat_plan(), broken, cheap]
    }

    #[test]
    fn test_ranking() {
        let plans = plans();
        let comparison = compare(&plans, &WeeklyUsageProfile::default(), BillingOptions::default());

        let ids = comparison.ranked.iter().map(|ranked| ranked.plan.id.as_str()).collect_vec();
        assert_eq!(ids, ["cheap", "layered", "flat"]);
        assert!(
            comparison
                .ranked
                .is_sorted_by_key(|ranked| ranked.result.monthly_total)
        );
        assert_eq!(comparison.cheapest().unwrap().plan.id, "cheap");

        assert_eq!(comparison.failures.len(), 1);
        assert_eq!(comparison.failures[0].plan.id, "weekdays-only");
        assert!(matches!(comparison.failures[0].error, Error::UnresolvedRate { .. }));
    }

    #[test]
    fn test_provider_groups() {
        let plans = plans();
        let comparison = compare(&plans, &WeeklyUsageProfile::default(), BillingOptions::default());
        let groups = comparison.provider_groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].provider, "Other Power");
        assert_eq!(groups[0].features, [PlanFeature::Discount(Percentage(3.0))]);

        let test_energy = &groups[1];
        assert_eq!(test_energy.provider, "Test Energy");
        assert_eq!(test_energy.plans.len(), 2);
        assert_abs_diff_eq!(
            test_energy.best_monthly_total.0,
            test_energy.plans[0].result.monthly_total.0,
        );
        assert!(test_energy.plan_types.contains(PlanType::FlatRate));
        assert!(test_energy.plan_types.contains(PlanType::PerDay));
    }

    #[test]
    fn test_empty() {
        let comparison = compare(&[], &WeeklyUsageProfile::default(), BillingOptions::default());
        assert!(comparison.cheapest().is_none());
        assert!(comparison.provider_groups().is_empty());
    }
}
