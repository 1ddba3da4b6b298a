use clap::Parser;
use itertools::Itertools;
use tariff_engine::{comparison::compare, usage::UsageMode};

use crate::{
    cli::source::{BillingArgs, OutputArgs, PlanArgs, UsageArgs},
    prelude::*,
    tables::{build_comparison_table, build_provider_table},
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    plans: PlanArgs,

    #[clap(flatten)]
    usage: UsageArgs,

    #[clap(flatten)]
    billing: BillingArgs,

    #[clap(flatten)]
    output: OutputArgs,

    /// Group the plans by provider.
    #[clap(long)]
    by_provider: bool,
}

impl CompareArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let plans = self.plans.load()?;
        let usage = self.usage.load()?;
        info!(n_plans = plans.len(), weekly_total = %usage.weekly_total(), "comparing…");

        let comparison = compare(&plans, &usage, self.billing.options());
        ensure!(!comparison.ranked.is_empty(), "none of the plans could be priced");

        for ranked in &comparison.ranked {
            let recommended = ranked.plan.recommended_usage_mode();
            if recommended > UsageMode::Simple {
                debug!(plan_id = %ranked.plan.id, %recommended, "plan rates depend on the day");
            }
        }

        if self.output.json {
            let results = comparison
                .ranked
                .iter()
                .map(|ranked| {
                    if self.output.daily { ranked.result.per_day() } else { ranked.result.clone() }
                })
                .collect_vec();
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else if self.by_provider {
            println!("{}", build_provider_table(&comparison.provider_groups(), self.output.daily));
        } else {
            println!("{}", build_comparison_table(&comparison, self.output.daily));
        }

        for failure in &comparison.failures {
            warn!(plan_id = %failure.plan.id, "not priced: {}", failure.error);
        }
        Ok(())
    }
}
