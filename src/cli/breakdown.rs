use clap::Parser;
use tariff_engine::billing::calculate_monthly_cost;

use crate::{
    cli::source::{BillingArgs, OutputArgs, PlanArgs, UsageArgs},
    prelude::*,
    tables::build_breakdown_table,
};

#[derive(Parser)]
pub struct BreakdownArgs {
    /// Plan ID.
    #[clap(long = "plan", env = "TARIFF_PLAN")]
    plan_id: String,

    #[clap(flatten)]
    plans: PlanArgs,

    #[clap(flatten)]
    usage: UsageArgs,

    #[clap(flatten)]
    billing: BillingArgs,

    #[clap(flatten)]
    output: OutputArgs,
}

impl BreakdownArgs {
    #[instrument(skip_all, fields(plan_id = %self.plan_id))]
    pub fn run(self) -> Result {
        let plan = self.plans.find(&self.plan_id)?;
        let usage = self.usage.load()?;
        let result = calculate_monthly_cost(&plan, &usage, self.billing.options())?;
        let result = if self.output.daily { result.per_day() } else { result };

        if self.output.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", build_breakdown_table(&plan, &result));
        }
        Ok(())
    }
}
