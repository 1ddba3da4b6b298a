use clap::Parser;
use itertools::Itertools;

use crate::{cli::source::PlanArgs, prelude::*, tables::build_schedule_table};

#[derive(Parser)]
pub struct ScheduleArgs {
    /// Plan ID.
    #[clap(long = "plan", env = "TARIFF_PLAN")]
    plan_id: String,

    #[clap(flatten)]
    plans: PlanArgs,
}

impl ScheduleArgs {
    pub fn run(self) -> Result {
        let plan = self.plans.find(&self.plan_id)?;
        println!("{}", build_schedule_table(&plan));

        let gaps = plan.coverage_gaps();
        if !gaps.is_empty() {
            let gaps = gaps.iter().map(|(day, hour)| format!("{day} {hour:02}:00")).join(", ");
            warn!(plan_id = %plan.id, "uncovered hours: {gaps}");
        }
        Ok(())
    }
}
