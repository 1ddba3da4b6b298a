use clap::Parser;

use crate::{cli::source::PlanArgs, prelude::*, tables::build_plans_table};

#[derive(Parser)]
pub struct PlansArgs {
    #[clap(flatten)]
    plans: PlanArgs,
}

impl PlansArgs {
    pub fn run(self) -> Result {
        println!("{}", build_plans_table(&self.plans.load()?));
        Ok(())
    }
}
