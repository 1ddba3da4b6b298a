mod breakdown;
mod compare;
mod plans;
mod scale;
mod schedule;
mod source;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        breakdown::BreakdownArgs,
        compare::CompareArgs,
        plans::PlansArgs,
        scale::ScaleArgs,
        schedule::ScheduleArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Compare(args) => args.run(),
            Command::Breakdown(args) => args.run(),
            Command::Schedule(args) => args.run(),
            Command::Scale(args) => args.run(),
            Command::Plans(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank the plans by the projected monthly bill.
    Compare(Box<CompareArgs>),

    /// Break a single plan's bill down by rate zone.
    Breakdown(Box<BreakdownArgs>),

    /// Show the hourly rates of a plan for every day of the week.
    Schedule(ScheduleArgs),

    /// Rescale a usage pattern to a daily total.
    Scale(ScaleArgs),

    /// List the available plans.
    Plans(PlansArgs),
}
