use clap::Parser;

use crate::{cli::source::PatternArgs, prelude::*, tables::build_daily_usage_table};

#[derive(Parser)]
pub struct ScaleArgs {
    #[clap(flatten)]
    pattern: PatternArgs,

    /// Print the hourly values as a JSON array.
    #[clap(long)]
    json: bool,
}

impl ScaleArgs {
    pub fn run(self) -> Result {
        let pattern = self.pattern.pattern.context("`--pattern` is required")?;
        let usage = self.pattern.scale(pattern)?;
        if self.json {
            println!("{}", serde_json::to_string(&usage)?);
        } else {
            println!("{}", build_daily_usage_table(&usage));
        }
        Ok(())
    }
}
