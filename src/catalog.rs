//! Built-in plans of the New Zealand retailers.

use crate::{config::PlanFile, error::Result, tariff::TariffPlan};

const CATALOG: &str = include_str!("catalog.toml");

/// All the built-in plans.
pub fn plans() -> Result<Vec<TariffPlan>> {
    PlanFile::parse(CATALOG, "catalog")
}

/// Find a built-in plan by its ID.
pub fn find(id: &str) -> Result<Option<TariffPlan>> {
    Ok(plans()?.into_iter().find(|plan| plan.id == id))
}
