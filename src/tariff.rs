//! Tariff plans and the rate lookup.

mod classification;
mod day;
mod plan;
mod resolver;
mod segment;

#[cfg(test)]
pub(crate) use self::plan::tests as fixtures;
pub use self::{
    classification::{PlanFeature, PlanType},
    day::{Day, DayCategory, DayScope, Precedence},
    plan::TariffPlan,
    segment::{RateSegment, ZoneClass},
};
