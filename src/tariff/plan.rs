use serde::{Deserialize, Serialize};

use crate::{
    LAST_HOUR,
    error::{Error, Result},
    quantity::{Cents, Dollars, Percentage},
    tariff::RateSegment,
};

/// Tariff plan: a fixed daily charge plus time- and day-scoped energy rates.
///
/// Built from the catalog, from a plan file, or with [`TariffPlan::builder`].
/// The engine only ever borrows plans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[builder(on(String, into))]
#[must_use]
pub struct TariffPlan {
    pub id: String,

    pub name: String,

    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "fixedDailyChargeCents")]
    #[builder(into)]
    pub fixed_daily_charge: Cents,

    pub rates: Vec<RateSegment>,

    /// Flat monthly add-on, for example broadband sold together with power.
    #[serde(default, alias = "broadbandMonthlyCost", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub bundled_monthly_cost: Option<Dollars>,

    /// One-off sign-up credit.
    #[serde(default, rename = "joiningCreditDollars", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub joining_credit: Option<Dollars>,

    /// Discount on the energy subtotal (fixed and variable, excluding the bundled add-on).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub discount_pct: Option<Percentage>,
}

impl TariffPlan {
    /// Check the plan for authoring mistakes.
    ///
    /// Overlapping segments and missing coverage are not checked here,
    /// see [`TariffPlan::coverage_gaps`] for the latter.
    pub fn validate(&self) -> Result {
        if self.rates.is_empty() {
            return Err(Error::plan(&self.id, "plan has no rates"));
        }
        if !self.fixed_daily_charge.is_finite() || self.fixed_daily_charge < Cents::ZERO {
            return Err(Error::plan(&self.id, "fixed daily charge must be a non-negative amount"));
        }
        for (index, segment) in self.rates.iter().enumerate() {
            if segment.end_hour > LAST_HOUR {
                return Err(Error::plan(
                    &self.id,
                    format!("rate #{index} ends at hour {}, past {LAST_HOUR}", segment.end_hour),
                ));
            }
            if segment.start_hour > segment.end_hour {
                return Err(Error::plan(
                    &self.id,
                    format!(
                        "rate #{index} starts at hour {} after it ends at hour {}",
                        segment.start_hour, segment.end_hour,
                    ),
                ));
            }
            if !segment.rate.is_finite() || segment.rate.0 < 0.0 {
                return Err(Error::plan(&self.id, format!("rate #{index} has a negative price")));
            }
        }
        for (field, amount) in [
            ("bundled monthly cost", self.bundled_monthly_cost),
            ("joining credit", self.joining_credit),
        ] {
            if let Some(amount) = amount
                && (!amount.is_finite() || amount < Dollars::ZERO)
            {
                return Err(Error::plan(&self.id, format!("{field} must be a non-negative amount")));
            }
        }
        if let Some(discount) = self.discount_pct
            && !(Percentage::ZERO..=Percentage::HUNDRED).contains(&discount)
        {
            return Err(Error::plan(&self.id, format!("discount {discount} is outside 0–100%")));
        }
        Ok(())
    }
}
