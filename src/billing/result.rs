use serde::{Serialize, Serializer};

use crate::{
    billing::DAYS_IN_MONTH,
    quantity::{Cents, CentsPerKilowattHour, Dollars, KilowattHours},
    tariff::ZoneClass,
};

/// Projected bill of one plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub plan_id: String,

    /// Fixed and variable costs, plus the bundled cost, minus the discount.
    #[serde(rename = "monthlyTotalDollars")]
    pub monthly_total: Dollars,

    #[serde(rename = "fixedCostDollars")]
    pub fixed_cost: Dollars,

    #[serde(rename = "variableCostDollars")]
    pub variable_cost: Dollars,

    #[serde(rename = "bundledCostDollars")]
    pub bundled_cost: Dollars,

    /// Never negative.
    #[serde(rename = "discountDollars")]
    pub discount: Dollars,

    /// Zones, the most expensive one first.
    pub categories: Vec<CostCategory>,
}

impl CalculationResult {
    /// Average day of the month instead of the whole month.
    #[must_use]
    pub fn per_day(&self) -> Self {
        let scale = DAYS_IN_MONTH.recip();
        Self {
            plan_id: self.plan_id.clone(),
            monthly_total: self.monthly_total * scale,
            fixed_cost: self.fixed_cost * scale,
            variable_cost: self.variable_cost * scale,
            bundled_cost: self.bundled_cost * scale,
            discount: self.discount * scale,
            categories: self
                .categories
                .iter()
                .map(|category| CostCategory {
                    name: category.name.clone(),
                    total_cost: category.total_cost * scale,
                    total_energy: category.total_energy * scale,
                    zone_class: category.zone_class,
                })
                .collect(),
        }
    }
}

/// Cost and energy of one rate zone over the month.
#[derive(Clone, Debug, PartialEq)]
pub struct CostCategory {
    /// Zone name of the segments grouped into the category.
    pub name: String,

    pub total_cost: Dollars,

    pub total_energy: KilowattHours,

    /// Class of the first segment that fell into the zone.
    pub zone_class: ZoneClass,
}

impl CostCategory {
    #[must_use]
    pub fn average_rate(&self) -> CentsPerKilowattHour {
        Cents::from(self.total_cost).per(self.total_energy)
    }
}

impl Serialize for CostCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Fields<'a> {
            name: &'a str,
            total_cost_dollars: Dollars,
            total_kwh: KilowattHours,
            average_rate_cents: CentsPerKilowattHour,
            color_class: ZoneClass,
        }

        Fields {
            name: &self.name,
            total_cost_dollars: self.total_cost,
            total_kwh: self.total_energy,
            average_rate_cents: self.average_rate(),
            color_class: self.zone_class,
        }
        .serialize(serializer)
    }
}
