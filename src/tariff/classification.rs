use enumset::{EnumSet, EnumSetType};

use crate::{
    quantity::{Dollars, Percentage},
    tariff::{DayScope, TariffPlan},
    usage::UsageMode,
};

#[derive(Debug, Hash, derive_more::Display, EnumSetType)]
pub enum PlanType {
    Standard,

    #[display("Low user")]
    LowUser,

    #[display("Time-of-use")]
    TimeOfUse,

    #[display("Per-day")]
    PerDay,

    #[display("Flat rate")]
    FlatRate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlanFeature {
    #[display("Free power periods")]
    FreePowerPeriods,

    #[display("{_0} credit")]
    JoiningCredit(Dollars),

    #[display("{_0} discount")]
    Discount(Percentage),
}

impl TariffPlan {
    /// Coarsest usage mode that still distinguishes every rate of the plan.
    #[must_use]
    pub fn recommended_usage_mode(&self) -> UsageMode {
        if self.rates.iter().any(|segment| segment.day_scope.is_specific_day()) {
            UsageMode::PerDay
        } else if self.rates.iter().any(|segment| segment.day_scope != DayScope::EVERYDAY) {
            UsageMode::WeekdayWeekend
        } else {
            UsageMode::Simple
        }
    }

    #[must_use]
    pub fn plan_types(&self) -> EnumSet<PlanType> {
        let mut types = EnumSet::empty();
        let name = self.name.to_lowercase();
        if name.contains("standard") {
            types.insert(PlanType::Standard);
        }
        if name.contains("low") {
            types.insert(PlanType::LowUser);
        }
        if self.rates.len() > 1
            || self.rates.iter().any(|segment| segment.day_scope != DayScope::EVERYDAY)
        {
            types.insert(PlanType::TimeOfUse);
        }
        if self.rates.iter().any(|segment| segment.day_scope.is_specific_day()) {
            types.insert(PlanType::PerDay);
        }
        if let [segment] = self.rates.as_slice()
            && segment.is_catch_all()
        {
            types.insert(PlanType::FlatRate);
        }
        types
    }

    #[must_use]
    pub fn features(&self) -> Vec<PlanFeature> {
        let mut features = Vec::new();
        if self.rates.iter().any(|segment| segment.rate.is_free()) {
            features.push(PlanFeature::FreePowerPeriods);
        }
        if let Some(credit) = self.joining_credit
            && credit > Dollars::ZERO
        {
            features.push(PlanFeature::JoiningCredit(credit));
        }
        if let Some(discount) = self.discount_pct
            && discount > Percentage::ZERO
        {
            features.push(PlanFeature::Discount(discount));
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::fixtures::{flat_plan, layered_plan};

    #[test]
    fn test_recommended_usage_mode() {
        assert_eq!(flat_plan().recommended_usage_mode(), UsageMode::Simple);
        assert_eq!(layered_plan().recommended_usage_mode(), UsageMode::PerDay);

        let mut plan = layered_plan();
        plan.rates.pop();
        assert_eq!(plan.recommended_usage_mode(), UsageMode::WeekdayWeekend);
    }

    #[test]
    fn test_plan_types() {
        assert_eq!(flat_plan().plan_types(), EnumSet::only(PlanType::FlatRate));
        assert_eq!(layered_plan().plan_types(), PlanType::TimeOfUse | PlanType::PerDay);

        let plan = TariffPlan { name: "Good Nights (Low User)".to_owned(), ..layered_plan() };
        assert!(plan.plan_types().contains(PlanType::LowUser));
    }

    #[test]
    fn test_features() {
        assert!(flat_plan().features().is_empty());

        let mut plan = TariffPlan {
            joining_credit: Some(Dollars(300.0)),
            discount_pct: Some(Percentage(3.0)),
            ..flat_plan()
        };
        plan.rates[0].rate = 0.0.into();
        assert_eq!(
            plan.features(),
            vec![
                PlanFeature::FreePowerPeriods,
                PlanFeature::JoiningCredit(Dollars(300.0)),
                PlanFeature::Discount(Percentage(3.0)),
            ],
        );
        assert_eq!(PlanFeature::JoiningCredit(Dollars(300.0)).to_string(), "$300.00 credit");
    }
}
