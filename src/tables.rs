use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use tariff_engine::{
    LAST_HOUR,
    billing::{CalculationResult, DAYS_IN_MONTH},
    comparison::{Comparison, ProviderGroup},
    quantity::{Dollars, Percentage},
    tariff::{Day, TariffPlan},
    usage::DailyUsage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn money_cell(amount: Dollars) -> Cell {
    Cell::new(amount).set_alignment(CellAlignment::Right)
}

/// Green for the cheapest, red for anything above the average.
fn total_color(total: Dollars, best: Dollars, mean: Dollars) -> Color {
    if total == best {
        Color::Green
    } else if total <= mean {
        Color::DarkYellow
    } else {
        Color::Red
    }
}

fn mean(totals: impl IntoIterator<Item = Dollars>) -> Dollars {
    let estimate: Mean = totals.into_iter().map(|total| total.0).collect();
    if estimate.is_empty() { Dollars::ZERO } else { Dollars(estimate.mean()) }
}

pub fn build_comparison_table(comparison: &Comparison, daily: bool) -> Table {
    let results = comparison
        .ranked
        .iter()
        .map(|ranked| {
            let result = if daily { ranked.result.per_day() } else { ranked.result.clone() };
            (ranked.plan, result)
        })
        .collect_vec();
    let best = results.first().map_or(Dollars::ZERO, |(_, result)| result.monthly_total);
    let mean = mean(results.iter().map(|(_, result)| result.monthly_total));

    let mut table = new_table();
    table.set_header(vec![
        "#", "Provider", "Plan", "Fixed", "Energy", "Bundled", "Discount", "Total", "Extra",
    ]);
    for (rank, (plan, result)) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).add_attribute(Attribute::Dim),
            Cell::new(&plan.provider),
            Cell::new(&plan.name),
            money_cell(result.fixed_cost),
            money_cell(result.variable_cost),
            money_cell(result.bundled_cost).add_attribute(Attribute::Dim),
            money_cell(-result.discount).fg(Color::Green),
            money_cell(result.monthly_total)
                .fg(total_color(result.monthly_total, best, mean))
                .add_attribute(Attribute::Bold),
            money_cell(result.monthly_total - best).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_provider_table(groups: &[ProviderGroup], daily: bool) -> Table {
    let scale = |total: Dollars| if daily { total / DAYS_IN_MONTH } else { total };
    let best = groups.first().map_or(Dollars::ZERO, |group| scale(group.best_monthly_total));
    let mean = mean(groups.iter().map(|group| scale(group.best_monthly_total)));

    let mut table = new_table();
    table.set_header(vec!["Provider", "Best plan", "Total", "Plans", "Types", "Features"]);
    for group in groups {
        let best_plan = group.plans.first().map_or("", |ranked| ranked.plan.name.as_str());
        let total = scale(group.best_monthly_total);
        table.add_row(vec![
            Cell::new(group.provider).add_attribute(Attribute::Bold),
            Cell::new(best_plan),
            money_cell(total).fg(total_color(total, best, mean)),
            Cell::new(group.plans.len()).set_alignment(CellAlignment::Right),
            Cell::new(group.plan_types.iter().join(", ")).add_attribute(Attribute::Dim),
            Cell::new(group.features.iter().join(", ")),
        ]);
    }
    table
}

pub fn build_breakdown_table(plan: &TariffPlan, result: &CalculationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{} · {}", plan.provider, plan.name)).add_attribute(Attribute::Bold),
        Cell::new("Energy"),
        Cell::new("Rate"),
        Cell::new("Cost"),
    ]);
    for category in &result.categories {
        table.add_row(vec![
            Cell::new(&category.name).fg(category.zone_class.color()),
            Cell::new(category.total_energy).set_alignment(CellAlignment::Right),
            Cell::new(category.average_rate())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            money_cell(category.total_cost),
        ]);
    }
    table.add_row(vec![
        Cell::new("Fixed charge"),
        Cell::new(""),
        Cell::new(""),
        money_cell(result.fixed_cost),
    ]);
    if result.bundled_cost != Dollars::ZERO {
        table.add_row(vec![
            Cell::new("Bundled"),
            Cell::new(""),
            Cell::new(""),
            money_cell(result.bundled_cost),
        ]);
    }
    if result.discount != Dollars::ZERO {
        table.add_row(vec![
            Cell::new("Discount"),
            Cell::new(""),
            Cell::new(""),
            money_cell(-result.discount).fg(Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        money_cell(result.monthly_total).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Rates in cents per kilowatt-hour, coloured by zone class.
pub fn build_schedule_table(plan: &TariffPlan) -> Table {
    let mut table = new_table();
    table.set_header(
        std::iter::once(Cell::new("Day"))
            .chain((0..=LAST_HOUR).map(|hour| Cell::new(format!("{hour:02}"))))
            .collect_vec(),
    );
    for day in Day::ALL {
        let cells = (0..=LAST_HOUR).map(|hour| match plan.resolve(day, hour) {
            Some(segment) => Cell::new(format!("{:.1}", segment.rate.0))
                .set_alignment(CellAlignment::Right)
                .fg(segment.zone_class.color()),
            None => Cell::new("?").fg(Color::Magenta),
        });
        table.add_row(
            std::iter::once(Cell::new(day).add_attribute(Attribute::Bold)).chain(cells).collect_vec(),
        );
    }
    table
}

pub fn build_daily_usage_table(usage: &DailyUsage) -> Table {
    let total = usage.total();
    let peak = usage.hourly().iter().copied().max().unwrap_or_default();

    let mut table = new_table();
    table.set_header(vec!["Hour", "Usage", "Share"]);
    for (hour, energy) in (0..=LAST_HOUR).zip(usage.hourly()) {
        let share =
            if total.0 == 0.0 { Percentage::ZERO } else { Percentage(100.0 * energy.0 / total.0) };
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")).add_attribute(Attribute::Dim),
            Cell::new(energy)
                .set_alignment(CellAlignment::Right)
                .fg(if *energy == peak { Color::Red } else { Color::Reset }),
            Cell::new(share).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

pub fn build_plans_table(plans: &[TariffPlan]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Provider", "Plan", "Daily", "Types", "Features", "Usage mode"]);
    for plan in plans {
        table.add_row(vec![
            Cell::new(&plan.id).add_attribute(Attribute::Dim),
            Cell::new(&plan.provider),
            Cell::new(&plan.name).add_attribute(Attribute::Bold),
            Cell::new(plan.fixed_daily_charge).set_alignment(CellAlignment::Right),
            Cell::new(plan.plan_types().iter().join(", ")),
            Cell::new(plan.features().iter().join(", ")),
            Cell::new(plan.recommended_usage_mode()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(Vec::new()).0, 0.0);
        assert_abs_diff_eq!(mean([Dollars(1.0), Dollars(2.0), Dollars(6.0)]).0, 3.0);
    }

    #[test]
    fn test_total_color() {
        let (best, mean) = (Dollars(10.0), Dollars(15.0));
        assert_eq!(total_color(Dollars(10.0), best, mean), Color::Green);
        assert_eq!(total_color(Dollars(15.0), best, mean), Color::DarkYellow);
        assert_eq!(total_color(Dollars(20.0), best, mean), Color::Red);
    }
}
