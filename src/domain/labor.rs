use super::entities::{Employee, EmploymentType, LaborConfig, PayFrequency, Shift, SoloLabor, TeamLabor};
use super::error::{PricingError, PricingResult};
use super::rates::{LaborRates, RateTables};

/// Turns a solo time budget or a team roster into a per-unit labor cost.
///
/// The caller picks the mode through [`LaborConfig`]; nothing here guesses it.
#[derive(Clone, Debug, PartialEq)]
pub struct LaborEstimator {
    rates: LaborRates,
}

impl LaborEstimator {
    pub fn new(rates: LaborRates) -> Self {
        Self { rates }
    }

    pub fn cost_per_unit(&self, config: &LaborConfig) -> f64 {
        match config {
            LaborConfig::Solo(solo) => self.solo_cost_per_unit(solo),
            LaborConfig::Team(team) => self.team_cost_per_unit(team),
        }
    }

    pub fn solo_monthly_hours(&self, solo: &SoloLabor) -> f64 {
        input(solo.hours_per_day) * input(solo.days_per_week) * self.rates.weeks_per_month
    }

    pub fn solo_hourly_rate(&self, solo: &SoloLabor) -> f64 {
        let hours = self.solo_monthly_hours(solo);
        if hours > 0.0 {
            input(solo.monthly_salary) / hours
        } else {
            0.0
        }
    }

    pub fn solo_cost_per_unit(&self, solo: &SoloLabor) -> f64 {
        if !solo.active {
            return 0.0;
        }
        self.solo_hourly_rate(solo) / 60.0 * input(solo.minutes_per_unit)
    }

    /// What the business pays per month for one person.
    pub fn monthly_employer_cost(&self, employee: &Employee) -> f64 {
        let base = input(employee.base_value);
        match (employee.employment_type, employee.pay_frequency) {
            (EmploymentType::Formal, _) => {
                base * self.rates.social_charge_multiplier
            }
            (EmploymentType::Contractor, PayFrequency::Hourly) => {
                base * input(employee.estimated_monthly_hours.unwrap_or(0.0))
            }
            (EmploymentType::Contractor, PayFrequency::Fixed) => base,
        }
    }

    pub fn roster_total(&self, roster: &[Employee]) -> f64 {
        roster
            .iter()
            .map(|employee| self.monthly_employer_cost(employee))
            .sum()
    }

    pub fn team_cost_per_minute(&self, roster: &[Employee]) -> f64 {
        let total = self.roster_total(roster);
        if total <= 0.0 || self.rates.operational_monthly_hours <= 0.0 {
            return 0.0;
        }
        total / self.rates.operational_monthly_hours / 60.0
    }

    pub fn team_cost_per_unit(&self, team: &TeamLabor) -> f64 {
        self.team_cost_per_minute(&team.roster) * input(team.minutes_per_unit)
    }
}

/// Negative or non-finite inputs count as zero.
fn input(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Builds a formal employee from a union agreement category.
/// Part-time shifts are paid half the category base.
pub fn hire_from_agreement(
    tables: &RateTables,
    agreement_key: &str,
    category_key: &str,
    shift: Shift,
) -> PricingResult<Employee> {
    let agreement = tables
        .agreement(agreement_key)
        .ok_or_else(|| PricingError::MissingSelection(format!("agreement {agreement_key}")))?;
    let category = agreement
        .category(category_key)
        .ok_or_else(|| PricingError::MissingSelection(format!("category {category_key}")))?;

    let gross = match shift {
        Shift::FullTime => category.base,
        Shift::PartTime => category.base / 2.0,
    };

    Employee::formal(format!("{} ({})", category.label, shift.label()), gross)
}
