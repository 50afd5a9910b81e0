use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::rates::RateTables;
use super::salary::{SalaryCheck, SalaryCheckInput};
use super::session::{BusinessType, PricingSession};
use super::wizard::{ViewState, Wizard};

/// Who is using the calculator in this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    None,
    Solo,
    Team,
    Employee,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Profile::None => "Precio Justo",
            Profile::Solo => "Solo / Freelance",
            Profile::Team => "PyME / Equipo",
            Profile::Employee => "Soy Empleado",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Profile::None => "💲",
            Profile::Solo => "🧑",
            Profile::Team => "👥",
            Profile::Employee => "💼",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Profile::None)
    }
}

/// Where the active rate tables came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RatesSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub wizard: Wizard,
    pub session: PricingSession,
    pub salary_input: SalaryCheckInput,
    pub salary_result: Option<SalaryCheck>,
    pub rates_source: RatesSource,
}

impl AppState {
    pub fn with_tables(tables: RateTables, source: RatesSource) -> Self {
        Self {
            session: PricingSession::new(tables),
            rates_source: source,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> Profile {
        match (self.wizard.view, self.wizard.business) {
            (ViewState::EmployeeCalculator, _) => Profile::Employee,
            (ViewState::Welcome | ViewState::ProfileType, _) => Profile::None,
            (_, Some(BusinessType::Solo)) => Profile::Solo,
            (_, Some(BusinessType::Team)) => Profile::Team,
            (_, None) => Profile::None,
        }
    }

    pub fn choose_business(&mut self, business: BusinessType) {
        self.session.set_business_type(business);
        self.wizard.choose_business(business);
    }

    /// Back to the welcome screen with fresh inputs and the same tables.
    pub fn restart(&mut self) {
        let tables = self.session.tables().clone();
        self.wizard.restart();
        self.session = PricingSession::new(tables);
        self.salary_input = SalaryCheckInput::default();
        self.salary_result = None;
    }

    pub fn apply_tables(&mut self, tables: RateTables, source: RatesSource) {
        self.session.set_tables(tables);
        self.rates_source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LaborConfig;
    use crate::domain::wizard::Industry;

    #[test]
    fn profile_follows_wizard() {
        let mut state = AppState::default();
        assert_eq!(state.profile(), Profile::None);

        state.wizard.start();
        state.choose_business(BusinessType::Team);
        assert_eq!(state.profile(), Profile::Team);
        assert!(matches!(state.session.labor, LaborConfig::Team(_)));

        state.wizard.choose_industry(Industry::Other);
        assert_eq!(state.profile(), Profile::Team);

        state.wizard.restart();
        state.wizard.start();
        state.wizard.choose_employee();
        assert_eq!(state.profile(), Profile::Employee);
    }

    #[test]
    fn restart_keeps_tables_and_resets_inputs() {
        let mut tables = RateTables::default();
        tables.general_withholding_pct = 4.0;
        let mut state = AppState::with_tables(tables, RatesSource::BuiltIn);
        state.session.product_name = "Alfajor".to_string();
        state.session.set_markup(80.0);

        state.restart();
        assert_eq!(state.session.product_name, "");
        assert_eq!(state.session.markup_pct, 30.0);
        assert_eq!(state.session.tables().general_withholding_pct, 4.0);
        assert_eq!(state.wizard.view, ViewState::Welcome);
    }
}
