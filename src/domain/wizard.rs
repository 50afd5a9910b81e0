use serde::{Deserialize, Serialize};

use super::session::BusinessType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcStep {
    Materials,
    Labor,
    FixedCosts,
    Channel,
    FinalPrice,
}

impl CalcStep {
    pub const ALL: [CalcStep; 5] = [
        CalcStep::Materials,
        CalcStep::Labor,
        CalcStep::FixedCosts,
        CalcStep::Channel,
        CalcStep::FinalPrice,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalcStep::Materials => "Materia Prima",
            CalcStep::Labor => "Mano de Obra",
            CalcStep::FixedCosts => "Costos Fijos",
            CalcStep::Channel => "Canal de Venta",
            CalcStep::FinalPrice => "Precio Final",
        }
    }

    pub fn subtitle(&self, business: BusinessType) -> &'static str {
        match (self, business) {
            (CalcStep::Materials, _) => "Ingredientes y packaging.",
            (CalcStep::Labor, BusinessType::Team) => "Nómina y equipo.",
            (CalcStep::Labor, BusinessType::Solo) => "¿Cuánto vale tu tiempo?",
            (CalcStep::FixedCosts, _) => "Gastos mensuales.",
            (CalcStep::Channel, _) => "Impuestos y comisiones.",
            (CalcStep::FinalPrice, _) => "Definí tu ganancia.",
        }
    }

    pub fn next(&self) -> Option<CalcStep> {
        CalcStep::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<CalcStep> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| CalcStep::ALL.get(idx).copied())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Gastro,
    Fashion,
    Services,
    Resale,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Gastro,
        Industry::Fashion,
        Industry::Services,
        Industry::Resale,
        Industry::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Gastro => "Gastronomía",
            Industry::Fashion => "Indumentaria",
            Industry::Services => "Servicios",
            Industry::Resale => "Reventa",
            Industry::Other => "Otro",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Industry::Gastro => "🍽️",
            Industry::Fashion => "👕",
            Industry::Services => "⚡",
            Industry::Resale => "🛍️",
            Industry::Other => "❓",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Welcome,
    ProfileType,
    ProfileIndustry,
    Calculator(CalcStep),
    EmployeeCalculator,
}

/// Where the user is, and the choices that shaped the path there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    pub view: ViewState,
    pub business: Option<BusinessType>,
    pub industry: Option<Industry>,
}

impl Wizard {
    pub fn start(&mut self) {
        self.go(ViewState::ProfileType);
    }

    pub fn choose_business(&mut self, business: BusinessType) {
        self.business = Some(business);
        self.go(ViewState::ProfileIndustry);
    }

    pub fn choose_employee(&mut self) {
        self.go(ViewState::EmployeeCalculator);
    }

    pub fn choose_industry(&mut self, industry: Industry) {
        self.industry = Some(industry);
        self.go(ViewState::Calculator(CalcStep::Materials));
    }

    /// Advances within the calculator; a no-op on the last step or elsewhere.
    pub fn next(&mut self) {
        if let ViewState::Calculator(step) = self.view {
            if let Some(next) = step.next() {
                self.go(ViewState::Calculator(next));
            }
        }
    }

    pub fn back(&mut self) {
        let target = match self.view {
            ViewState::Welcome => ViewState::Welcome,
            ViewState::ProfileType => ViewState::Welcome,
            ViewState::ProfileIndustry => ViewState::ProfileType,
            ViewState::EmployeeCalculator => ViewState::ProfileType,
            ViewState::Calculator(step) => step
                .previous()
                .map(ViewState::Calculator)
                .unwrap_or(ViewState::ProfileIndustry),
        };
        self.go(target);
    }

    pub fn restart(&mut self) {
        *self = Wizard::default();
        tracing::debug!(target: "wizard", "restarted");
    }

    pub fn step(&self) -> Option<CalcStep> {
        match self.view {
            ViewState::Calculator(step) => Some(step),
            _ => None,
        }
    }

    pub fn business_type(&self) -> BusinessType {
        self.business.unwrap_or_default()
    }

    fn go(&mut self, view: ViewState) {
        tracing::debug!(target: "wizard", from = ?self.view, to = ?view, "transition");
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_to_final_price() {
        let mut wizard = Wizard::default();
        wizard.start();
        assert_eq!(wizard.view, ViewState::ProfileType);
        wizard.choose_business(BusinessType::Team);
        assert_eq!(wizard.view, ViewState::ProfileIndustry);
        wizard.choose_industry(Industry::Gastro);
        assert_eq!(wizard.step(), Some(CalcStep::Materials));

        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), Some(CalcStep::FinalPrice));
        assert_eq!(wizard.business_type(), BusinessType::Team);
        assert_eq!(wizard.industry, Some(Industry::Gastro));
    }

    #[test]
    fn back_unwinds_each_level() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.choose_business(BusinessType::Solo);
        wizard.choose_industry(Industry::Resale);
        wizard.next();
        wizard.back();
        assert_eq!(wizard.step(), Some(CalcStep::Materials));
        wizard.back();
        assert_eq!(wizard.view, ViewState::ProfileIndustry);
        wizard.back();
        assert_eq!(wizard.view, ViewState::ProfileType);
        wizard.back();
        assert_eq!(wizard.view, ViewState::Welcome);
        wizard.back();
        assert_eq!(wizard.view, ViewState::Welcome);
    }

    #[test]
    fn employee_branch_returns_to_profile_type() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.choose_employee();
        assert_eq!(wizard.view, ViewState::EmployeeCalculator);
        wizard.next();
        assert_eq!(wizard.view, ViewState::EmployeeCalculator);
        wizard.back();
        assert_eq!(wizard.view, ViewState::ProfileType);
    }

    #[test]
    fn restart_clears_choices() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.choose_business(BusinessType::Team);
        wizard.choose_industry(Industry::Services);
        wizard.restart();
        assert_eq!(wizard, Wizard::default());
        assert_eq!(wizard.business_type(), BusinessType::Solo);
    }

    #[test]
    fn step_metadata() {
        assert_eq!(CalcStep::Materials.previous(), None);
        assert_eq!(CalcStep::FinalPrice.next(), None);
        assert_eq!(CalcStep::Channel.index(), 3);
        assert_eq!(CalcStep::Labor.subtitle(BusinessType::Team), "Nómina y equipo.");
    }
}
