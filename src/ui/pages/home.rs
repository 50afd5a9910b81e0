use dioxus::prelude::*;

use crate::domain::{AppState, ViewState};
use crate::ui::pages::{
    CalculatorPage, EmployeePage, ProfileIndustryPage, ProfileTypePage, WelcomePage,
};

/// Renders whichever wizard screen is current.
#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let view = state.with(|s| s.wizard.view);

    match view {
        ViewState::Welcome => rsx! { WelcomePage {} },
        ViewState::ProfileType => rsx! { ProfileTypePage {} },
        ViewState::ProfileIndustry => rsx! { ProfileIndustryPage {} },
        ViewState::Calculator(step) => rsx! { CalculatorPage { step } },
        ViewState::EmployeeCalculator => rsx! { EmployeePage {} },
    }
}
