use dioxus::prelude::*;

use crate::domain::{AppState, CalcStep};
use crate::ui::components::{ChannelStep, FixedCostsStep, LaborStep, MaterialsStep, PriceStep};
use crate::util::format::format_ars;

#[component]
pub fn CalculatorPage(step: CalcStep) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (business, industry, running_cost) = state.with(|s| {
        let session = &s.session;
        (
            s.wizard.business_type(),
            s.wizard.industry,
            session.production_cost() + session.fixed_cost_per_unit(),
        )
    });
    let current = step.index();

    rsx! {
        div { class: "stepper",
            for (idx, each) in CalcStep::ALL.iter().enumerate() {
                div {
                    key: "{each.title()}",
                    title: "{each.title()}",
                    class: dot_class(idx, current),
                }
            }
        }

        p { class: "muted",
            "Paso {current + 1} de {CalcStep::ALL.len()}"
            if let Some(industry) = industry {
                " · {industry.emoji()} {industry.label()}"
            }
        }
        h2 { class: "page-title", "{step.title()}" }
        p { class: "page-subtitle", "{step.subtitle(business)}" }

        match step {
            CalcStep::Materials => rsx! { MaterialsStep {} },
            CalcStep::Labor => rsx! { LaborStep {} },
            CalcStep::FixedCosts => rsx! { FixedCostsStep {} },
            CalcStep::Channel => rsx! { ChannelStep {} },
            CalcStep::FinalPrice => rsx! { PriceStep {} },
        }

        div { class: "step-actions",
            button {
                class: "btn btn-ghost",
                onclick: move |_| state.with_mut(|s| s.wizard.back()),
                "← Atrás"
            }
            if step.next().is_some() {
                span { class: "muted", "Costo acumulado: {format_ars(running_cost)}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.with_mut(|s| s.wizard.next()),
                    "Siguiente →"
                }
            }
        }
    }
}

fn dot_class(idx: usize, current: usize) -> &'static str {
    match idx.cmp(&current) {
        std::cmp::Ordering::Less => "step-dot done",
        std::cmp::Ordering::Equal => "step-dot current",
        std::cmp::Ordering::Greater => "step-dot",
    }
}
