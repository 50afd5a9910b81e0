use dioxus::prelude::*;

use crate::domain::{AppState, BusinessType, Industry};

#[component]
pub fn ProfileTypePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        h2 { class: "page-title", "¿Cómo trabajás?" }
        p { class: "page-subtitle", "Elegí el perfil que mejor describe tu situación." }

        div { class: "grid-3",
            ChoiceCard {
                emoji: "🧑",
                title: "Solo / Freelance",
                description: "Hacés todo vos. Calculamos cuánto vale tu hora.",
                on_select: move |_| state.with_mut(|s| s.choose_business(BusinessType::Solo)),
            }
            ChoiceCard {
                emoji: "👥",
                title: "PyME / Equipo",
                description: "Tenés empleados o contratados. Sumamos sueldos y cargas sociales.",
                on_select: move |_| state.with_mut(|s| s.choose_business(BusinessType::Team)),
            }
            ChoiceCard {
                emoji: "💼",
                title: "Soy Empleado",
                description: "Compará tu sueldo con el convenio de tu categoría.",
                on_select: move |_| state.with_mut(|s| s.wizard.choose_employee()),
            }
        }

        div { class: "step-actions",
            button {
                class: "btn btn-ghost",
                onclick: move |_| state.with_mut(|s| s.wizard.back()),
                "← Volver"
            }
        }
    }
}

#[component]
pub fn ProfileIndustryPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        h2 { class: "page-title", "¿Qué rubro es tu negocio?" }
        p { class: "page-subtitle", "Lo usamos para orientarte en cada paso." }

        div { class: "grid-3",
            for industry in Industry::ALL {
                ChoiceCard {
                    key: "{industry.label()}",
                    emoji: industry.emoji(),
                    title: industry.label(),
                    description: "",
                    on_select: move |_| state.with_mut(|s| s.wizard.choose_industry(industry)),
                }
            }
        }

        div { class: "step-actions",
            button {
                class: "btn btn-ghost",
                onclick: move |_| state.with_mut(|s| s.wizard.back()),
                "← Volver"
            }
        }
    }
}

#[component]
fn ChoiceCard(
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
    on_select: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "choice-card",
            onclick: move |_| on_select.call(()),
            div { class: "emoji", "{emoji}" }
            h2 { "{title}" }
            if !description.is_empty() {
                p { "{description}" }
            }
        }
    }
}
