use dioxus::prelude::*;

use crate::domain::AppState;
use crate::util::version::{APP_NAME, APP_TAGLINE};

#[component]
pub fn WelcomePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "price-hero",
            p { class: "label", "Para emprendedores y PyMEs" }
            h2 { class: "value", "{APP_NAME}" }
            p { class: "page-subtitle", "{APP_TAGLINE}" }
            p { class: "muted",
                "Materia prima, mano de obra, gastos fijos y comisiones del canal de venta, en un solo precio."
            }
            div { style: "margin-top: 2rem;",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.with_mut(|s| s.wizard.start()),
                    "Empezar →"
                }
            }
        }
    }
}
