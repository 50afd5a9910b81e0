use dioxus::prelude::*;

use crate::domain::{check_salary, AppState, SalaryVerdict};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format::{format_ars, parse_amount};

#[component]
pub fn EmployeePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut gross_text = use_signal(String::new);
    let mut net_text = use_signal(String::new);

    let (input, result, references) = state.with(|s| {
        (
            s.salary_input.clone(),
            s.salary_result.clone(),
            s.session.tables().salary_references.clone(),
        )
    });

    let verify = move |_| {
        let (Some(gross), Some(net)) = (parse_amount(&gross_text()), parse_amount(&net_text())) else {
            push_toast(toasts, ToastKind::Warning, "Ingresá los montos sin centavos, solo números.");
            return;
        };
        let outcome = state.with_mut(|s| {
            s.salary_input.gross = gross;
            s.salary_input.net = net;
            let outcome = check_salary(s.session.tables(), &s.salary_input);
            s.salary_result = outcome.as_ref().ok().cloned();
            outcome
        });
        if let Err(err) = outcome {
            push_toast(toasts, ToastKind::Warning, format!("Revisá los datos: {err}"));
        }
    };

    rsx! {
        h2 { class: "page-title", "¿Cobrás lo justo?" }
        p { class: "page-subtitle", "Compará tu sueldo en mano con la referencia de tu convenio." }

        div { class: "card",
            div { class: "field",
                label { class: "field-label", "Puesto" }
                input {
                    class: "input",
                    value: "{input.job_title}",
                    placeholder: "Ej: Vendedora",
                    oninput: move |evt| state.with_mut(|s| s.salary_input.job_title = evt.value()),
                }
            }
            div { class: "grid-2",
                div { class: "field",
                    label { class: "field-label", "Sueldo bruto ($)" }
                    input {
                        class: "input",
                        value: "{gross_text}",
                        placeholder: "Ej: 1.200.000",
                        oninput: move |evt| gross_text.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field-label", "Sueldo en mano ($)" }
                    input {
                        class: "input",
                        value: "{net_text}",
                        placeholder: "Ej: 950.000",
                        oninput: move |evt| net_text.set(evt.value()),
                    }
                }
            }
            p { class: "muted", "Categoría" }
            div { class: "chip-row",
                for reference in references {
                    button {
                        key: "{reference.key}",
                        class: theme::chip(input.category == reference.key),
                        onclick: {
                            let key = reference.key.clone();
                            move |_| {
                                let key = key.clone();
                                state.with_mut(|s| s.salary_input.category = key);
                            }
                        },
                        "{reference.label}"
                    }
                }
            }
            button { class: "btn btn-primary", onclick: verify, "Verificar" }
        }

        if let Some(check) = result {
            div { class: verdict_class(check.verdict),
                h3 { "{check.verdict.headline()}" }
                p { "{check.detail(format_ars)}" }
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

fn verdict_class(verdict: SalaryVerdict) -> &'static str {
    match verdict {
        SalaryVerdict::Below => "verdict verdict-below",
        SalaryVerdict::InLine => "verdict verdict-inline",
        SalaryVerdict::Above => "verdict verdict-above",
    }
}
