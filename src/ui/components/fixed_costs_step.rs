use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::number_field::NumberField;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::util::format::{format_ars, format_ars_cents};

#[component]
pub fn FixedCostsStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut new_name = use_signal(String::new);

    let (expenses, units, monthly, per_unit) = state.with(|s| {
        let fixed = &s.session.fixed;
        (
            fixed.expenses().to_vec(),
            fixed.expected_units(),
            fixed.monthly_total(),
            fixed.cost_per_unit(),
        )
    });

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Gastos del mes" }
            div { class: "grid-2",
                for expense in expenses {
                    div { key: "{expense.id}", class: "field-inline",
                        NumberField {
                            label: "{expense.name}",
                            value: expense.monthly_amount,
                            on_change: move |v| {
                                let id = expense.id;
                                if let Err(err) = state.with_mut(|s| s.session.fixed.set_amount(id, v)) {
                                    push_toast(toasts, ToastKind::Error, err.to_string());
                                }
                            },
                        }
                        button {
                            class: "btn btn-danger",
                            title: "Quitar",
                            onclick: move |_| {
                                state.with_mut(|s| s.session.fixed.remove(expense.id));
                            },
                            "✕"
                        }
                    }
                }
            }
            div { class: "field-inline",
                div { class: "field",
                    label { class: "field-label", "Otro gasto" }
                    input {
                        class: "input",
                        value: "{new_name}",
                        placeholder: "Ej: Internet",
                        oninput: move |evt| new_name.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        let name = new_name().trim().to_string();
                        if name.is_empty() {
                            push_toast(toasts, ToastKind::Warning, "Poné un nombre al gasto.");
                            return;
                        }
                        if let Err(err) = state.with_mut(|s| s.session.fixed.add(name, 0.0)) {
                            push_toast(toasts, ToastKind::Error, err.to_string());
                        }
                        new_name.set(String::new());
                    },
                    "Agregar gasto"
                }
            }
        }

        div { class: "card",
            NumberField {
                label: "¿Cuántas unidades vendés por mes?",
                value: units as f64,
                hint: "Los gastos fijos se reparten entre estas unidades.",
                on_change: move |v: f64| {
                    state.with_mut(|s| s.session.fixed.set_expected_units(v.round() as u32));
                },
            }
        }

        div { class: "grid-2",
            KpiCard { title: "Gastos fijos mensuales", value: format_ars(monthly) }
            KpiCard {
                title: "Costo fijo por unidad",
                value: format_ars_cents(per_unit),
                description: if units == 0 { Some("Sin unidades estimadas no se reparte nada.".to_string()) } else { None },
            }
        }
    }
}
