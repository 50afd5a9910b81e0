use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::util::format::{format_ars, parse_decimal};

#[component]
pub fn MaterialsStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut name = use_signal(String::new);
    let mut cost = use_signal(String::new);

    let (product_name, items, total) = state.with(|s| {
        (
            s.session.product_name.clone(),
            s.session.materials.items().to_vec(),
            s.session.materials_total(),
        )
    });

    let mut add_item = move || {
        let label = name().trim().to_string();
        if label.is_empty() {
            push_toast(toasts, ToastKind::Warning, "Poné un nombre al insumo.");
            return;
        }
        let Some(amount) = parse_decimal(&cost()) else {
            push_toast(toasts, ToastKind::Warning, "El costo tiene que ser un número.");
            return;
        };
        match state.with_mut(|s| s.session.materials.add(label, amount)) {
            Ok(_) => {
                name.set(String::new());
                cost.set(String::new());
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    rsx! {
        div { class: "card",
            div { class: "field",
                label { class: "field-label", "Producto (opcional, para el reporte)" }
                input {
                    class: "input",
                    value: "{product_name}",
                    placeholder: "Ej: Torta de chocolate",
                    oninput: move |evt| state.with_mut(|s| s.session.product_name = evt.value()),
                }
            }
        }

        div { class: "card",
            h3 { class: "card-title", "Insumos por unidad" }
            if items.is_empty() {
                p { class: "muted", "Todavía no cargaste insumos." }
            }
            ul { class: "row-list",
                for item in items {
                    li { key: "{item.id}", class: "row",
                        span { "{item.name}" }
                        span {
                            span { class: "amount", "{format_ars(item.unit_cost)}" }
                            button {
                                class: "btn btn-danger",
                                title: "Quitar",
                                onclick: move |_| {
                                    state.with_mut(|s| s.session.materials.remove(item.id));
                                },
                                "✕"
                            }
                        }
                    }
                }
                li { class: "row row-total",
                    span { "Total materia prima" }
                    span { class: "amount", "{format_ars(total)}" }
                }
            }

            div { class: "field-inline",
                div { class: "field",
                    label { class: "field-label", "Insumo" }
                    input {
                        class: "input",
                        value: "{name}",
                        placeholder: "Ej: Harina 000",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field-label", "Costo unitario ($)" }
                    input {
                        class: "input",
                        value: "{cost}",
                        placeholder: "0",
                        oninput: move |evt| cost.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                add_item();
                            }
                        },
                    }
                }
                button { class: "btn btn-primary", onclick: move |_| add_item(), "Agregar" }
            }
        }
    }
}
