use dioxus::prelude::*;

use crate::domain::{AppState, RateEntry, RatesSource};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::util::format::{format_ars, format_pct};
use crate::util::persistence::{load_rate_tables, write_rates_template};

#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let (tables, source) = state.with(|st| (st.session.tables().clone(), st.rates_source.clone()));

    let source_label = match &source {
        RatesSource::BuiltIn => "Tarifas incluidas en la aplicación".to_string(),
        RatesSource::File(path) => format!("Archivo: {}", path.display()),
    };

    let on_reload = {
        let mut state = state;
        move |_| {
            let (tables, source) = load_rate_tables();
            let from_file = matches!(source, RatesSource::File(_));
            state.with_mut(|st| st.apply_tables(tables, source));
            let message = if from_file {
                "Tarifas recargadas desde el archivo."
            } else {
                "Usando las tarifas incluidas."
            };
            push_toast(toasts, ToastKind::Info, message);
        }
    };

    let on_template = move |_| match write_rates_template() {
        Ok(path) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Plantilla guardada en {}. Editala y recargá.", path.display()),
        ),
        Err(err) => push_toast(toasts, ToastKind::Error, format!("No se pudo guardar: {err}")),
    };

    let market = tables.marketplace.clone();
    let labor = tables.labor.clone();
    let market_rows = vec![
        ("Publicación clásica".to_string(), format_pct(market.standard_pct)),
        ("Publicación premium".to_string(), format_pct(market.premium_pct)),
        (
            format!("Costo fijo debajo de {}", format_ars(market.low_ticket_threshold)),
            format_ars(market.low_ticket_surcharge),
        ),
        (
            format!("Envío obligatorio desde {}", format_ars(market.free_shipping_threshold)),
            format_ars(market.shipping_cost),
        ),
    ];
    let labor_rows = vec![
        ("Cargas sociales (multiplicador)".to_string(), format!("× {}", labor.social_charge_multiplier)),
        ("Horas operativas del equipo".to_string(), format!("{:.0} h/mes", labor.operational_monthly_hours)),
        ("Semanas por mes".to_string(), format!("{}", labor.weeks_per_month)),
        ("Retención general IIBB".to_string(), format_pct(tables.general_withholding_pct)),
    ];

    rsx! {
        h2 { class: "page-title", "Tarifas vigentes" }
        p { class: "page-subtitle", "{source_label}" }

        div { class: "chip-row",
            button { class: "btn btn-primary", onclick: on_reload, "↻ Recargar tarifas" }
            button { class: "btn btn-ghost", onclick: on_template, "Crear archivo editable" }
        }

        div { class: "grid-2",
            RateCard { title: "Mercado Libre", rows: market_rows }
            RateCard { title: "Mano de obra", rows: labor_rows }
            RateCard { title: "Retención IIBB por provincia", rows: entry_rows(&tables.provinces) }
            RateCard { title: "Plataformas", rows: entry_rows(&tables.platforms) }
            RateCard { title: "Medios de cobro", rows: entry_rows(&tables.gateways) }
            RateCard {
                title: "Sueldos de referencia",
                rows: tables
                    .salary_references
                    .iter()
                    .map(|r| (r.label.clone(), format_ars(r.amount)))
                    .collect::<Vec<_>>(),
            }
            for agreement in tables.agreements.clone() {
                RateCard {
                    key: "{agreement.key}",
                    title: "Convenio: {agreement.label}",
                    rows: agreement
                        .categories
                        .iter()
                        .map(|c| (c.label.clone(), format_ars(c.base)))
                        .collect::<Vec<_>>(),
                }
            }
        }
    }
}

fn entry_rows(entries: &[RateEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.label.clone(), format_pct(entry.pct)))
        .collect()
}

#[component]
fn RateCard(title: String, rows: Vec<(String, String)>) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{title}" }
            ul { class: "row-list",
                for (label, value) in rows {
                    li { class: "row",
                        span { "{label}" }
                        span { class: "amount", "{value}" }
                    }
                }
            }
        }
    }
}
