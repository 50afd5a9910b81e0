use dioxus::prelude::*;

use crate::domain::{
    AppState, FixedPointSolver, PricingStrategy, ReportSnapshot, SinglePassSeed, StrategyChoice,
    MARKUP_SLIDER_MAX,
};
use crate::ui::components::cost_table::CostTable;
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::export::export_report;
use crate::util::format::{format_ars, parse_decimal};

#[component]
pub fn PriceStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (quote, snapshot, markup, strategy, finalized) = state.with(|s| {
        let quote = s.session.quote();
        let snapshot = ReportSnapshot::capture(&s.session, &quote);
        (
            quote,
            snapshot,
            s.session.markup_pct,
            s.session.strategy,
            s.session.finalized_price(),
        )
    });
    let fixed_point = matches!(strategy, StrategyChoice::FixedPoint(_));

    let export_snapshot = snapshot.clone();
    let export = move |_| match export_report(&export_snapshot, None) {
        Ok(path) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Reporte guardado en {}", path.display()),
        ),
        Err(err) => {
            tracing::error!(target: "report", error = %err, "report export failed");
            push_toast(toasts, ToastKind::Error, format!("No se pudo guardar el reporte: {err}"));
        }
    };

    rsx! {
        div { class: "card price-hero",
            p { class: "label", "Precio de venta sugerido" }
            p { class: "value", "{format_ars(quote.suggested_price)}" }
            p { class: "muted",
                "Ganás {format_ars(quote.profit)} por unidad."
            }
        }

        div { class: "card",
            h3 { class: "card-title", "Margen de ganancia: {markup:.0}%" }
            input {
                class: "slider",
                r#type: "range",
                min: "0",
                max: "{MARKUP_SLIDER_MAX}",
                step: "1",
                value: "{markup.min(MARKUP_SLIDER_MAX)}",
                oninput: move |evt| {
                    if let Some(value) = parse_decimal(&evt.value()) {
                        state.with_mut(|s| s.session.set_markup(value));
                    }
                },
            }
            if markup > MARKUP_SLIDER_MAX {
                p { class: "notice", "El margen supera el máximo de la barra." }
            }
        }

        div { class: "grid-3",
            KpiCard { title: "Costo total por unidad", value: format_ars(quote.total_cost) }
            KpiCard {
                title: "Costo del canal",
                value: format_ars(quote.channel_cost),
                description: format!("Calculado a {}", format_ars(quote.candidate_price)),
            }
            KpiCard { title: "Costo de producción", value: format_ars(quote.production_cost()) }
        }

        div { class: "card",
            h3 { class: "card-title", "Cálculo de comisiones" }
            div { class: "chip-row",
                button {
                    class: theme::chip(!fixed_point),
                    onclick: move |_| state.with_mut(|s| s.session.strategy = StrategyChoice::SinglePass(SinglePassSeed)),
                    "Estimación rápida"
                }
                button {
                    class: theme::chip(fixed_point),
                    onclick: move |_| {
                        state.with_mut(|s| s.session.strategy = StrategyChoice::FixedPoint(FixedPointSolver::default()));
                    },
                    "Ajuste exacto"
                }
            }
            if fixed_point && !quote.converged {
                p { class: "notice",
                    "No hay un precio exacto cerca del umbral de costo fijo por venta. "
                    "Se usa la comisión más alta para cubrir el cargo."
                }
            }
            p { class: "muted",
                if fixed_point {
                    "Las comisiones se calculan sobre el precio final exacto ({strategy.name()})."
                } else if finalized.is_some() {
                    "Las comisiones se calculan sobre el último precio fijado ({strategy.name()})."
                } else {
                    "Las comisiones se estiman sobre el doble del costo de producción ({strategy.name()})."
                }
            }
            div { class: "chip-row",
                button {
                    class: "btn btn-primary",
                    disabled: fixed_point,
                    onclick: move |_| {
                        let quote = state.with_mut(|s| s.session.finalize());
                        push_toast(
                            toasts,
                            ToastKind::Info,
                            format!("Comisiones recalculadas a {}", format_ars(quote.suggested_price)),
                        );
                    },
                    "Fijar precio y recalcular"
                }
                if finalized.is_some() {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| state.with_mut(|s| s.session.clear_finalized()),
                        "Volver a la estimación"
                    }
                }
            }
        }

        div { class: "card",
            h3 { class: "card-title", "Detalle de costos" }
            CostTable { snapshot }
            div { class: "step-actions",
                span {}
                button { class: "btn btn-primary", onclick: export, "💾 Exportar reporte" }
            }
        }
    }
}
