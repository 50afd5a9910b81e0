use dioxus::prelude::*;

use crate::domain::{
    AppState, ChannelConfig, ChannelKind, Gateway, ListingTier, ManualCommission, TaxProfile,
};
use crate::ui::components::number_field::NumberField;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format::{format_ars, format_pct, parse_decimal};

#[component]
pub fn ChannelStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (channel, quote) = state.with(|s| (s.session.channel.clone(), s.session.quote()));
    let kind = channel.kind();

    let mut select = move |target: ChannelKind| {
        state.with_mut(|s| {
            if s.session.channel.kind() != target {
                s.session.channel = match target {
                    ChannelKind::Marketplace => ChannelConfig::default_marketplace(),
                    ChannelKind::OwnStore => ChannelConfig::default_own_store(),
                    ChannelKind::Manual => ChannelConfig::default_manual(),
                };
            }
        });
    };

    let breakdown = quote.channel.clone();
    let lines = [
        ("Comisión", breakdown.commission),
        ("Costo fijo por venta", breakdown.low_ticket_surcharge),
        ("Envío", breakdown.shipping),
        ("Plataforma", breakdown.platform_fee),
        ("Cobro", breakdown.gateway_fee),
        ("Retención IIBB", breakdown.tax_withholding),
        ("Comisiones", breakdown.manual_commissions),
    ];

    rsx! {
        div { class: "chip-row",
            for option in [ChannelKind::Marketplace, ChannelKind::OwnStore, ChannelKind::Manual] {
                button {
                    class: theme::chip(kind == option),
                    onclick: move |_| select(option),
                    "{option.label()}"
                }
            }
        }

        match channel {
            ChannelConfig::Marketplace { tier, free_shipping, tax } => rsx! {
                MarketplaceForm { tier, free_shipping, tax, candidate_price: quote.candidate_price }
            },
            ChannelConfig::OwnStore { platform, gateway, tax } => rsx! {
                OwnStoreForm { platform, gateway, tax }
            },
            ChannelConfig::Manual(commissions) => rsx! {
                ManualForm { commissions }
            },
        }

        div { class: "card",
            h3 { class: "card-title", "Costo del canal a {format_ars(quote.candidate_price)}" }
            ul { class: "row-list",
                for (label, amount) in lines {
                    if amount > 0.0 {
                        li { class: "row",
                            span { "{label}" }
                            span { class: "amount", "{format_ars(amount)}" }
                        }
                    }
                }
                li { class: "row row-total",
                    span { "Total canal" }
                    span { class: "amount", "{format_ars(quote.channel_cost)}" }
                }
            }
        }
    }
}

fn update_tax(mut state: Signal<AppState>, apply: impl FnOnce(&mut TaxProfile)) {
    state.with_mut(|s| match &mut s.session.channel {
        ChannelConfig::Marketplace { tax, .. } | ChannelConfig::OwnStore { tax, .. } => apply(tax),
        ChannelConfig::Manual(_) => {}
    });
}

#[component]
fn TaxForm(tax: TaxProfile) -> Element {
    let state = use_context::<Signal<AppState>>();
    let provinces = state.with(|s| s.session.tables().provinces.clone());

    rsx! {
        label { class: "check",
            input {
                r#type: "checkbox",
                checked: tax.simplified_regime,
                onchange: move |evt| {
                    let checked = evt.checked();
                    update_tax(state, |tax| tax.simplified_regime = checked);
                },
            }
            "Estoy en el Régimen Simplificado (sin retención de IIBB)"
        }
        if !tax.simplified_regime {
            p { class: "muted", "Provincia de la retención" }
            div { class: "chip-row",
                for province in provinces {
                    button {
                        key: "{province.key}",
                        class: theme::chip(tax.province == province.key),
                        onclick: {
                            let key = province.key.clone();
                            move |_| {
                                let key = key.clone();
                                update_tax(state, |tax| tax.province = key);
                            }
                        },
                        "{province.label} ({format_pct(province.pct)})"
                    }
                }
            }
        }
    }
}

#[component]
fn MarketplaceForm(tier: ListingTier, free_shipping: bool, tax: TaxProfile, candidate_price: f64) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (rates, mandatory) = state.with(|s| {
        (
            s.session.tables().marketplace.clone(),
            s.session.channel_evaluator().shipping_mandatory(candidate_price),
        )
    });

    let mut set_marketplace = move |new_tier: Option<ListingTier>, shipping: Option<bool>| {
        state.with_mut(|s| {
            if let ChannelConfig::Marketplace { tier, free_shipping, .. } = &mut s.session.channel {
                if let Some(value) = new_tier {
                    *tier = value;
                }
                if let Some(value) = shipping {
                    *free_shipping = value;
                }
            }
        });
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Tipo de publicación" }
            div { class: "chip-row",
                button {
                    class: theme::chip(tier == ListingTier::Standard),
                    onclick: move |_| set_marketplace(Some(ListingTier::Standard), None),
                    "{ListingTier::Standard.label()} ({format_pct(rates.standard_pct)})"
                }
                button {
                    class: theme::chip(tier == ListingTier::Premium),
                    onclick: move |_| set_marketplace(Some(ListingTier::Premium), None),
                    "{ListingTier::Premium.label()} ({format_pct(rates.premium_pct)})"
                }
            }
            label { class: "check",
                input {
                    r#type: "checkbox",
                    checked: free_shipping || mandatory,
                    disabled: mandatory,
                    onchange: move |evt| set_marketplace(None, Some(evt.checked())),
                }
                "Ofrezco envío gratis ({format_ars(rates.shipping_cost)})"
            }
            if mandatory {
                p { class: "notice",
                    "Desde {format_ars(rates.free_shipping_threshold)} el envío gratis es obligatorio."
                }
            }
            p { class: "muted",
                "Debajo de {format_ars(rates.low_ticket_threshold)} se cobra un costo fijo de {format_ars(rates.low_ticket_surcharge)} por venta."
            }
            TaxForm { tax }
        }
    }
}

#[component]
fn OwnStoreForm(platform: String, gateway: Gateway, tax: TaxProfile) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (platforms, gateways) = state.with(|s| {
        let tables = s.session.tables();
        (tables.platforms.clone(), tables.gateways.clone())
    });

    let mut set_store = move |new_platform: Option<String>, new_gateway: Option<Gateway>| {
        state.with_mut(|s| {
            if let ChannelConfig::OwnStore { platform, gateway, .. } = &mut s.session.channel {
                if let Some(value) = new_platform {
                    *platform = value;
                }
                if let Some(value) = new_gateway {
                    *gateway = value;
                }
            }
        });
    };

    let custom_pct = match &gateway {
        Gateway::Custom(pct) => Some(*pct),
        Gateway::Listed(_) => None,
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Plataforma" }
            div { class: "chip-row",
                for entry in platforms {
                    button {
                        key: "{entry.key}",
                        class: theme::chip(platform == entry.key),
                        onclick: {
                            let key = entry.key.clone();
                            move |_| set_store(Some(key.clone()), None)
                        },
                        "{entry.label} ({format_pct(entry.pct)})"
                    }
                }
            }

            h3 { class: "card-title", "Medio de cobro" }
            div { class: "chip-row",
                for entry in gateways {
                    button {
                        key: "{entry.key}",
                        class: theme::chip(gateway == Gateway::Listed(entry.key.clone())),
                        onclick: {
                            let key = entry.key.clone();
                            move |_| set_store(None, Some(Gateway::Listed(key.clone())))
                        },
                        "{entry.label} ({format_pct(entry.pct)})"
                    }
                }
                button {
                    class: theme::chip(custom_pct.is_some()),
                    onclick: move |_| {
                        if custom_pct.is_none() {
                            set_store(None, Some(Gateway::Custom(0.0)));
                        }
                    },
                    "Otra comisión"
                }
            }
            if let Some(pct) = custom_pct {
                NumberField {
                    label: "Comisión del medio de cobro (%)",
                    value: pct,
                    on_change: move |v| set_store(None, Some(Gateway::Custom(v))),
                }
            }
            TaxForm { tax }
        }
    }
}

#[component]
fn ManualForm(commissions: Vec<ManualCommission>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut name = use_signal(String::new);
    let mut pct = use_signal(String::new);
    let total_pct: f64 = commissions.iter().map(|c| c.percentage).sum();

    let mut update = move |apply: Box<dyn FnOnce(&mut Vec<ManualCommission>)>| {
        state.with_mut(|s| {
            if let ChannelConfig::Manual(list) = &mut s.session.channel {
                apply(list);
            }
        });
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Comisiones sobre el precio" }
            ul { class: "row-list",
                for commission in commissions {
                    li { key: "{commission.id}", class: "row",
                        span { "{commission.name}" }
                        span {
                            span { class: "amount", "{format_pct(commission.percentage)}" }
                            button {
                                class: "btn btn-danger",
                                title: "Quitar",
                                onclick: move |_| {
                                    let id = commission.id;
                                    update(Box::new(move |list| list.retain(|c| c.id != id)));
                                },
                                "✕"
                            }
                        }
                    }
                }
                li { class: "row row-total",
                    span { "Total" }
                    span { class: "amount", "{format_pct(total_pct)}" }
                }
            }
            div { class: "field-inline",
                div { class: "field",
                    label { class: "field-label", "Concepto" }
                    input {
                        class: "input",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field-label", "%" }
                    input {
                        class: "input",
                        value: "{pct}",
                        oninput: move |evt| pct.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        let Some(value) = parse_decimal(&pct()) else {
                            push_toast(toasts, ToastKind::Warning, "El porcentaje tiene que ser un número.");
                            return;
                        };
                        match ManualCommission::new(name().trim(), value) {
                            Ok(commission) => {
                                update(Box::new(move |list| list.push(commission)));
                                name.set(String::new());
                                pct.set(String::new());
                            }
                            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
                        }
                    },
                    "Agregar"
                }
            }
        }
    }
}
