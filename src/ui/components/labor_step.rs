use dioxus::prelude::*;

use crate::domain::{
    hire_from_agreement, AppState, Employee, EmploymentType, LaborConfig, PayFrequency,
    PricingResult, Shift, SoloLabor, TeamLabor,
};
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::number_field::NumberField;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format::{format_ars, format_ars_cents, parse_amount, parse_decimal};

#[component]
pub fn LaborStep() -> Element {
    let state = use_context::<Signal<AppState>>();
    let labor = state.with(|s| s.session.labor.clone());

    match labor {
        LaborConfig::Solo(solo) => rsx! { SoloLaborForm { solo } },
        LaborConfig::Team(team) => rsx! { TeamLaborForm { team } },
    }
}

fn update_solo(mut state: Signal<AppState>, apply: impl FnOnce(&mut SoloLabor)) {
    state.with_mut(|s| {
        if let LaborConfig::Solo(solo) = &mut s.session.labor {
            apply(solo);
        }
    });
}

fn update_team(mut state: Signal<AppState>, apply: impl FnOnce(&mut TeamLabor)) {
    state.with_mut(|s| {
        if let LaborConfig::Team(team) = &mut s.session.labor {
            apply(team);
        }
    });
}

#[component]
fn SoloLaborForm(solo: SoloLabor) -> Element {
    let state = use_context::<Signal<AppState>>();
    let (hours, hourly, per_unit) = state.with(|s| {
        let est = s.session.labor_estimator();
        (
            est.solo_monthly_hours(&solo),
            est.solo_hourly_rate(&solo),
            est.solo_cost_per_unit(&solo),
        )
    });
    let active = solo.active;

    rsx! {
        div { class: "card",
            label { class: "check",
                input {
                    r#type: "checkbox",
                    checked: active,
                    onchange: move |evt| {
                        let checked = evt.checked();
                        update_solo(state, |solo| solo.active = checked);
                    },
                }
                "Incluir mi tiempo en el costo"
            }

            if active {
                div { class: "grid-2",
                    NumberField {
                        label: "¿Cuánto querés ganar por mes? ($)",
                        value: solo.monthly_salary,
                        on_change: move |v| update_solo(state, |solo| solo.monthly_salary = v),
                    }
                    NumberField {
                        label: "Minutos por unidad",
                        value: solo.minutes_per_unit,
                        on_change: move |v| update_solo(state, |solo| solo.minutes_per_unit = v),
                    }
                    NumberField {
                        label: "Horas por día",
                        value: solo.hours_per_day,
                        on_change: move |v| update_solo(state, |solo| solo.hours_per_day = v),
                    }
                    NumberField {
                        label: "Días por semana",
                        value: solo.days_per_week,
                        on_change: move |v| update_solo(state, |solo| solo.days_per_week = v),
                    }
                }
            } else {
                p { class: "muted", "Tu tiempo no se suma al costo del producto." }
            }
        }

        div { class: "grid-3",
            KpiCard { title: "Horas al mes", value: format!("{hours:.1}") }
            KpiCard { title: "Tu hora vale", value: format_ars(hourly) }
            KpiCard { title: "Mano de obra por unidad", value: format_ars_cents(per_unit) }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum HireMode {
    Agreement,
    Contractor,
}

#[component]
fn TeamLaborForm(team: TeamLabor) -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut mode = use_signal(|| HireMode::Agreement);

    let (costs, total, per_minute, per_unit) = state.with(|s| {
        let est = s.session.labor_estimator();
        let costs: Vec<(Employee, f64)> = team
            .roster
            .iter()
            .map(|employee| (employee.clone(), est.monthly_employer_cost(employee)))
            .collect();
        (
            costs,
            est.roster_total(&team.roster),
            est.team_cost_per_minute(&team.roster),
            est.team_cost_per_unit(&team),
        )
    });
    let operational_hours = state.with(|s| s.session.tables().labor.operational_monthly_hours);

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Nómina" }
            if costs.is_empty() {
                p { class: "muted", "Sumá a las personas que trabajan en el producto." }
            }
            ul { class: "row-list",
                for (employee, cost) in costs {
                    li { key: "{employee.id}", class: "row",
                        span {
                            "{employee.role}"
                            span { class: "muted", " · {employment_label(&employee)}" }
                        }
                        span {
                            span { class: "amount", "{format_ars(cost)}" }
                            button {
                                class: "btn btn-danger",
                                title: "Quitar",
                                onclick: move |_| {
                                    let id = employee.id;
                                    update_team(state, |team| team.roster.retain(|e| e.id != id));
                                },
                                "✕"
                            }
                        }
                    }
                }
                li { class: "row row-total",
                    span { "Costo laboral mensual" }
                    span { class: "amount", "{format_ars(total)}" }
                }
            }

            div { class: "chip-row",
                button {
                    class: theme::chip(mode() == HireMode::Agreement),
                    onclick: move |_| mode.set(HireMode::Agreement),
                    "Empleado en blanco (convenio)"
                }
                button {
                    class: theme::chip(mode() == HireMode::Contractor),
                    onclick: move |_| mode.set(HireMode::Contractor),
                    "Monotributista / Externo"
                }
            }
            match mode() {
                HireMode::Agreement => rsx! { AgreementHireForm {} },
                HireMode::Contractor => rsx! { ContractorHireForm {} },
            }
        }

        div { class: "card",
            NumberField {
                label: "Minutos de trabajo del equipo por unidad",
                value: team.minutes_per_unit,
                hint: format!("Se reparte sobre {operational_hours:.0} horas operativas al mes."),
                on_change: move |v| update_team(state, |team| team.minutes_per_unit = v),
            }
        }

        div { class: "grid-2",
            KpiCard { title: "Costo por minuto", value: format_ars_cents(per_minute) }
            KpiCard { title: "Mano de obra por unidad", value: format_ars_cents(per_unit) }
        }
    }
}

fn employment_label(employee: &Employee) -> String {
    match (employee.employment_type, employee.pay_frequency) {
        (EmploymentType::Formal, _) => format!("en blanco, bruto {}", format_ars(employee.base_value)),
        (EmploymentType::Contractor, PayFrequency::Fixed) => "externo, fijo mensual".to_string(),
        (EmploymentType::Contractor, PayFrequency::Hourly) => format!(
            "externo, {} x {:.0} h",
            format_ars(employee.base_value),
            employee.estimated_monthly_hours.unwrap_or(0.0)
        ),
    }
}

#[component]
fn AgreementHireForm() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let agreements = state.with(|s| s.session.tables().agreements.clone());
    let mut agreement_key = use_signal(|| {
        agreements
            .first()
            .map(|a| a.key.clone())
            .unwrap_or_default()
    });
    let mut category_key = use_signal(String::new);
    let mut shift = use_signal(Shift::default);

    let categories = agreements
        .iter()
        .find(|a| a.key == agreement_key())
        .map(|a| a.categories.clone())
        .unwrap_or_default();

    let hire = move |_| {
        let result = state.with(|s| {
            hire_from_agreement(s.session.tables(), &agreement_key(), &category_key(), shift())
        });
        match result {
            Ok(employee) => {
                push_toast(toasts, ToastKind::Success, format!("{} agregado.", employee.role));
                update_team(state, |team| team.roster.push(employee));
            }
            Err(_) => push_toast(toasts, ToastKind::Warning, "Elegí convenio y categoría."),
        }
    };

    rsx! {
        div { class: "chip-row",
            for agreement in agreements.clone() {
                button {
                    key: "{agreement.key}",
                    class: theme::chip(agreement_key() == agreement.key),
                    onclick: {
                        let key = agreement.key.clone();
                        move |_| {
                            agreement_key.set(key.clone());
                            category_key.set(String::new());
                        }
                    },
                    "{agreement.label}"
                }
            }
        }
        div { class: "chip-row",
            for category in categories {
                button {
                    key: "{category.key}",
                    class: theme::chip(category_key() == category.key),
                    onclick: {
                        let key = category.key.clone();
                        move |_| category_key.set(key.clone())
                    },
                    "{category.label} · {format_ars(category.base)}"
                }
            }
        }
        div { class: "chip-row",
            for option in [Shift::FullTime, Shift::PartTime] {
                button {
                    class: theme::chip(shift() == option),
                    onclick: move |_| shift.set(option),
                    "{option.label()}"
                }
            }
        }
        p { class: "muted", "Se suman las cargas sociales sobre el sueldo bruto." }
        button { class: "btn btn-primary", onclick: hire, "Agregar empleado" }
    }
}

#[component]
fn ContractorHireForm() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut role = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut hours = use_signal(String::new);
    let mut frequency = use_signal(|| PayFrequency::Fixed);

    let hire = move |_| {
        let Some(value) = parse_amount(&amount()) else {
            push_toast(toasts, ToastKind::Warning, "El monto tiene que ser un número.");
            return;
        };
        let result: PricingResult<Employee> = match frequency() {
            PayFrequency::Fixed => Employee::contractor(role(), value),
            PayFrequency::Hourly => {
                let monthly_hours = parse_decimal(&hours()).unwrap_or(0.0);
                Employee::hourly_contractor(role(), value, monthly_hours)
            }
        };
        match result {
            Ok(employee) => {
                update_team(state, |team| team.roster.push(employee));
                role.set(String::new());
                amount.set(String::new());
                hours.set(String::new());
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let amount_label = match frequency() {
        PayFrequency::Fixed => "Honorarios mensuales ($)",
        PayFrequency::Hourly => "Valor hora ($)",
    };

    rsx! {
        div { class: "chip-row",
            button {
                class: theme::chip(frequency() == PayFrequency::Fixed),
                onclick: move |_| frequency.set(PayFrequency::Fixed),
                "Fijo mensual"
            }
            button {
                class: theme::chip(frequency() == PayFrequency::Hourly),
                onclick: move |_| frequency.set(PayFrequency::Hourly),
                "Por hora"
            }
        }
        div { class: "field",
            label { class: "field-label", "Rol" }
            input {
                class: "input",
                value: "{role}",
                placeholder: "Servicio Externo",
                oninput: move |evt| role.set(evt.value()),
            }
        }
        div { class: "field",
            label { class: "field-label", "{amount_label}" }
            input {
                class: "input",
                value: "{amount}",
                placeholder: "Ej: 350.000",
                oninput: move |evt| amount.set(evt.value()),
            }
        }
        if frequency() == PayFrequency::Hourly {
            div { class: "field",
                label { class: "field-label", "Horas estimadas por mes" }
                input {
                    class: "input",
                    value: "{hours}",
                    oninput: move |evt| hours.set(evt.value()),
                }
            }
        }
        button { class: "btn btn-primary", onclick: hire, "Agregar contratado" }
    }
}
