use dioxus::prelude::*;

use crate::util::format::parse_decimal;

/// Labelled numeric input. Keeps the raw text locally and only reports
/// values that parse as non-negative numbers.
#[component]
pub fn NumberField(
    label: String,
    value: f64,
    on_change: EventHandler<f64>,
    hint: Option<String>,
) -> Element {
    let mut text = use_signal(|| format_initial(value));

    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "input",
                value: "{text}",
                oninput: move |evt| {
                    let raw = evt.value();
                    if let Some(parsed) = parse_decimal(&raw).filter(|v| *v >= 0.0) {
                        on_change.call(parsed);
                    } else if raw.trim().is_empty() {
                        on_change.call(0.0);
                    }
                    text.set(raw);
                },
            }
            if let Some(hint) = hint {
                span { class: "muted", "{hint}" }
            }
        }
    }
}

fn format_initial(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string().replace('.', ",")
    }
}
