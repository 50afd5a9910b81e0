use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let profile = state.with(|s| s.profile());
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell {theme::accent(profile)}",
            header { class: "app-header",
                div { class: "header-brand",
                    span { class: "emoji", "{profile.emoji()}" }
                    div {
                        h1 { "{profile.name()}" }
                        p { class: "header-tagline", "{theme::tagline(profile)}" }
                    }
                }
                nav { class: "nav",
                    button {
                        class: theme::nav_button(matches!(current_route, Route::Home {})),
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "🧮 Calculadora"
                    }
                    button {
                        class: theme::nav_button(matches!(current_route, Route::Rates {})),
                        onclick: move |_| { nav.push(Route::Rates {}); },
                        "📋 Tarifas"
                    }
                    if profile.is_selected() {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                state.with_mut(|s| s.restart());
                                nav.push(Route::Home {});
                            },
                            "↺ Empezar de nuevo"
                        }
                    }
                }
            }
            main { class: "page", {children} }
            footer { class: "app-footer", "{APP_NAME} {version_label()}" }
        }
    }
}
