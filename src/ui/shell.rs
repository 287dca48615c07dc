use dioxus::prelude::*;

use crate::app::{LoginRedirect, Route};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let LoginRedirect(mut login_redirect) = use_context::<LoginRedirect>();

    use_effect(move || {
        if login_redirect() {
            login_redirect.set(false);
            nav.push(Route::Login {});
        }
    });

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "brand",
                    h1 { "{APP_NAME}" }
                    p { class: "tagline", "AI price analysis for second-hand gear" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Pricing {}),
                        onclick: move |_| { nav.push(Route::Pricing {}); },
                        label: "Single Item",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Bulk {}),
                        onclick: move |_| { nav.push(Route::Bulk {}); },
                        label: "Bulk CSV",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "Settings",
                    }
                }
            }
            main { class: "container",
                {children}
            }
            footer { class: "app-footer", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
