use dioxus::prelude::*;

use crate::{app::Route, config::AppConfig};

/// Landing page after the API answers 401. Sign-in happens on the pricing site itself.
#[component]
pub fn LoginPage() -> Element {
    let config = use_context::<AppConfig>();
    let nav = use_navigator();
    let login_url = config.login_url.to_string();

    rsx! {
        section { class: "card login-page",
            h2 { "Sign in required" }
            p { "The pricing service rejected the request because you are not signed in." }
            p {
                "Log in at "
                a { href: "{login_url}", target: "_blank", rel: "noreferrer", "{login_url}" }
                ", then return here and try again."
            }
            button {
                class: "primary",
                onclick: move |_| { nav.push(Route::Pricing {}); },
                "Back to pricing"
            }
        }
    }
}
