use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Where gated pages send signed-out visitors. Visitors who already have a
/// session are forwarded to the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div { class: "login-page",
            h1 { "Sign in" }
            p { "Your session has ended or you are not signed in." }
        }
    }
}
