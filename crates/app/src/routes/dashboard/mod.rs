use dioxus::prelude::*;
use shared_types::UserType;

use crate::auth::use_auth;
use crate::routes::Route;

/// Generic signed-in dashboard. Administrators get a link to the admin area.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    let Some(user) = user else {
        return rsx! {
            div { class: "dashboard",
                h1 { "Dashboard" }
                Link { to: Route::Login {}, "Sign in" }
            }
        };
    };

    let name = if user.display_name.is_empty() {
        user.username.clone()
    } else {
        user.display_name.clone()
    };

    rsx! {
        div { class: "dashboard",
            h1 { "Welcome, {name}" }
            if user.user_type() == UserType::Admin {
                Link { to: Route::AdminDashboard { page: None }, "Open admin dashboard" }
            }
        }
    }
}
