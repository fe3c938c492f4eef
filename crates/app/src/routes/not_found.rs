use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for paths no route matches.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            h1 { "Page Not Found" }
            p {
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
