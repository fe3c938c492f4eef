use dioxus::prelude::*;

mod auth;
mod config;
mod routes;
mod session;

use auth::{use_auth, AuthState};
use config::app_config;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[logger] Failed to initialise tracing: {err}");
    }

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    let mut auth = use_auth();

    // Load the session once. A failed load leaves `loaded` false, so gated
    // pages keep showing their loading state instead of rendering.
    use_future(move || async move {
        let config = app_config();
        tracing::debug!(platform = client_platform(), "loading session");
        match session::fetch_session(&config.site.api_base_url).await {
            Ok(user) => {
                tracing::info!(signed_in = user.is_some(), "session loaded");
                auth.set_session(user);
            }
            Err(err) => {
                tracing::warn!(%err, "session load failed");
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
