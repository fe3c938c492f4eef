use dioxus::prelude::*;

/// Heading block at the top of a view.
#[component]
pub fn PageHeader(title: String, description: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if let Some(description) = description {
                    p { class: "page-description", "{description}" }
                }
            }
        }
    }
}
