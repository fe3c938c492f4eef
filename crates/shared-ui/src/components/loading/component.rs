use dioxus::prelude::*;

/// Indeterminate circular progress indicator.
#[component]
pub fn Spinner(
    #[props(default = 40)] size: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("role", "progressbar", None, false),
        Attribute::new("aria-busy", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            style: "width: {size}px; height: {size}px;",
            ..merged,
            svg {
                class: "spinner-svg",
                view_box: "22 22 44 44",
                circle {
                    class: "spinner-circle",
                    cx: "44",
                    cy: "44",
                    r: "18",
                    fill: "none",
                    stroke_width: "5",
                }
            }
        }
    }
}

/// Full-screen overlay shown while a page is not allowed to render yet.
#[component]
pub fn LoadingBackdrop(label: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-backdrop",
            Spinner { size: 48 }
            if let Some(label) = label {
                p { class: "loading-label", "{label}" }
            }
        }
    }
}
