use dioxus::prelude::*;
use shared_ui::PageHeader;

#[component]
pub fn CreateSubject() -> Element {
    rsx! {
        section { class: "admin-view",
            PageHeader {
                title: "Create Subject",
                description: "Add a subject to the curriculum.",
            }
        }
    }
}
