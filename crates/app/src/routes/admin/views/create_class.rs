use dioxus::prelude::*;
use shared_ui::PageHeader;

#[component]
pub fn CreateClass() -> Element {
    rsx! {
        section { class: "admin-view",
            PageHeader {
                title: "Create Class",
                description: "Open a class and assign its homeroom teacher.",
            }
        }
    }
}
