use dioxus::prelude::*;
use shared_ui::PageHeader;

#[component]
pub fn CreateUser() -> Element {
    rsx! {
        section { class: "admin-view",
            PageHeader {
                title: "Create User",
                description: "Register a new student, teacher, or administrator account.",
            }
        }
    }
}
