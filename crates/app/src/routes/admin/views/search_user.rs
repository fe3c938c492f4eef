use dioxus::prelude::*;
use shared_ui::PageHeader;

#[component]
pub fn SearchUser() -> Element {
    rsx! {
        section { class: "admin-view",
            PageHeader {
                title: "Search User",
                description: "Look up accounts by name or username.",
            }
        }
    }
}
