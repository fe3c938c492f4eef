use dioxus::prelude::*;
use shared_ui::PageHeader;

use crate::routes::admin::menu::admin_menu;

/// Landing view of the admin dashboard: a summary of what the sidebar offers.
#[component]
pub fn Overview() -> Element {
    let sections = admin_menu()
        .map(|menu| {
            menu.groups()
                .iter()
                .map(|group| {
                    let entries: Vec<String> =
                        group.children.iter().map(|leaf| leaf.label.clone()).collect();
                    (group.label.clone(), entries.join(", "))
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    rsx! {
        section { class: "admin-view",
            PageHeader {
                title: "Admin Dashboard",
                description: "Pick a task from the sidebar.",
            }
            ul { class: "admin-overview-sections",
                for (label, entries) in sections {
                    li { key: "{label}",
                        strong { "{label}" }
                        span { class: "admin-overview-entries", " {entries}" }
                    }
                }
            }
        }
    }
}
