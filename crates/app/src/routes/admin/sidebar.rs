use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLayoutDashboard, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{IconRef, MenuLeaf, MenuTree};
use shared_ui::{
    Sidebar, SidebarContent, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarSeparator,
};

use super::menu::AdminView;
use crate::routes::Route;

fn menu_icon(icon: IconRef) -> Element {
    match icon {
        IconRef::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        IconRef::Person => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
        IconRef::School => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        IconRef::LibraryBooks => rsx! {
            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
        },
    }
}

/// One clickable sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<IconRef>,
    pub route: Route,
    pub active: bool,
}

impl SidebarEntry {
    fn from_leaf(leaf: &MenuLeaf<AdminView>, active: Option<&AdminView>) -> Self {
        Self {
            id: leaf.id.clone(),
            label: leaf.label.clone(),
            icon: leaf.icon,
            route: Route::AdminDashboard {
                page: Some(leaf.id.clone()),
            },
            active: active == Some(&leaf.view),
        }
    }
}

/// A labelled group of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSection {
    pub id: String,
    pub label: String,
    pub icon: IconRef,
    pub entries: Vec<SidebarEntry>,
}

/// What the admin sidebar shows: the default entry, then one section per
/// menu group. The entry whose view is `active` is flagged.
pub fn sidebar_layout(
    menu: &MenuTree<AdminView>,
    active: Option<&AdminView>,
) -> (SidebarEntry, Vec<SidebarSection>) {
    let home = SidebarEntry::from_leaf(menu.default_item(), active);
    let sections = menu
        .groups()
        .iter()
        .map(|group| SidebarSection {
            id: group.id.clone(),
            label: group.label.clone(),
            icon: group.icon,
            entries: group
                .children
                .iter()
                .map(|leaf| SidebarEntry::from_leaf(leaf, active))
                .collect(),
        })
        .collect();
    (home, sections)
}

#[component]
fn SidebarLink(entry: SidebarEntry) -> Element {
    rsx! {
        Link { to: entry.route.clone(),
            SidebarMenuButton { active: entry.active,
                if let Some(icon) = entry.icon {
                    {menu_icon(icon)}
                }
                "{entry.label}"
            }
        }
    }
}

/// Sidebar for the admin dashboard. Each entry navigates to
/// `?page=<identity>` on the same route.
#[component]
pub fn AdminSidebar(menu: MenuTree<AdminView>, active: Option<AdminView>) -> Element {
    let (home, sections) = sidebar_layout(&menu, active.as_ref());

    rsx! {
        Sidebar {
            SidebarHeader {
                span { class: "sidebar-brand-name", "Admin" }
            }
            SidebarSeparator {}
            SidebarContent {
                SidebarMenu {
                    SidebarMenuItem {
                        SidebarLink { entry: home }
                    }
                }
                SidebarSeparator {}
                for section in sections {
                    SidebarGroup { key: "{section.id}", label: section.label.clone(), icon: menu_icon(section.icon),
                        SidebarMenu {
                            for entry in section.entries {
                                SidebarMenuItem { key: "{entry.id}",
                                    SidebarLink { entry }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
