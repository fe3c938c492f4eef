use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Open/closed state of the sidebar, shared through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Provides sidebar state to its children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar container. On narrow viewports an open sidebar gets a
/// backdrop that closes it when tapped.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = (state)().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable body of the sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Group components ──────────────────────────────────────────────────

/// A titled section of menu entries. Expanded by default; the label
/// toggles it.
#[component]
pub fn SidebarGroup(
    label: String,
    icon: Option<Element>,
    #[props(default = true)] default_expanded: bool,
    children: Element,
) -> Element {
    let mut expanded = use_signal(|| default_expanded);

    rsx! {
        div {
            class: "sidebar-group",
            "data-expanded": if expanded() { "true" } else { "false" },
            button {
                class: "sidebar-group-label",
                r#type: "button",
                "aria-expanded": if expanded() { "true" } else { "false" },
                onclick: move |_| expanded.toggle(),
                if let Some(icon) = icon {
                    span { class: "sidebar-group-icon", {icon} }
                }
                span { class: "sidebar-group-text", "{label}" }
            }
            if expanded() {
                div { class: "sidebar-group-content", {children} }
            }
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Clickable entry within a SidebarMenuItem. Closes the sidebar on click so
/// the overlay does not cover the selected view on narrow viewports.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| {
                state.set(SidebarState { open: false });
            },
            ..merged,
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = (state)();
                state.set(current.toggled());
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content area next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn state_toggles() {
        assert!(!SidebarState { open: true }.toggled().open);
        assert!(SidebarState { open: false }.toggled().open);
    }

    #[test]
    fn menu_button_marks_active_entry() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(SidebarState { open: false }));
            rsx! {
                SidebarMenu {
                    SidebarMenuItem {
                        SidebarMenuButton { active: true, "Create Class" }
                    }
                    SidebarMenuItem {
                        SidebarMenuButton { "Create User" }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"data-active="true""#), "{html}");
        assert!(html.contains(r#"data-active="false""#), "{html}");
        assert!(html.contains(r#"aria-current="page""#), "{html}");
        assert!(html.contains("Create Class"));
    }

    #[test]
    fn group_renders_label_and_children_when_expanded() {
        fn app() -> Element {
            rsx! {
                SidebarGroup { label: "User",
                    span { "Search User" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("User"));
        assert!(html.contains("Search User"));
        assert!(html.contains(r#"data-expanded="true""#), "{html}");
    }

    #[test]
    fn collapsed_group_hides_children() {
        fn app() -> Element {
            rsx! {
                SidebarGroup { label: "Subject", default_expanded: false,
                    span { "Create Subject" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Subject"));
        assert!(!html.contains("Create Subject"));
    }

    #[test]
    fn open_sidebar_renders_backdrop() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(SidebarState { open: true }));
            rsx! {
                Sidebar { SidebarContent { "menu" } }
            }
        }

        let html = render(app);
        assert!(html.contains("sidebar-backdrop"));
        assert!(html.contains(r#"data-state="open""#), "{html}");
    }
}
