pub mod menu;
pub mod sidebar;
pub mod views;

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{
    AccessGate, AdminPage, MenuTree, NavRequest, PageResolver, PageState, RedirectTarget,
};
use shared_ui::{LoadingBackdrop, SidebarInset, SidebarProvider, SidebarTrigger};

use crate::auth::use_auth;
use crate::config::app_config;
use crate::routes::Route;
use menu::{admin_menu, AdminView};
use sidebar::AdminSidebar;
use views::AdminViewContent;

fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Login => Route::Login {},
        RedirectTarget::Dashboard => Route::Dashboard {},
    }
}

/// How a [`NavRequest`] reaches the router: page selection pushes a history
/// entry, redirects replace the current one.
#[derive(Debug, Clone, PartialEq)]
enum NavAction {
    Push(Route),
    Replace(Route),
}

fn nav_action(request: NavRequest) -> NavAction {
    match request {
        NavRequest::ShallowPage(page) => NavAction::Push(Route::AdminDashboard { page: Some(page) }),
        NavRequest::Replace(target) => NavAction::Replace(redirect_route(target)),
    }
}

fn perform(nav: Navigator, request: NavRequest) {
    match nav_action(request) {
        NavAction::Push(route) => {
            nav.push(route);
        }
        NavAction::Replace(route) => {
            nav.replace(route);
        }
    }
}

const ACCESS_CHECK_LABEL: &str = "Checking access...";

/// What the page body shows for a given state.
#[derive(Debug, Clone, PartialEq)]
enum AdminBody {
    Backdrop,
    /// Sidebar plus the active view, if one has resolved.
    Shell(Option<AdminView>),
}

fn admin_body(state: &PageState<AdminView>) -> AdminBody {
    match state {
        PageState::Loading | PageState::Unauthorized(_) => AdminBody::Backdrop,
        PageState::Resolving => AdminBody::Shell(None),
        PageState::Ready(view) => AdminBody::Shell(Some(*view)),
    }
}

/// Admin dashboard at `/dashboard/admin?page=<id>`.
///
/// Two effects feed the page state machine independently: one reruns the
/// access gate whenever the session signals change, the other resolves the
/// `page` query value whenever it changes. Nothing but a loading backdrop
/// renders until the gate grants access.
#[component]
pub fn AdminDashboard(page: Option<String>) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let resolver = use_hook(|| admin_menu().map(|menu| Rc::new(PageResolver::new(menu))));
    let mut admin = use_signal(|| AdminPage::<AdminView>::new(AccessGate::admin()));

    use_effect(move || {
        let session = auth.snapshot();
        if let Some(request) = admin.write().on_session(&session) {
            perform(nav, request);
        }
    });

    let page_resolver = resolver.clone();
    use_effect(use_reactive((&page,), move |(page,)| {
        let Ok(resolver) = &page_resolver else {
            return;
        };
        if let Some(request) = admin.write().on_page(resolver, page.as_deref()) {
            perform(nav, request);
        }
    }));

    let title = app_config().page_title("Admin Dashboard");

    let resolver = match resolver {
        Ok(resolver) => resolver,
        Err(err) => {
            tracing::error!(%err, "admin menu is invalid");
            return rsx! {
                document::Title { "{title}" }
                div { class: "admin-error",
                    p { "The admin menu could not be built." }
                }
            };
        }
    };

    let body = admin_body(admin.read().state());

    rsx! {
        document::Title { "{title}" }
        match body {
            AdminBody::Backdrop => rsx! {
                AccessCheck {}
            },
            AdminBody::Shell(active) => rsx! {
                AdminShell { menu: resolver.tree().clone(), active }
            },
        }
    }
}

#[component]
fn AccessCheck() -> Element {
    rsx! {
        LoadingBackdrop { label: ACCESS_CHECK_LABEL.to_string() }
    }
}

/// Sidebar plus content area. `active` is `None` until a view resolves.
#[component]
fn AdminShell(menu: MenuTree<AdminView>, active: Option<AdminView>) -> Element {
    rsx! {
        SidebarProvider { default_open: false,
            AdminSidebar { menu, active }
            SidebarInset {
                AdminMain { active }
            }
        }
    }
}

#[component]
fn AdminMain(active: Option<AdminView>) -> Element {
    rsx! {
        div { class: "admin-topbar",
            SidebarTrigger {
                span { class: "admin-topbar-trigger-icon", "\u{2630}" }
            }
        }
        if let Some(view) = active {
            AdminViewContent { view }
        }
    }
}
