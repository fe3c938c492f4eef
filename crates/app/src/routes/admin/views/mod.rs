pub mod create_class;
pub mod create_subject;
pub mod create_user;
pub mod overview;
pub mod search_user;

use dioxus::prelude::*;

use super::menu::AdminView;

/// Render the content area for a resolved admin view.
#[component]
pub fn AdminViewContent(view: AdminView) -> Element {
    match view {
        AdminView::Overview => rsx! { overview::Overview {} },
        AdminView::SearchUser => rsx! { search_user::SearchUser {} },
        AdminView::CreateUser => rsx! { create_user::CreateUser {} },
        AdminView::CreateClass => rsx! { create_class::CreateClass {} },
        AdminView::CreateSubject => rsx! { create_subject::CreateSubject {} },
    }
}
