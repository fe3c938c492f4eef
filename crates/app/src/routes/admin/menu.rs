use shared_types::{AppError, IconRef, MenuGroup, MenuLeaf, MenuTree};

/// Sub-views of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Overview,
    SearchUser,
    CreateUser,
    CreateClass,
    CreateSubject,
}

/// Identity of the default entry; also what a bare `/dashboard/admin`
/// is normalized to.
pub const DEFAULT_PAGE: &str = "dashboard";

/// The admin sidebar menu.
pub fn admin_menu() -> Result<MenuTree<AdminView>, AppError> {
    MenuTree::new(
        MenuLeaf::new(DEFAULT_PAGE, "Dashboard", AdminView::Overview).with_icon(IconRef::Dashboard),
        vec![
            MenuGroup::new(
                "sidebar-user-manage",
                "User",
                IconRef::Person,
                vec![
                    MenuLeaf::new("search-user", "Search User", AdminView::SearchUser),
                    MenuLeaf::new("create-user", "Create User", AdminView::CreateUser),
                ],
            ),
            MenuGroup::new(
                "sidebar-class-manage",
                "Class",
                IconRef::School,
                vec![MenuLeaf::new("create-class", "Create Class", AdminView::CreateClass)],
            ),
            MenuGroup::new(
                "sidebar-subject-manage",
                "Subject",
                IconRef::LibraryBooks,
                vec![MenuLeaf::new(
                    "create-subject",
                    "Create Subject",
                    AdminView::CreateSubject,
                )],
            ),
        ],
    )
}
