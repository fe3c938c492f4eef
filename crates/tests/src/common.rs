use shared_types::{
    IconRef, MenuGroup, MenuLeaf, MenuTree, PageResolver, SessionSnapshot, SessionUser,
};

/// Opaque view handles for the fixture menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    SearchUser,
    CreateUser,
    CreateClass,
}

/// Default `dashboard`; groups `[search-user, create-user]` and `[create-class]`.
pub fn fixture_tree() -> MenuTree<View> {
    MenuTree::new(
        MenuLeaf::new("dashboard", "Dashboard", View::Home).with_icon(IconRef::Dashboard),
        vec![
            MenuGroup::new(
                "sidebar-user-manage",
                "User",
                IconRef::Person,
                vec![
                    MenuLeaf::new("search-user", "Search User", View::SearchUser),
                    MenuLeaf::new("create-user", "Create User", View::CreateUser),
                ],
            ),
            MenuGroup::new(
                "sidebar-class-manage",
                "Class",
                IconRef::School,
                vec![MenuLeaf::new("create-class", "Create Class", View::CreateClass)],
            ),
        ],
    )
    .expect("fixture menu has unique identities")
}

pub fn fixture_resolver() -> PageResolver<View> {
    PageResolver::new(fixture_tree())
}

pub fn signed_in_as(user_type: &str) -> SessionSnapshot {
    SessionSnapshot::signed_in(SessionUser {
        id: 42,
        username: "fixture".into(),
        display_name: "Fixture User".into(),
        user_type: user_type.into(),
    })
}
