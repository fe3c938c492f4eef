/// Where the access gate sends a visitor who may not see the admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Dashboard => "/dashboard",
        }
    }
}

/// A navigation the UI layer must perform on behalf of the pure logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    /// Set the `page` query parameter without reloading; adds a history entry.
    ShallowPage(String),
    /// Leave the page, replacing the current history entry.
    Replace(RedirectTarget),
}
