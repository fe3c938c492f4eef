pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;

use admin::AdminDashboard;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/admin?:page")]
    AdminDashboard { page: Option<String> },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
