use pretty_assertions::assert_eq;
use shared_types::{
    AccessGate, AdminPage, NavRequest, PageState, RedirectTarget, SessionSnapshot,
};

use crate::common::{fixture_resolver, signed_in_as, View};

enum Trigger<'a> {
    Session(SessionSnapshot),
    Page(Option<&'a str>),
}

/// Replay triggers in order, collecting the navigation requests emitted.
fn replay(triggers: Vec<Trigger<'_>>) -> (AdminPage<View>, Vec<NavRequest>) {
    let resolver = fixture_resolver();
    let mut page = AdminPage::new(AccessGate::admin());
    let mut requests = Vec::new();
    for trigger in triggers {
        let request = match trigger {
            Trigger::Session(session) => page.on_session(&session),
            Trigger::Page(id) => page.on_page(&resolver, id),
        };
        requests.extend(request);
    }
    (page, requests)
}

#[test]
fn test_trigger_order_does_not_change_final_state() {
    let (session_first, _) = replay(vec![
        Trigger::Session(SessionSnapshot::loading()),
        Trigger::Session(signed_in_as("a")),
        Trigger::Page(Some("create-user")),
    ]);
    let (page_first, _) = replay(vec![
        Trigger::Page(Some("create-user")),
        Trigger::Session(SessionSnapshot::loading()),
        Trigger::Session(signed_in_as("a")),
    ]);

    assert_eq!(session_first.state(), &PageState::Ready(View::CreateUser));
    assert_eq!(session_first.state(), page_first.state());
}

#[test]
fn test_bare_url_is_normalized_then_settles() {
    let (page, requests) = replay(vec![
        Trigger::Page(None),
        Trigger::Session(signed_in_as("a")),
        // the shallow write comes back as a page change
        Trigger::Page(Some("dashboard")),
    ]);

    assert_eq!(requests, vec![NavRequest::ShallowPage("dashboard".into())]);
    assert_eq!(page.state(), &PageState::Ready(View::Home));
}

#[test]
fn test_garbage_page_keeps_active_view() {
    let (page, requests) = replay(vec![
        Trigger::Session(signed_in_as("a")),
        Trigger::Page(Some("search-user")),
        Trigger::Page(Some("definitely-not-a-page")),
    ]);

    assert!(requests.is_empty());
    assert_eq!(page.state(), &PageState::Ready(View::SearchUser));
}

#[test]
fn test_garbage_first_page_leaves_content_empty() {
    let (page, requests) = replay(vec![
        Trigger::Session(signed_in_as("a")),
        Trigger::Page(Some("nope")),
    ]);

    assert!(requests.is_empty());
    assert_eq!(page.state(), &PageState::Resolving);
    assert_eq!(page.active_view(), None);
}

#[test]
fn test_student_is_sent_away_and_never_renders() {
    let (page, requests) = replay(vec![
        Trigger::Page(Some("create-class")),
        Trigger::Session(signed_in_as("s")),
        Trigger::Page(Some("search-user")),
    ]);

    assert_eq!(requests, vec![NavRequest::Replace(RedirectTarget::Dashboard)]);
    assert!(!page.is_authorized());
}

#[test]
fn test_signed_out_visitor_is_sent_to_login() {
    let (page, requests) = replay(vec![Trigger::Session(SessionSnapshot::signed_out())]);
    assert_eq!(requests, vec![NavRequest::Replace(RedirectTarget::Login)]);
    assert_eq!(page.state(), &PageState::Unauthorized(RedirectTarget::Login));
}

#[test]
fn test_gate_is_decided_once() {
    let (page, requests) = replay(vec![
        Trigger::Session(signed_in_as("a")),
        Trigger::Session(SessionSnapshot::signed_out()),
        Trigger::Page(Some("create-class")),
    ]);

    assert!(requests.is_empty());
    assert_eq!(page.state(), &PageState::Ready(View::CreateClass));
}
