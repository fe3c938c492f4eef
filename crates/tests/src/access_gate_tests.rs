use pretty_assertions::assert_eq;
use shared_types::{AccessGate, GateDecision, RedirectTarget, SessionSnapshot, SessionUser};

use crate::common::signed_in_as;

#[test]
fn test_not_ready_never_redirects() {
    let gate = AccessGate::admin();
    let not_ready = [
        SessionSnapshot::loading(),
        SessionSnapshot {
            loaded: false,
            user: Some(SessionUser {
                id: 1,
                username: "early".into(),
                display_name: String::new(),
                user_type: "s".into(),
            }),
        },
    ];
    for session in not_ready {
        assert_eq!(gate.evaluate(&session), GateDecision::Pending);
    }
}

#[test]
fn test_signed_out_goes_to_login() {
    assert_eq!(
        AccessGate::admin().evaluate(&SessionSnapshot::signed_out()),
        GateDecision::Redirect(RedirectTarget::Login)
    );
}

#[test]
fn test_non_admin_goes_to_dashboard() {
    for code in ["t", "s", "zz"] {
        assert_eq!(
            AccessGate::admin().evaluate(&signed_in_as(code)),
            GateDecision::Redirect(RedirectTarget::Dashboard),
            "{code}"
        );
    }
}

#[test]
fn test_admin_may_render() {
    assert_eq!(
        AccessGate::admin().evaluate(&signed_in_as("a")),
        GateDecision::Granted
    );
}
