use pretty_assertions::assert_eq;
use shared_types::{NavRequest, Resolution};

use crate::common::{fixture_resolver, fixture_tree, View};

#[test]
fn test_every_tree_identity_resolves_to_its_leaf() {
    let tree = fixture_tree();
    let resolver = fixture_resolver();

    for leaf in tree.leaves() {
        let resolution = resolver.resolve(Some(leaf.id.as_str()));
        assert_eq!(resolution.view(), Some(&leaf.view), "{}", leaf.id);
        assert_eq!(resolution.navigation(), None, "{}", leaf.id);
    }
}

#[test]
fn test_absent_identifier_writes_default_once() {
    let resolution = fixture_resolver().resolve(None);

    assert_eq!(resolution.view(), Some(&View::Home));
    let writes: Vec<NavRequest> = resolution.navigation().into_iter().collect();
    assert_eq!(writes, vec![NavRequest::ShallowPage("dashboard".to_string())]);
}

#[test]
fn test_default_identifier_has_no_write() {
    let resolution = fixture_resolver().resolve(Some("dashboard"));
    assert_eq!(resolution, Resolution::Matched(View::Home));
    assert_eq!(resolution.navigation(), None);
}

#[test]
fn test_create_class_scenario() {
    let resolver = fixture_resolver();
    assert_eq!(
        resolver.resolve(Some("create-class")),
        Resolution::Matched(View::CreateClass)
    );
    assert_eq!(resolver.resolve(Some("nope")), Resolution::Unresolved);
}

#[test]
fn test_group_identity_is_not_a_page() {
    assert_eq!(
        fixture_resolver().resolve(Some("sidebar-user-manage")),
        Resolution::Unresolved
    );
}

#[test]
fn test_resolution_is_repeatable() {
    let resolver = fixture_resolver();
    let first = resolver.resolve(Some("create-user"));
    let second = resolver.resolve(Some("create-user"));
    assert_eq!(first, second);
}
