use std::collections::HashMap;

use crate::{MenuTree, NavRequest};

/// Outcome of resolving a `page` identifier against a menu tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<V> {
    /// No identifier was present. Show the default view and write its
    /// identity back into the URL.
    Defaulted { view: V, normalize_to: String },
    /// The identifier names the default item or a leaf.
    Matched(V),
    /// The identifier names nothing selectable. The caller keeps whatever
    /// view it showed before; no redirect happens.
    Unresolved,
}

impl<V> Resolution<V> {
    pub fn view(&self) -> Option<&V> {
        match self {
            Resolution::Defaulted { view, .. } | Resolution::Matched(view) => Some(view),
            Resolution::Unresolved => None,
        }
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Resolution::Defaulted { view, .. } | Resolution::Matched(view) => Some(view),
            Resolution::Unresolved => None,
        }
    }

    /// The URL write this resolution asks for, if any.
    pub fn navigation(&self) -> Option<NavRequest> {
        match self {
            Resolution::Defaulted { normalize_to, .. } => {
                Some(NavRequest::ShallowPage(normalize_to.clone()))
            }
            Resolution::Matched(_) | Resolution::Unresolved => None,
        }
    }
}

/// Resolves `page` identifiers to views with a lookup table flattened from
/// the menu tree at construction.
///
/// Group identities occupy the namespace but never resolve.
#[derive(Debug, Clone)]
pub struct PageResolver<V> {
    tree: MenuTree<V>,
    views: HashMap<String, V>,
}

impl<V: Clone> PageResolver<V> {
    pub fn new(tree: MenuTree<V>) -> Self {
        let default_item = tree.default_item();
        let views = std::iter::once(default_item)
            .chain(tree.leaves())
            .map(|leaf| (leaf.id.clone(), leaf.view.clone()))
            .collect();

        Self { tree, views }
    }

    pub fn tree(&self) -> &MenuTree<V> {
        &self.tree
    }

    pub fn default_id(&self) -> &str {
        &self.tree.default_item().id
    }

    /// Resolve the requested identifier. An empty string counts as absent.
    pub fn resolve(&self, requested: Option<&str>) -> Resolution<V> {
        let default_item = self.tree.default_item();

        let Some(id) = requested.filter(|id| !id.is_empty()) else {
            tracing::debug!(default = %default_item.id, "no page requested, normalizing to default");
            return Resolution::Defaulted {
                view: default_item.view.clone(),
                normalize_to: default_item.id.clone(),
            };
        };

        match self.views.get(id) {
            Some(view) => {
                tracing::debug!(page = %id, "page resolved");
                Resolution::Matched(view.clone())
            }
            None => {
                tracing::debug!(page = %id, "page not in menu, keeping current view");
                Resolution::Unresolved
            }
        }
    }
}
