use std::collections::HashSet;

use crate::AppError;

/// Icon handle for a menu entry. The UI layer maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Dashboard,
    Person,
    School,
    LibraryBooks,
}

/// A selectable menu entry bound to a sub-view.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLeaf<V> {
    pub id: String,
    pub label: String,
    pub icon: Option<IconRef>,
    pub view: V,
}

impl<V> MenuLeaf<V> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, view: V) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            view,
        }
    }

    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A labelled group of leaves. Groups are not selectable themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup<V> {
    pub id: String,
    pub label: String,
    pub icon: IconRef,
    pub children: Vec<MenuLeaf<V>>,
}

impl<V> MenuGroup<V> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: IconRef,
        children: Vec<MenuLeaf<V>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            children,
        }
    }
}

/// Static two-level menu: one default entry plus ordered groups of leaves.
///
/// Every identity (default, groups, leaves) lives in a single namespace and
/// must be unique. [`MenuTree::new`] enforces this, so a built tree never
/// has an ambiguous lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTree<V> {
    default_item: MenuLeaf<V>,
    groups: Vec<MenuGroup<V>>,
}

impl<V> MenuTree<V> {
    pub fn new(default_item: MenuLeaf<V>, groups: Vec<MenuGroup<V>>) -> Result<Self, AppError> {
        {
            let mut seen: HashSet<&str> = HashSet::new();
            let identities = std::iter::once(default_item.id.as_str()).chain(
                groups.iter().flat_map(|group| {
                    std::iter::once(group.id.as_str())
                        .chain(group.children.iter().map(|leaf| leaf.id.as_str()))
                }),
            );
            for id in identities {
                if !seen.insert(id) {
                    return Err(AppError::duplicate_identity(id));
                }
            }
        }

        Ok(Self {
            default_item,
            groups,
        })
    }

    pub fn default_item(&self) -> &MenuLeaf<V> {
        &self.default_item
    }

    pub fn groups(&self) -> &[MenuGroup<V>] {
        &self.groups
    }

    /// All selectable leaves in menu order, excluding the default item.
    pub fn leaves(&self) -> impl Iterator<Item = &MenuLeaf<V>> {
        self.groups.iter().flat_map(|group| group.children.iter())
    }
}
