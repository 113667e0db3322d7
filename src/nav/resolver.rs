//! Role-aware navigation resolution.
//!
//! Every dashboard layout derives its sidebar, active highlight and
//! breadcrumb trail from one [`resolve`] call. The function is pure and never
//! panics; a malformed session degrades to guest-level visibility because the
//! role mapper already collapsed unknown input to `Role::Guest`.

use crate::models::{NavItem, ResolveInput, ResolvedNavState};

/// Resolves the visible tree, the active item and its ancestor chain for one
/// render. Deterministic for identical inputs.
pub fn resolve(tree: &[NavItem], input: &ResolveInput) -> ResolvedNavState {
    let tree_filtered = filter_items(tree, input);
    let active_item = find_active(&tree_filtered, input.pathname).cloned();
    let parents = match &active_item {
        Some(active) => ancestors_of(&tree_filtered, active.id),
        None => Vec::new(),
    };
    ResolvedNavState {
        tree_filtered,
        active_item,
        parents,
    }
}

fn item_permitted(item: &NavItem, input: &ResolveInput) -> bool {
    if let Some(roles) = item.required_roles {
        if !roles.contains(&input.role) {
            return false;
        }
    }
    if let Some(flag) = item.required_flag {
        if input.flags.get(flag).copied() != Some(true) {
            return false;
        }
    }
    // Fine-grained grants are only enforced when the session supplies them.
    if let (Some(required), Some(grants)) = (item.required_permission, input.permissions) {
        if !grants.iter().any(|g| g == required) {
            return false;
        }
    }
    true
}

/// Depth-first filter. A parent whose children are all filtered away is
/// dropped too, unless it is navigable through its own path. Dividers carry
/// no path but survive as group separators.
fn filter_items(items: &[NavItem], input: &ResolveInput) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| {
            if !item_permitted(item, input) {
                return None;
            }
            let children = filter_items(&item.children, input);
            if !item.divider
                && !item.children.is_empty()
                && children.is_empty()
                && item.path.is_none()
            {
                return None;
            }
            let mut kept = item.clone();
            kept.children = children;
            Some(kept)
        })
        .collect()
}

/// Exact path match wins; otherwise the longest strict-prefix match on a
/// path-segment boundary, first declaration winning ties. Dividers are never
/// candidates.
fn find_active<'a>(items: &'a [NavItem], pathname: &str) -> Option<&'a NavItem> {
    if let Some(exact) = find_exact(items, pathname) {
        return Some(exact);
    }
    let mut best: Option<&NavItem> = None;
    longest_prefix(items, pathname, &mut best);
    best
}

fn find_exact<'a>(items: &'a [NavItem], pathname: &str) -> Option<&'a NavItem> {
    for item in items {
        if !item.divider && item.path == Some(pathname) {
            return Some(item);
        }
        if let Some(found) = find_exact(&item.children, pathname) {
            return Some(found);
        }
    }
    None
}

fn longest_prefix<'a>(items: &'a [NavItem], pathname: &str, best: &mut Option<&'a NavItem>) {
    for item in items {
        if !item.divider {
            if let Some(path) = item.path {
                let better = match best {
                    Some(current) => {
                        path.len() > current.path.map(str::len).unwrap_or(0)
                    }
                    None => true,
                };
                if better && is_strict_prefix(path, pathname) {
                    *best = Some(item);
                }
            }
        }
        longest_prefix(&item.children, pathname, best);
    }
}

/// `path` is a strict prefix of `pathname` ending on a segment boundary.
/// The bare root "/" never prefix-matches, so the home item cannot swallow
/// every unregistered path.
fn is_strict_prefix(path: &str, pathname: &str) -> bool {
    pathname.len() > path.len()
        && pathname.starts_with(path)
        && pathname.as_bytes()[path.len()] == b'/'
}

/// Ordered ancestor chain from the root (exclusive) to the direct parent of
/// `id`. Dividers are skipped: they are flat separators, never ancestors.
fn ancestors_of(items: &[NavItem], id: &str) -> Vec<NavItem> {
    fn walk(items: &[NavItem], id: &str, trail: &mut Vec<NavItem>) -> bool {
        for item in items {
            if item.id == id {
                return true;
            }
            if item.divider {
                continue;
            }
            trail.push(item.clone());
            if walk(&item.children, id, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    if walk(items, id, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

/// One visual sidebar group: the divider that opened it (absent for the
/// leading group) plus the contiguous non-divider items after it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavGroup {
    pub header: Option<NavItem>,
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// Stable key used for collapse-state persistence.
    pub fn key(&self) -> &'static str {
        self.header.as_ref().map(|h| h.id).unwrap_or("main")
    }
}

/// Splits a filtered top-level tree into sidebar groups. Each divider starts
/// a new group; empty groups (a divider everything under which was filtered
/// away) are dropped.
pub fn sidebar_groups(items: &[NavItem]) -> Vec<NavGroup> {
    let mut groups: Vec<NavGroup> = Vec::new();
    let mut current = NavGroup::default();

    for item in items {
        if item.divider {
            if !current.items.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            current = NavGroup {
                header: Some(item.clone()),
                items: Vec::new(),
            };
        } else {
            current.items.push(item.clone());
        }
    }
    if !current.items.is_empty() {
        groups.push(current);
    }
    groups
}
