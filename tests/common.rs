use sabq::models::*;
use sabq::services::KeyValueStore;

pub fn no_flags() -> FeatureFlags {
    FeatureFlags::new()
}

pub fn all_flags() -> FeatureFlags {
    [("ai_tools", true), ("whatsapp_ingest", true), ("beta", true)]
        .into_iter()
        .map(|(name, on)| (name.to_string(), on))
        .collect()
}

pub fn input<'a>(role: Role, flags: &'a FeatureFlags, pathname: &'a str) -> ResolveInput<'a> {
    ResolveInput {
        role,
        flags,
        pathname,
        permissions: None,
    }
}

/// Synthetic tree exercising every filtering rule: dividers, nested children,
/// role-restricted subtrees, a path-less parent, a flag-gated item, a
/// permission-gated item and a duplicate-path pair for tie-breaking.
pub fn fixture_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("root-home", "home").path("/app"),
        NavItem::divider("div-a", "section-a"),
        NavItem::leaf("parent-a", "parent-a")
            .path("/app/a")
            .roles(&[Role::Editor, Role::Admin])
            .children(vec![
                NavItem::leaf("child-a1", "child-a1").path("/app/a/one"),
                NavItem::leaf("child-a2", "child-a2")
                    .path("/app/a/two")
                    .roles(&[Role::Admin]),
            ]),
        NavItem::leaf("parent-b", "parent-b").children(vec![NavItem::leaf(
            "child-b1", "child-b1",
        )
        .path("/app/b/one")
        .roles(&[Role::Admin])]),
        NavItem::leaf("flagged", "flagged").path("/app/flagged").flag("beta"),
        NavItem::leaf("gated", "gated").path("/app/gated").permission("manage"),
        NavItem::leaf("dup-first", "dup-first").path("/app/dup"),
        NavItem::leaf("dup-second", "dup-second").path("/app/dup"),
    ]
}

pub fn collect_ids(items: &[NavItem]) -> Vec<&'static str> {
    let mut ids = Vec::new();
    fn walk(items: &[NavItem], ids: &mut Vec<&'static str>) {
        for item in items {
            ids.push(item.id);
            walk(&item.children, ids);
        }
    }
    walk(items, &mut ids);
    ids
}

/// Storage backend that fails every operation, standing in for a browser
/// where `localStorage` access throws.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}
