use std::collections::HashMap;

use crate::models::{Locale, Role};

/// Feature flags the session endpoint reports, by flag name.
pub type FeatureFlags = HashMap<String, bool>;

/// One node of a static navigation tree. Declared once per layout in
/// `nav::tree`; all strings are static so trees carry no allocation beyond
/// their child vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label_key: &'static str,
    pub label_ar: &'static str,
    pub label_en: &'static str,
    pub label_ur: &'static str,
    /// Absent for dividers and purely structural parents.
    pub path: Option<&'static str>,
    pub icon: Option<&'static str>,
    /// `None` means visible to every role, including guests.
    pub required_roles: Option<&'static [Role]>,
    /// Flag that must be enabled for the item to show.
    pub required_flag: Option<&'static str>,
    /// Fine-grained grant, enforced only when the session supplies grants.
    pub required_permission: Option<&'static str>,
    pub divider: bool,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn leaf(id: &'static str, label_key: &'static str) -> Self {
        NavItem {
            id,
            label_key,
            label_ar: "",
            label_en: "",
            label_ur: "",
            path: None,
            icon: None,
            required_roles: None,
            required_flag: None,
            required_permission: None,
            divider: false,
            children: Vec::new(),
        }
    }

    pub fn divider(id: &'static str, label_key: &'static str) -> Self {
        let mut item = Self::leaf(id, label_key);
        item.divider = true;
        item
    }

    pub fn labels(mut self, ar: &'static str, en: &'static str, ur: &'static str) -> Self {
        self.label_ar = ar;
        self.label_en = en;
        self.label_ur = ur;
        self
    }

    pub fn path(mut self, path: &'static str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn roles(mut self, roles: &'static [Role]) -> Self {
        self.required_roles = Some(roles);
        self
    }

    pub fn flag(mut self, flag: &'static str) -> Self {
        self.required_flag = Some(flag);
        self
    }

    pub fn permission(mut self, permission: &'static str) -> Self {
        self.required_permission = Some(permission);
        self
    }

    pub fn children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Display label for a locale, falling back to the label key when no
    /// translation was declared.
    pub fn label_for(&self, locale: Locale) -> &'static str {
        let label = match locale {
            Locale::Ar => self.label_ar,
            Locale::En => self.label_en,
            Locale::Ur => self.label_ur,
        };
        if label.is_empty() {
            self.label_key
        } else {
            label
        }
    }
}

/// Everything one nav resolution depends on.
#[derive(Debug, Clone)]
pub struct ResolveInput<'a> {
    pub role: Role,
    pub flags: &'a FeatureFlags,
    pub pathname: &'a str,
    /// `None` when the backend issues no grant list; permission checks are
    /// then skipped entirely.
    pub permissions: Option<&'a [String]>,
}

/// Output of one nav resolution: the visible tree, the active item and its
/// ancestor chain ordered root-first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedNavState {
    pub tree_filtered: Vec<NavItem>,
    pub active_item: Option<NavItem>,
    pub parents: Vec<NavItem>,
}
