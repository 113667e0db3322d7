//! Client-local persistence behind an injected key-value interface.
//!
//! Local storage is treated as a best-effort cache: read failures silently
//! default, write failures are logged and ignored. Tests swap in
//! [`MemoryStore`]; the browser build uses `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::common::StorageError;

/// Sidebar collapse state of the main dashboard layout.
pub const SIDEBAR_KEY_DASHBOARD: &str = "sabq.sidebar.v1";
/// Sidebar collapse state of the Urdu layout.
pub const SIDEBAR_KEY_URDU: &str = "sabq.sidebar.urdu.v1";
/// Sidebar collapse state of the publisher layout.
pub const SIDEBAR_KEY_PUBLISHER: &str = "sabq.sidebar.publisher.v1";

/// Minimal key-value contract. Implementations must not panic: a failing
/// backend behaves like an empty one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub type StoreHandle = Rc<dyn KeyValueStore>;

/// In-memory store used in tests and as the SSR fallback.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage` adapter. Quota and availability errors degrade to
/// the empty-store behavior.
#[cfg(feature = "hydrate")]
#[derive(Clone, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn backend(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.backend()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(backend) = self.backend() else {
            return;
        };
        if backend.set_item(key, value).is_err() {
            tracing::debug!(key, error = %StorageError::Unavailable, "dropping local storage write");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(backend) = self.backend() {
            let _ = backend.remove_item(key);
        }
    }
}

/// Store used by the running app: local storage in the browser, in-memory
/// (per-request, discarded) during SSR.
pub fn default_store() -> StoreHandle {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(BrowserStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryStore::new())
    }
}

/// Per-layout sidebar collapse state, JSON-persisted under a fixed key.
/// Absent or corrupt data means "all groups expanded".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarPrefs {
    #[serde(default)]
    collapsed: HashMap<String, bool>,
}

impl SidebarPrefs {
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        match Self::try_load(store, key) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::debug!(key, %err, "sidebar prefs unreadable, starting expanded");
                Self::default()
            }
        }
    }

    /// Fallible variant of [`SidebarPrefs::load`]. An absent key is the
    /// default state, not an error; only an undecodable payload is.
    pub fn try_load(store: &dyn KeyValueStore, key: &str) -> Result<Self, StorageError> {
        let Some(raw) = store.get(key) else {
            return Ok(Self::default());
        };
        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    pub fn save(&self, store: &dyn KeyValueStore, key: &str) {
        match serde_json::to_string(self) {
            Ok(raw) => store.set(key, &raw),
            Err(err) => tracing::debug!(%err, "failed to serialize sidebar prefs"),
        }
    }

    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.get(group).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, group: &str) {
        let entry = self.collapsed.entry(group.to_string()).or_insert(false);
        *entry = !*entry;
    }
}

/// Per-announcement dismissal tracking.
pub fn announcement_dismissed(store: &dyn KeyValueStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("1")
}

pub fn mark_announcement(store: &dyn KeyValueStore, key: &str) {
    store.set(key, "1");
}
