pub mod sse;
pub mod storage;

pub use sse::{ConnEffect, ConnEvent, ConnState, Reconnector, RECONNECT_DELAY};
pub use storage::{
    announcement_dismissed, default_store, mark_announcement, KeyValueStore, MemoryStore,
    SidebarPrefs, StoreHandle, SIDEBAR_KEY_DASHBOARD, SIDEBAR_KEY_PUBLISHER, SIDEBAR_KEY_URDU,
};
