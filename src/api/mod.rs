//! Typed API surface of the app.
//!
//! Each group of upstream REST endpoints is exposed as Leptos server
//! functions under `/api`. On the server the functions proxy the upstream
//! service (`SABQ_API_BASE`) with the caller's session cookie attached, so
//! the browser only ever talks to this crate.

pub mod ads;
pub mod ai;
pub mod auth;
pub mod content;
pub mod ingest;
pub mod notifications;

#[cfg(feature = "ssr")]
pub(crate) mod upstream;

pub use ads::*;
pub use ai::*;
pub use auth::*;
pub use content::*;
pub use ingest::*;
pub use notifications::*;
