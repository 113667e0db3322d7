pub mod banner;
pub mod breadcrumbs;
pub mod icon;
pub mod sidebar;
pub mod toast;

pub use banner::{AnnouncementBanner, NotificationsBridge};
pub use breadcrumbs::Breadcrumbs;
pub use icon::{icon_glyph, Icon};
pub use sidebar::Sidebar;
pub use toast::{provide_toasts, ToastHost, Toasts};
