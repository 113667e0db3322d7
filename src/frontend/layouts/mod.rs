pub mod dashboard;
pub mod publisher;
pub mod shell;
pub mod urdu;

pub use dashboard::DashboardLayout;
pub use publisher::PublisherLayout;
pub use urdu::UrduLayout;
