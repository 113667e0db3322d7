pub use ai::*;
pub use announcement::*;
pub use article::*;
pub use campaign::*;
pub use category::*;
pub use ingest::*;
pub use locale::*;
pub use nav::*;
pub use notification::*;
pub use role::*;
pub use user::*;

mod ai;
mod announcement;
mod article;
mod campaign;
mod category;
mod ingest;
mod locale;
mod nav;
mod notification;
mod role;
mod user;
