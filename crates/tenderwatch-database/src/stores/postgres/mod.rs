//! PostgreSQL store implementations.

mod notification;
mod portal;
mod tender;

pub use notification::PgNotificationStore;
pub use portal::PgPortalStore;
pub use tender::PgTenderStore;
