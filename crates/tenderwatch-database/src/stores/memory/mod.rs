//! In-memory store implementations.
//!
//! Backed by concurrent maps, used when `database.provider = "memory"` and
//! throughout the test suite. Data does not survive a restart.

mod notification;
mod portal;
mod tender;

pub use notification::MemoryNotificationStore;
pub use portal::MemoryPortalStore;
pub use tender::MemoryTenderStore;
