//! Tender ingestion and read access.

pub mod directory;
pub mod ingest;

pub use directory::TenderDirectory;
pub use ingest::TenderIngest;
