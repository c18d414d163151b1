//! Data models for the catalog pages

pub mod author;
pub mod book_instance;

// Re-export commonly used types
pub use author::{AuthorRecord, DateField};
pub use book_instance::{BookInstanceRecord, BookInstanceStatus, BookRef, AVAILABLE_STATUS};
