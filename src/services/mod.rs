// Service exports
pub mod catalog;
pub mod sessions;

pub use catalog::{CatalogClient, CatalogError, CatalogSource};
pub use sessions::{SessionStats, SessionStore, SharedController};
