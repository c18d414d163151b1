//! LocalLibrary catalog pages
//!
//! A small REST server listing the library's authors and the book copies
//! currently available for loan.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(store: Arc<dyn repository::CatalogStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store)),
        }
    }
}
