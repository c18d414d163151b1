//! Business logic services

pub mod authors;
pub mod book_instances;

use std::sync::Arc;

use crate::{error::AppResult, repository::CatalogStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub book_instances: book_instances::BookInstancesService,
    store: Arc<dyn CatalogStore>,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            authors: authors::AuthorsService::new(store.clone()),
            book_instances: book_instances::BookInstancesService::new(store.clone()),
            store,
        }
    }

    /// Check that the backing store answers
    pub async fn ready(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
