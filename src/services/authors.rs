//! Author list service

use std::sync::Arc;

use crate::repository::{AuthorField, CatalogStore, Filter, Query, SortOrder};

#[derive(Clone)]
pub struct AuthorsService {
    store: Arc<dyn CatalogStore>,
}

impl AuthorsService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Query used for the author list page
    pub fn list_query() -> Query<AuthorField> {
        Query::find(Filter::All).order_by(AuthorField::FamilyName, SortOrder::Ascending)
    }

    /// Display lines for every author, ordered by family name.
    ///
    /// Store failures are logged and yield an empty list.
    pub async fn author_list(&self) -> Vec<String> {
        let query = Self::list_query();
        tracing::debug!(
            "author query: sort={:?}",
            query.sort.iter().map(|key| key.to_document()).collect::<Vec<_>>()
        );

        match self.store.authors(&query).await {
            Ok(authors) => authors.iter().map(|a| a.display_line()).collect(),
            Err(e) => {
                tracing::warn!("Author list query failed: {}", e);
                Vec::new()
            }
        }
    }
}
