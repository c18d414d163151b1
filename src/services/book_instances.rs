//! Book instance availability service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::BookInstanceStatus,
    repository::{BookInstanceField, CatalogStore, Filter, Query, Relation},
};

#[derive(Clone)]
pub struct BookInstancesService {
    store: Arc<dyn CatalogStore>,
}

impl BookInstancesService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Query used for the availability page
    pub fn available_query() -> Query<BookInstanceField> {
        Query::find(Filter::equals(BookInstanceField::Status, BookInstanceStatus::Available.as_str()))
            .with_relation(Relation::Book)
    }

    /// `"<title> : <status>"` for every instance the store returns for the
    /// available filter. Records are not filtered again here.
    pub async fn available_status_list(&self) -> AppResult<Vec<String>> {
        let query = Self::available_query();
        tracing::debug!(
            "book instance query: filter={} populate={:?}",
            query.filter.to_document(),
            query.relations.iter().map(Relation::name).collect::<Vec<_>>()
        );

        self.store
            .book_instances(&query)
            .await?
            .iter()
            .map(|bi| bi.status_line())
            .collect()
    }
}
