//! Repository layer: the catalog store seam and its backends

pub mod authors;
pub mod book_instances;
pub mod memory;
pub mod query;

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::AppResult,
    models::{AuthorRecord, BookInstanceRecord},
};

pub use memory::MemoryStore;
pub use query::{AuthorField, BookInstanceField, Field, Filter, Query, Relation, SortKey, SortOrder};

/// Read access to the catalog collections.
///
/// Injected into the services as `Arc<dyn CatalogStore>`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn authors(&self, query: &Query<AuthorField>) -> AppResult<Vec<AuthorRecord>>;

    async fn book_instances(
        &self,
        query: &Query<BookInstanceField>,
    ) -> AppResult<Vec<BookInstanceRecord>>;

    /// Cheap connectivity check used by the readiness endpoint
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed catalog store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn authors(&self, query: &Query<AuthorField>) -> AppResult<Vec<AuthorRecord>> {
        self.authors_find(query).await
    }

    async fn book_instances(
        &self,
        query: &Query<BookInstanceField>,
    ) -> AppResult<Vec<BookInstanceRecord>> {
        self.book_instances_find(query).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Append `WHERE <column> = $n` for an equality filter
fn push_filter<F: Field>(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter<F>) {
    if let Filter::Eq(field, value) = filter {
        builder.push(" WHERE ");
        builder.push(field.column());
        builder.push(" = ");
        builder.push_bind(value.clone());
    }
}

/// Append `ORDER BY`, placing missing values first on ascending keys
fn push_order<F: Field>(builder: &mut QueryBuilder<'_, Postgres>, sort: &[SortKey<F>]) {
    for (i, key) in sort.iter().enumerate() {
        builder.push(if i == 0 { " ORDER BY " } else { ", " });
        builder.push(key.field.column());
        builder.push(match key.order {
            SortOrder::Ascending => " ASC NULLS FIRST",
            SortOrder::Descending => " DESC NULLS LAST",
        });
    }
}
