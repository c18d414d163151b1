//! Author domain methods on Repository

use sqlx::{Postgres, QueryBuilder};

use super::{push_filter, push_order, AuthorField, Query, Repository};
use crate::{
    error::AppResult,
    models::{author::AuthorRow, AuthorRecord},
};

impl Repository {
    /// Find authors matching the query, in the requested order
    pub async fn authors_find(&self, query: &Query<AuthorField>) -> AppResult<Vec<AuthorRecord>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT first_name, family_name, date_of_birth, date_of_death FROM authors",
        );
        push_filter(&mut builder, &query.filter);
        push_order(&mut builder, &query.sort);

        let rows = builder
            .build_query_as::<AuthorRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("authors query returned {} rows", rows.len());
        Ok(rows.into_iter().map(AuthorRecord::from).collect())
    }
}
