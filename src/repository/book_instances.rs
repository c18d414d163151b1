//! Book instance domain methods on Repository

use sqlx::{Postgres, QueryBuilder};

use super::{push_filter, push_order, BookInstanceField, Query, Relation, Repository};
use crate::{
    error::AppResult,
    models::{book_instance::BookInstanceRow, BookInstanceRecord},
};

impl Repository {
    /// Find book instances, joining `books` when the `book` relation is requested
    pub async fn book_instances_find(
        &self,
        query: &Query<BookInstanceField>,
    ) -> AppResult<Vec<BookInstanceRecord>> {
        let resolve_book = query.resolves(Relation::Book);

        let mut builder = QueryBuilder::<Postgres>::new(if resolve_book {
            "SELECT bi.status, b.id AS book_id, b.title AS book_title \
             FROM book_instances bi LEFT JOIN books b ON b.id = bi.book_id"
        } else {
            "SELECT bi.status FROM book_instances bi"
        });
        push_filter(&mut builder, &query.filter);
        push_order(&mut builder, &query.sort);

        let rows = builder
            .build_query_as::<BookInstanceRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_record(resolve_book))
            .collect())
    }
}
