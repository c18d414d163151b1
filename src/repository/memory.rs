//! In-process document store loaded from a JSON fixture.
//!
//! Mirrors the document-store semantics the pages rely on: equality filters,
//! stable multi-key sorts with missing values first, and resolution of the
//! `book` reference on book instances.

use std::{cmp::Ordering, collections::HashMap, path::Path};

use async_trait::async_trait;
use serde::Deserialize;

use super::{AuthorField, BookInstanceField, CatalogStore, Field, Filter, Query, Relation, SortKey};
use crate::{
    error::{AppError, AppResult},
    models::{author::string_or_empty, AuthorRecord, BookInstanceRecord, BookRef},
};

#[derive(Debug, Clone, Deserialize)]
struct BookDocument {
    id: String,
    #[serde(default, deserialize_with = "optional_string")]
    title: Option<String>,
}

/// Non-string titles read as missing
fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
struct BookInstanceDocument {
    /// Id of the referenced book
    #[serde(default)]
    book: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    authors: Vec<AuthorRecord>,
    books: Vec<BookDocument>,
    book_instances: Vec<BookInstanceDocument>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    authors: Vec<AuthorRecord>,
    books: HashMap<String, BookRef>,
    book_instances: Vec<BookInstanceDocument>,
}

impl MemoryStore {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| AppError::Fixture(e.to_string()))?;

        let books = doc
            .books
            .into_iter()
            .map(|b| (b.id, BookRef { title: b.title }))
            .collect();

        Ok(Self {
            authors: doc.authors,
            books,
            book_instances: doc.book_instances,
        })
    }

    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Fixture(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            "Loaded fixture {} ({} authors, {} book instances)",
            path.display(),
            store.authors.len(),
            store.book_instances.len()
        );
        Ok(store)
    }
}

fn author_value(author: &AuthorRecord, field: AuthorField) -> Option<String> {
    match field {
        AuthorField::FirstName => Some(author.first_name.clone()),
        AuthorField::FamilyName => Some(author.family_name.clone()),
        AuthorField::DateOfBirth => author.date_of_birth.as_date().map(|d| d.to_string()),
        AuthorField::DateOfDeath => author.date_of_death.as_date().map(|d| d.to_string()),
    }
}

fn book_instance_value(instance: &BookInstanceDocument, field: BookInstanceField) -> Option<String> {
    match field {
        BookInstanceField::Status => Some(instance.status.clone()),
    }
}

fn filter_matches<T, F: Field>(record: &T, filter: &Filter<F>, value: impl Fn(&T, F) -> Option<String>) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, expected) => value(record, *field).as_deref() == Some(expected.as_str()),
    }
}

fn sort_by_keys<T, F: Field>(records: &mut [T], keys: &[SortKey<F>], value: impl Fn(&T, F) -> Option<String>) {
    if keys.is_empty() {
        return;
    }
    records.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.order.apply(value(a, key.field).cmp(&value(b, key.field))))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn authors(&self, query: &Query<AuthorField>) -> AppResult<Vec<AuthorRecord>> {
        let mut authors: Vec<AuthorRecord> = self
            .authors
            .iter()
            .filter(|a| filter_matches(*a, &query.filter, author_value))
            .cloned()
            .collect();
        sort_by_keys(&mut authors, &query.sort, author_value);
        Ok(authors)
    }

    async fn book_instances(
        &self,
        query: &Query<BookInstanceField>,
    ) -> AppResult<Vec<BookInstanceRecord>> {
        let mut instances: Vec<BookInstanceDocument> = self
            .book_instances
            .iter()
            .filter(|bi| filter_matches(*bi, &query.filter, book_instance_value))
            .cloned()
            .collect();
        sort_by_keys(&mut instances, &query.sort, book_instance_value);

        let resolve_book = query.resolves(Relation::Book);
        Ok(instances
            .into_iter()
            .map(|bi| BookInstanceRecord {
                book: bi
                    .book
                    .as_ref()
                    .filter(|_| resolve_book)
                    .and_then(|id| self.books.get(id).cloned()),
                status: bi.status,
            })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
