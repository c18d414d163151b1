//! Store-agnostic read queries.
//!
//! A [`Query`] is built first and executed by a [`super::CatalogStore`]
//! afterwards, so handlers and services never depend on a concrete backend.

use serde_json::{json, Map, Value};

/// A queryable field of one collection
pub trait Field: Copy + std::fmt::Debug + PartialEq {
    /// Document key, also the bare SQL column name
    fn name(&self) -> &'static str;

    /// SQL expression compared and ordered on
    fn column(&self) -> &'static str {
        self.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    FirstName,
    FamilyName,
    DateOfBirth,
    DateOfDeath,
}

impl Field for AuthorField {
    fn name(&self) -> &'static str {
        match self {
            AuthorField::FirstName => "first_name",
            AuthorField::FamilyName => "family_name",
            AuthorField::DateOfBirth => "date_of_birth",
            AuthorField::DateOfDeath => "date_of_death",
        }
    }

    fn column(&self) -> &'static str {
        // Dates compare as ISO text, same as the document store
        match self {
            AuthorField::DateOfBirth => "to_char(date_of_birth, 'YYYY-MM-DD')",
            AuthorField::DateOfDeath => "to_char(date_of_death, 'YYYY-MM-DD')",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInstanceField {
    Status,
}

impl Field for BookInstanceField {
    fn name(&self) -> &'static str {
        match self {
            BookInstanceField::Status => "status",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            BookInstanceField::Status => "bi.status",
        }
    }
}

/// Relations that can be resolved before records are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Book,
}

impl Relation {
    pub fn name(&self) -> &'static str {
        match self {
            Relation::Book => "book",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<F> {
    All,
    Eq(F, String),
}

impl<F: Field> Filter<F> {
    pub fn equals(field: F, value: impl Into<String>) -> Self {
        Filter::Eq(field, value.into())
    }

    /// Document-store form, e.g. `{"status": {"$eq": "Available"}}`
    pub fn to_document(&self) -> Value {
        match self {
            Filter::All => Value::Object(Map::new()),
            Filter::Eq(field, value) => {
                let mut doc = Map::new();
                doc.insert(field.name().to_string(), json!({ "$eq": value }));
                Value::Object(doc)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }

    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: Field> SortKey<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }

    /// `[field, "ascending"|"descending"]`
    pub fn to_document(&self) -> Value {
        json!([self.field.name(), self.order.as_str()])
    }
}

/// One read against a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F> {
    pub filter: Filter<F>,
    pub sort: Vec<SortKey<F>>,
    pub relations: Vec<Relation>,
}

impl<F: Field> Query<F> {
    pub fn find(filter: Filter<F>) -> Self {
        Self {
            filter,
            sort: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn order_by(mut self, field: F, order: SortOrder) -> Self {
        self.sort.push(SortKey { field, order });
        self
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        if !self.relations.contains(&relation) {
            self.relations.push(relation);
        }
        self
    }

    pub fn resolves(&self, relation: Relation) -> bool {
        self.relations.contains(&relation)
    }
}
