//! Book instance (loanable copy) model

use serde::Deserialize;
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

/// Status value the availability page filters on
pub const AVAILABLE_STATUS: &str = "Available";

/// Statuses a book instance is created with.
///
/// Records keep `status` as free text so that whatever the store returns
/// is shown unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInstanceStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => AVAILABLE_STATUS,
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved `book` relation
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BookRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// Book instance row, optionally joined with its book
#[derive(Debug, Clone, FromRow)]
pub struct BookInstanceRow {
    pub status: String,
    /// Set only when the query joined `books`
    #[sqlx(default)]
    pub book_id: Option<i32>,
    #[sqlx(default)]
    pub book_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInstanceRecord {
    /// `None` when the relation was not resolved
    pub book: Option<BookRef>,
    pub status: String,
}

impl BookInstanceRow {
    pub fn into_record(self, book_resolved: bool) -> BookInstanceRecord {
        let book = match (book_resolved, self.book_id) {
            (true, Some(_)) => Some(BookRef { title: self.book_title }),
            _ => None,
        };
        BookInstanceRecord {
            book,
            status: self.status,
        }
    }
}

impl BookInstanceRecord {
    pub fn new(title: Option<&str>, status: &str) -> Self {
        Self {
            book: Some(BookRef {
                title: title.map(str::to_string),
            }),
            status: status.to_string(),
        }
    }

    /// `"<title> : <status>"`; a missing title renders as `null`
    pub fn status_line(&self) -> AppResult<String> {
        let book = self.book.as_ref().ok_or_else(|| {
            AppError::UnresolvedRelation(format!(
                "book instance with status '{}' has no resolved book",
                self.status
            ))
        })?;
        let title = book.title.as_deref().unwrap_or("null");
        Ok(format!("{} : {}", title, self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let record = BookInstanceRecord::new(Some("T"), "Available");
        assert_eq!(record.status_line().unwrap(), "T : Available");
    }

    #[test]
    fn test_missing_title_renders_null() {
        let record = BookInstanceRecord::new(None, "Available");
        assert_eq!(record.status_line().unwrap(), "null : Available");
    }

    #[test]
    fn test_unresolved_book_is_error() {
        let record = BookInstanceRecord {
            book: None,
            status: "Loaned".to_string(),
        };
        assert!(matches!(
            record.status_line(),
            Err(AppError::UnresolvedRelation(_))
        ));
    }

    #[test]
    fn test_row_into_record() {
        let row = BookInstanceRow {
            status: "Maintenance".to_string(),
            book_id: Some(4),
            book_title: None,
        };
        let record = row.clone().into_record(true);
        assert_eq!(record.status_line().unwrap(), "null : Maintenance");
        assert_eq!(row.into_record(false).book, None);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(BookInstanceStatus::Available.to_string(), AVAILABLE_STATUS);
        assert_eq!(BookInstanceStatus::Reserved.as_str(), "Reserved");
    }
}
