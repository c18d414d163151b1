//! Author model and display formatting

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};
use sqlx::FromRow;

/// A date column as it comes back from the store.
///
/// Documents may carry `null`, omit the field, or hold a value that is not a
/// date at all; all three must still format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    Date(NaiveDate),
    #[default]
    Absent,
    Invalid,
}

impl DateField {
    /// Four-digit year for a valid date, empty otherwise
    pub fn year_display(&self) -> String {
        match self {
            DateField::Date(date) => date.year().to_string(),
            DateField::Absent | DateField::Invalid => String::new(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateField::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Parse a document string value: `YYYY-MM-DD` or an RFC 3339 timestamp
    pub fn parse(value: &str) -> Self {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return DateField::Date(date);
        }
        match DateTime::parse_from_rfc3339(value) {
            Ok(ts) => DateField::Date(ts.date_naive()),
            Err(_) => DateField::Invalid,
        }
    }
}

impl From<Option<NaiveDate>> for DateField {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(DateField::Absent, DateField::Date)
    }
}

impl From<NaiveDate> for DateField {
    fn from(date: NaiveDate) -> Self {
        DateField::Date(date)
    }
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Null => DateField::Absent,
            serde_json::Value::String(s) => DateField::parse(&s),
            _ => DateField::Invalid,
        })
    }
}

/// Author row as stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct AuthorRow {
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Author projection used by the author list page
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AuthorRecord {
    #[serde(deserialize_with = "string_or_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub family_name: String,
    pub date_of_birth: DateField,
    pub date_of_death: DateField,
}

/// Document string field; `null` or a value of another type reads as empty
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

impl From<AuthorRow> for AuthorRecord {
    fn from(row: AuthorRow) -> Self {
        Self {
            first_name: row.first_name.unwrap_or_default(),
            family_name: row.family_name.unwrap_or_default(),
            date_of_birth: row.date_of_birth.into(),
            date_of_death: row.date_of_death.into(),
        }
    }
}

impl AuthorRecord {
    pub fn new(first_name: &str, family_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            family_name: family_name.to_string(),
            ..Default::default()
        }
    }

    pub fn born(mut self, date_of_birth: impl Into<DateField>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    pub fn died(mut self, date_of_death: impl Into<DateField>) -> Self {
        self.date_of_death = date_of_death.into();
        self
    }

    /// `"<family_name>, <first_name>"`, or empty when either name is missing
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// `"<birth year> - <death year>"`
    pub fn lifetime(&self) -> String {
        format!(
            "{} - {}",
            self.date_of_birth.year_display(),
            self.date_of_death.year_display()
        )
    }

    pub fn display_line(&self) -> String {
        format!("{} : {}", self.full_name(), self.lifetime())
    }
}
