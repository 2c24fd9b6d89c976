//! Ministry entity - a named scheduling group owned by an admin

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Ministry entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ministry {
    pub id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    /// Base calendar day the ministry is anchored to
    pub date: NaiveDate,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ministry {
    /// Create a new Ministry
    pub fn new(id: Snowflake, title: impl Into<String>, date: NaiveDate, created_by: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: None,
            date,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a description (builder style)
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ministry_creation() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let ministry = Ministry::new(Snowflake::new(10), "Reception", date, Snowflake::new(1))
            .with_description("Front door welcome team");

        assert_eq!(ministry.title, "Reception");
        assert_eq!(ministry.date, date);
        assert_eq!(ministry.description.as_deref(), Some("Front door welcome team"));
    }
}
