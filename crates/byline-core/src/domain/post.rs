use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation;

/// Post category. A closed two-value set, rendered exactly as
/// `"Fiction"` / `"Non-Fiction"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-sensitive: `"fiction"` is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Category::Fiction),
            "Non-Fiction" => Ok(Category::NonFiction),
            _ => Err(ValidationError::InvalidCategory),
        }
    }
}

/// Post entity - represents a blog post.
///
/// Not linked to an [`crate::domain::Author`]; authorship is out of scope
/// for this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Must satisfy the clickbait policy, see
    /// [`validation::CLICKBAIT_KEYWORDS`].
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps. Every field is
    /// validated; any violation rejects the whole mutation, including an
    /// invalid category.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: Option<&str>,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        let content = content.into();
        validation::validate_content(Some(&content))?;
        validation::validate_summary(summary)?;
        let category = validation::validate_category(category)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            summary: summary.map(str::to_owned),
            category,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        validation::validate_content(Some(&content))?;
        self.content = content;
        self.touch();
        Ok(())
    }

    /// Replace the summary. `None` clears it and always passes.
    pub fn set_summary(&mut self, summary: Option<&str>) -> Result<(), ValidationError> {
        validation::validate_summary(summary)?;
        self.summary = summary.map(str::to_owned);
        self.touch();
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validation::validate_category(category)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
