use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation;

/// Author entity - represents a blog author.
///
/// `name` is unique across all authors; the uniqueness itself is enforced
/// by the storage layer at write time, everything else by the validators
/// invoked from the constructor and setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    /// Stored normalized: trimmed, exactly ten ASCII digits.
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with generated ID and timestamps.
    /// Every field is validated; the phone number is stored in its
    /// trimmed form.
    pub fn new(
        name: impl Into<String>,
        phone_number: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validation::validate_name(&name)?;
        let phone_number = validation::validate_phone_number(phone_number)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rename the author. Uniqueness of the new name is checked at the
    /// storage boundary on the next save, not here.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validation::validate_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the phone number. `None` clears it; a present value is
    /// normalized before being stored.
    pub fn set_phone_number(&mut self, phone_number: Option<&str>) -> Result<(), ValidationError> {
        self.phone_number = validation::validate_phone_number(phone_number)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_author_with_valid_phone() {
        let author = Author::new("Jane Doe", Some("5551234567")).unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.phone_number.as_deref(), Some("5551234567"));
        assert_eq!(author.created_at, author.updated_at);
    }

    #[test]
    fn new_author_normalizes_phone() {
        let author = Author::new("Jane Doe", Some(" 5551234567 ")).unwrap();
        assert_eq!(author.phone_number.as_deref(), Some("5551234567"));
    }

    #[test]
    fn new_author_without_phone() {
        let author = Author::new("Jane Doe", None).unwrap();
        assert_eq!(author.phone_number, None);
    }

    #[test]
    fn new_author_rejects_bad_phone() {
        assert_eq!(
            Author::new("Jane Doe", Some(" 555 123 456")).unwrap_err(),
            ValidationError::InvalidPhoneFormat
        );
    }

    #[test]
    fn new_author_rejects_empty_name() {
        assert_eq!(
            Author::new("", None).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn rename_rejects_empty_and_keeps_old_name() {
        let mut author = Author::new("Jane Doe", None).unwrap();
        assert_eq!(author.rename("").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(author.name, "Jane Doe");
    }

    #[test]
    fn set_phone_number_bumps_updated_at() {
        let mut author = Author::new("Jane Doe", None).unwrap();
        let before = author.updated_at;
        author.set_phone_number(Some("0123456789")).unwrap();
        assert_eq!(author.phone_number.as_deref(), Some("0123456789"));
        assert!(author.updated_at >= before);
    }

    #[test]
    fn set_phone_number_rejection_keeps_old_value() {
        let mut author = Author::new("Jane Doe", Some("5551234567")).unwrap();
        assert_eq!(
            author.set_phone_number(Some("nope")).unwrap_err(),
            ValidationError::InvalidPhoneFormat
        );
        assert_eq!(author.phone_number.as_deref(), Some("5551234567"));
    }
}
