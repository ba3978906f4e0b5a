//! Pure field validators for authors and posts.
//!
//! Each validator is a stateless, synchronous function: candidate value in,
//! normalized value out, or a [`ValidationError`] on rejection. The record
//! constructors and setters in [`crate::domain`] call these before accepting
//! any mutation. The storage layer independently re-checks the declarative
//! subset (name uniqueness, content/summary lengths, category) at write time;
//! the clickbait title policy exists only here.

use crate::domain::Category;
use crate::error::ValidationError;

/// Titles must contain at least one of these, matched case-sensitively
/// against the raw (untrimmed) title.
pub const CLICKBAIT_KEYWORDS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Minimum post content length, in characters.
pub const MIN_CONTENT_CHARS: usize = 250;

/// Maximum summary length, in characters. The field validator rejects
/// summaries at this length; the SQL check is inclusive (`<= 250`) and
/// allows them.
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Required phone number length after trimming.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// An author name must be present and non-empty. Uniqueness is enforced
/// at the storage boundary, not here.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Validate and normalize a phone number.
///
/// Absent values pass unconditionally. Present values are trimmed of
/// leading/trailing whitespace and must then be exactly ten ASCII digits.
/// Returns the trimmed form, which is what gets stored. No locale or
/// international format handling, deliberately.
pub fn validate_phone_number(
    phone_number: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    let Some(raw) = phone_number else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.len() != PHONE_NUMBER_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhoneFormat);
    }
    Ok(Some(trimmed.to_owned()))
}

/// A title must be non-empty and contain at least one clickbait keyword.
/// The emptiness check fires first, so an empty title never reports
/// `NotClickbait`.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if CLICKBAIT_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return Ok(());
    }
    Err(ValidationError::NotClickbait)
}

/// Content must be at least [`MIN_CONTENT_CHARS`] characters. Absent
/// content cannot meet the minimum and rejects with `ContentTooShort`
/// rather than erroring out on a missing value.
pub fn validate_content(content: Option<&str>) -> Result<(), ValidationError> {
    let len = content.map(|c| c.chars().count()).unwrap_or(0);
    if len < MIN_CONTENT_CHARS {
        return Err(ValidationError::ContentTooShort);
    }
    Ok(())
}

/// A summary, when present, must be shorter than [`MAX_SUMMARY_CHARS`]
/// characters. An absent summary passes, mirroring the SQL check
/// constraint that short-circuits on NULL.
pub fn validate_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    let Some(summary) = summary else {
        return Ok(());
    };
    if summary.chars().count() >= MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong);
    }
    Ok(())
}

/// A category must be exactly `"Fiction"` or `"Non-Fiction"`. Anything
/// else rejects the whole mutation.
pub fn validate_category(category: &str) -> Result<Category, ValidationError> {
    category.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("Jane Doe"), Ok(()));
    }

    #[test]
    fn phone_accepts_ten_digits() {
        assert_eq!(
            validate_phone_number(Some("5551234567")),
            Ok(Some("5551234567".to_owned()))
        );
    }

    #[test]
    fn phone_trims_surrounding_whitespace() {
        assert_eq!(
            validate_phone_number(Some("  5551234567\t")),
            Ok(Some("5551234567".to_owned()))
        );
    }

    #[test]
    fn phone_trimming_is_idempotent() {
        let normalized = validate_phone_number(Some(" 5551234567 "))
            .unwrap()
            .unwrap();
        assert_eq!(
            validate_phone_number(Some(&normalized)),
            Ok(Some(normalized.clone()))
        );
    }

    #[test]
    fn phone_rejects_interior_whitespace_and_non_digits() {
        // " 555 123 456" trims to "555 123 456": 11 chars, not all digits.
        assert_eq!(
            validate_phone_number(Some(" 555 123 456")),
            Err(ValidationError::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone_number(Some("555123456a")),
            Err(ValidationError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert_eq!(
            validate_phone_number(Some("123456789")),
            Err(ValidationError::InvalidPhoneFormat)
        );
        assert_eq!(
            validate_phone_number(Some("12345678901")),
            Err(ValidationError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are digits but not ASCII digits.
        assert_eq!(
            validate_phone_number(Some("١٢٣٤٥٦٧٨٩٠")),
            Err(ValidationError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn absent_phone_always_passes() {
        assert_eq!(validate_phone_number(None), Ok(None));
    }

    #[test]
    fn title_accepts_each_clickbait_keyword() {
        for title in [
            "You Won't Believe What Happened",
            "The Secret Life of Crabs",
            "Top 10 Compilers",
            "Guess Who's Back",
        ] {
            assert_eq!(validate_title(title), Ok(()), "{title}");
        }
    }

    #[test]
    fn title_keyword_match_is_case_sensitive() {
        assert_eq!(
            validate_title("top 10 compilers"),
            Err(ValidationError::NotClickbait)
        );
        assert_eq!(
            validate_title("the secret garden"),
            Err(ValidationError::NotClickbait)
        );
    }

    #[test]
    fn title_rejects_plain_titles() {
        assert_eq!(
            validate_title("A Nice Day"),
            Err(ValidationError::NotClickbait)
        );
    }

    #[test]
    fn empty_title_fires_before_clickbait_check() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn content_boundary_at_250_chars() {
        let exactly = "x".repeat(250);
        let short = "x".repeat(249);
        assert_eq!(validate_content(Some(&exactly)), Ok(()));
        assert_eq!(
            validate_content(Some(&short)),
            Err(ValidationError::ContentTooShort)
        );
    }

    #[test]
    fn content_counts_characters_not_bytes() {
        // 250 two-byte characters.
        let content = "é".repeat(250);
        assert_eq!(validate_content(Some(&content)), Ok(()));
    }

    #[test]
    fn absent_content_rejects() {
        assert_eq!(validate_content(None), Err(ValidationError::ContentTooShort));
    }

    #[test]
    fn summary_boundary_at_250_chars() {
        let fits = "s".repeat(249);
        let too_long = "s".repeat(250);
        assert_eq!(validate_summary(Some(&fits)), Ok(()));
        assert_eq!(
            validate_summary(Some(&too_long)),
            Err(ValidationError::SummaryTooLong)
        );
    }

    #[test]
    fn absent_summary_passes() {
        assert_eq!(validate_summary(None), Ok(()));
    }

    #[test]
    fn category_accepts_only_exact_literals() {
        assert_eq!(validate_category("Fiction"), Ok(Category::Fiction));
        assert_eq!(validate_category("Non-Fiction"), Ok(Category::NonFiction));
        for bad in ["fiction", "NON-FICTION", "Non Fiction", "", "Poetry"] {
            assert_eq!(
                validate_category(bad),
                Err(ValidationError::InvalidCategory),
                "{bad:?}"
            );
        }
    }
}
