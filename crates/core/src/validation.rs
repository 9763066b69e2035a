//! Input validation utilities.
//!
//! Field-level checks shared by the five-level entry factory and the flat reference-shape
//! records. Every failure is a [`SchemaViolation`] naming the entry and the field path.

use std::sync::LazyLock;

use crate::error::{SchemaViolation, ViolationKind};
use catalog_types::{NonEmptyText, Slug};
use chrono::{DateTime, Utc};
use regex::Regex;

static PLACEHOLDER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:todo|fixme|placeholder)\b").ok());

/// Validates a raw entry id and wraps it as a [`Slug`].
///
/// An empty id is reported against [`crate::error::UNKNOWN_ENTRY_ID`]; any other malformed id is
/// reported against the raw value so the author can find it.
pub fn parse_entry_id(raw: &str) -> Result<Slug, SchemaViolation> {
    if raw.trim().is_empty() {
        return Err(SchemaViolation::without_id("id", ViolationKind::Missing));
    }

    Slug::parse(raw)
        .map_err(|e| SchemaViolation::new(raw, "id", ViolationKind::Invalid(e.to_string())))
}

pub(crate) fn require_text(
    entry_id: &str,
    field: &str,
    value: &str,
) -> Result<NonEmptyText, SchemaViolation> {
    NonEmptyText::new(value).map_err(|_| SchemaViolation::new(entry_id, field, ViolationKind::Empty))
}

pub(crate) fn optional_text(
    entry_id: &str,
    field: &str,
    value: Option<&str>,
) -> Result<Option<NonEmptyText>, SchemaViolation> {
    value.map(|v| require_text(entry_id, field, v)).transpose()
}

/// Trims every element of a list that may legitimately be empty, rejecting blank elements.
pub(crate) fn text_list(
    entry_id: &str,
    field: &str,
    values: &[String],
) -> Result<Vec<String>, SchemaViolation> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            require_text(entry_id, &format!("{field}[{i}]"), v).map(|t| t.as_str().to_owned())
        })
        .collect()
}

/// An optional free-text sequence: absence is legal, a present-but-empty sequence is not.
pub(crate) fn optional_sequence(
    entry_id: &str,
    field: &str,
    values: Option<&[String]>,
) -> Result<Option<Vec<NonEmptyText>>, SchemaViolation> {
    let Some(values) = values else {
        return Ok(None);
    };

    if values.is_empty() {
        return Err(SchemaViolation::new(entry_id, field, ViolationKind::Empty));
    }

    values
        .iter()
        .enumerate()
        .map(|(i, v)| require_text(entry_id, &format!("{field}[{i}]"), v))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parses an RFC 3339 timestamp such as `2026-01-30T00:00:00.000Z`.
pub(crate) fn parse_timestamp(
    entry_id: &str,
    field: &str,
    raw: &str,
) -> Result<DateTime<Utc>, SchemaViolation> {
    if raw.trim().is_empty() {
        return Err(SchemaViolation::new(entry_id, field, ViolationKind::Missing));
    }

    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            SchemaViolation::new(
                entry_id,
                field,
                ViolationKind::Invalid(format!("not an RFC 3339 timestamp ({e})")),
            )
        })
}

/// Checks an ICD-11 code: uppercase letters and digits, optionally followed by a dotted
/// extension, e.g. `9B10`, `9A77.1`, `FA25.0`.
pub(crate) fn is_icd11_code(code: &str) -> bool {
    let mut parts = code.split('.');
    let stem = parts.next().unwrap_or_default();
    let extension = parts.next();

    let stem_ok = (2..=4).contains(&stem.len())
        && stem
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    let extension_ok = extension.is_none_or(|ext| {
        (1..=4).contains(&ext.len())
            && ext
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    });

    stem_ok && extension_ok && parts.next().is_none()
}

/// First `TODO`, `FIXME` or `placeholder` marker in `text`, as a whole word in any case.
///
/// ```
/// use catalog_core::find_placeholder;
///
/// assert_eq!(find_placeholder("Dosing: todo"), Some("todo"));
/// assert_eq!(find_placeholder("Placeholders are fine"), None);
/// ```
pub fn find_placeholder(text: &str) -> Option<&str> {
    PLACEHOLDER_PATTERN
        .as_ref()?
        .find(text)
        .map(|m| m.as_str())
}

/// Fluent checker used by flat reference-shape records.
///
/// ```
/// use catalog_core::RecordCheck;
///
/// let symptoms = vec!["Blurred vision".to_string()];
/// let id = RecordCheck::for_id("cataracts")?
///     .text("name", "Cataracts")?
///     .list("symptoms", &symptoms)?
///     .finish();
/// assert_eq!(id.as_str(), "cataracts");
/// # Ok::<(), catalog_core::SchemaViolation>(())
/// ```
#[derive(Debug)]
pub struct RecordCheck {
    id: Slug,
}

impl RecordCheck {
    pub fn for_id(raw: &str) -> Result<Self, SchemaViolation> {
        Ok(Self {
            id: parse_entry_id(raw)?,
        })
    }

    pub fn text(self, field: &str, value: &str) -> Result<Self, SchemaViolation> {
        require_text(self.id.as_str(), field, value)?;
        Ok(self)
    }

    pub fn optional_text(self, field: &str, value: Option<&str>) -> Result<Self, SchemaViolation> {
        optional_text(self.id.as_str(), field, value)?;
        Ok(self)
    }

    /// A required list: at least one element, and no blank elements.
    pub fn list(self, field: &str, values: &[String]) -> Result<Self, SchemaViolation> {
        if values.is_empty() {
            return Err(SchemaViolation::new(
                self.id.as_str(),
                field,
                ViolationKind::Empty,
            ));
        }
        text_list(self.id.as_str(), field, values)?;
        Ok(self)
    }

    pub fn icd11(self, field: &str, code: &str) -> Result<Self, SchemaViolation> {
        if !is_icd11_code(code) {
            return Err(SchemaViolation::new(
                self.id.as_str(),
                field,
                ViolationKind::Invalid(format!("'{code}' is not an ICD-11 code")),
            ));
        }
        Ok(self)
    }

    pub fn finish(self) -> Slug {
        self.id
    }
}
