/// Placeholder used when a violation is found before the entry id itself could be read.
pub const UNKNOWN_ENTRY_ID: &str = "unknown id";

/// What was wrong with the field named by a [`SchemaViolation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    #[error("missing")]
    Missing,
    #[error("must not be empty")]
    Empty,
    #[error("invalid value: {0}")]
    Invalid(String),
    #[error("duplicate value '{0}'")]
    Duplicate(String),
    #[error("level field is {found} but its key is {expected}")]
    LevelMismatch { expected: u8, found: u8 },
    #[error("out of order: {0}")]
    OutOfOrder(String),
}

/// Construction-time rejection of one entry.
///
/// `field` is a dotted path into the authoring data, for example `levels.3` or
/// `levels.2.keyTerms[1].definition`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("schema violation in entry '{entry_id}' at {field}: {kind}")]
pub struct SchemaViolation {
    pub entry_id: String,
    pub field: String,
    #[source]
    pub kind: ViolationKind,
}

impl SchemaViolation {
    pub fn new(entry_id: impl Into<String>, field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            entry_id: entry_id.into(),
            field: field.into(),
            kind,
        }
    }

    /// A violation found before a usable id was available.
    pub fn without_id(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self::new(UNKNOWN_ENTRY_ID, field, kind)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("duplicate id '{id}' in collection '{collection}'")]
    DuplicateId { collection: String, id: String },

    #[error("collection '{0}' is already part of the corpus")]
    DuplicateCollection(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation failed with {errors} error(s) and {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_violation_message_names_entry_and_field() {
        let err = SchemaViolation::new("cataracts", "levels.3", ViolationKind::Missing);
        assert_eq!(
            err.to_string(),
            "schema violation in entry 'cataracts' at levels.3: missing"
        );
    }

    #[test]
    fn violation_without_id_uses_placeholder() {
        let err = SchemaViolation::without_id("id", ViolationKind::Empty);
        assert_eq!(err.entry_id, UNKNOWN_ENTRY_ID);
    }

    #[test]
    fn schema_violation_converts_into_catalog_error() {
        let err: CatalogError =
            SchemaViolation::new("amd", "name", ViolationKind::Empty).into();
        assert!(matches!(err, CatalogError::Schema(v) if v.field == "name"));
    }
}
