//! The seam between a domain's record shape and the generic query engine.
//!
//! Each domain declares, once, which of its fields are searchable and which list field backs
//! the attribute filter. Search never scans fields that are not declared here.

use std::fmt;

use serde::Serialize;

use crate::error::SchemaViolation;
use crate::schema::{CrossReference, Depth};
use crate::validation::find_placeholder;

/// A closed set of category tags defined by one collection.
pub trait CategoryTag: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every tag, in declaration order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive match against [`CategoryTag::as_str`].
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Content-quality observations that do not block construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "note", rename_all = "kebab-case")]
pub enum QualityNote {
    /// No Spanish display name.
    MissingTranslation,
    /// The summary at `depth` is not longer than the one a tier shallower.
    SummaryNotDeepening { depth: Depth },
    /// The level at `depth` defines no key terms.
    MissingKeyTerms { depth: Depth },
    /// `field` still carries a TODO, FIXME or placeholder marker.
    Placeholder { field: String, marker: String },
}

impl fmt::Display for QualityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityNote::MissingTranslation => f.write_str("missing Spanish translation (nameEs)"),
            QualityNote::SummaryNotDeepening { depth } => write!(
                f,
                "level {depth} summary is not longer than level {} summary",
                depth.number() - 1
            ),
            QualityNote::MissingKeyTerms { depth } => write!(f, "level {depth} has no key terms"),
            QualityNote::Placeholder { field, marker } => {
                write!(f, "{field} contains placeholder text '{marker}'")
            }
        }
    }
}

/// Collects [`QualityNote::Placeholder`] notes over a record's free-text fields.
///
/// ```
/// use catalog_core::{PlaceholderScan, QualityNote};
///
/// let treatment = vec!["Topical antibiotics".to_string(), "FIXME dose".to_string()];
/// let notes = PlaceholderScan::new()
///     .text("description", "Inflamed conjunctiva")
///     .list("treatment", &treatment)
///     .finish();
/// assert_eq!(
///     notes,
///     vec![QualityNote::Placeholder { field: "treatment[1]".into(), marker: "FIXME".into() }]
/// );
/// ```
#[derive(Debug, Default)]
pub struct PlaceholderScan {
    notes: Vec<QualityNote>,
}

impl PlaceholderScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: &str, value: &str) -> Self {
        if let Some(marker) = find_placeholder(value) {
            self.notes.push(QualityNote::Placeholder {
                field: field.to_owned(),
                marker: marker.to_owned(),
            });
        }
        self
    }

    pub fn optional(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(field, v),
            None => self,
        }
    }

    /// Scans each element, naming it `field[i]`.
    pub fn list(self, field: &str, values: &[String]) -> Self {
        values
            .iter()
            .enumerate()
            .fold(self, |scan, (i, v)| scan.text(&format!("{field}[{i}]"), v))
    }

    pub fn finish(self) -> Vec<QualityNote> {
        self.notes
    }
}

/// A record that can live in a [`crate::DomainCollection`].
pub trait CatalogRecord: Sized {
    type Category: CategoryTag;

    fn id(&self) -> &str;

    fn category(&self) -> Self::Category;

    /// The declared searchable fields and attribute field for this shape.
    fn query_profile() -> QueryProfile<Self>;

    /// Re-checked on insertion so a malformed record never enters a collection.
    fn validate(&self) -> Result<(), SchemaViolation>;

    fn cross_references(&self) -> &[CrossReference] {
        &[]
    }

    fn quality_notes(&self) -> Vec<QualityNote> {
        Vec::new()
    }
}

enum FieldReader<E> {
    Text(for<'a> fn(&'a E) -> &'a str),
    Optional(for<'a> fn(&'a E) -> Option<&'a str>),
    List(for<'a> fn(&'a E) -> &'a [String]),
}

struct SearchField<E> {
    name: &'static str,
    reader: FieldReader<E>,
}

/// Declared query surface of one record shape.
pub struct QueryProfile<E> {
    searchable: Vec<SearchField<E>>,
    attribute_name: &'static str,
    attribute: for<'a> fn(&'a E) -> &'a [String],
}

impl<E> QueryProfile<E> {
    /// Starts a profile whose attribute filter reads `attribute`.
    pub fn new(attribute_name: &'static str, attribute: for<'a> fn(&'a E) -> &'a [String]) -> Self {
        Self {
            searchable: Vec::new(),
            attribute_name,
            attribute,
        }
    }

    pub fn text(mut self, name: &'static str, read: for<'a> fn(&'a E) -> &'a str) -> Self {
        self.searchable.push(SearchField {
            name,
            reader: FieldReader::Text(read),
        });
        self
    }

    pub fn optional(
        mut self,
        name: &'static str,
        read: for<'a> fn(&'a E) -> Option<&'a str>,
    ) -> Self {
        self.searchable.push(SearchField {
            name,
            reader: FieldReader::Optional(read),
        });
        self
    }

    pub fn list(mut self, name: &'static str, read: for<'a> fn(&'a E) -> &'a [String]) -> Self {
        self.searchable.push(SearchField {
            name,
            reader: FieldReader::List(read),
        });
        self
    }

    pub fn searchable_field_names(&self) -> Vec<&'static str> {
        self.searchable.iter().map(|f| f.name).collect()
    }

    pub fn attribute_field_name(&self) -> &'static str {
        self.attribute_name
    }

    /// `needle` must already be lowercased and non-empty.
    pub(crate) fn matches_search(&self, record: &E, needle: &str) -> bool {
        self.searchable.iter().any(|field| match &field.reader {
            FieldReader::Text(read) => contains_folded(read(record), needle),
            FieldReader::Optional(read) => read(record).is_some_and(|s| contains_folded(s, needle)),
            FieldReader::List(read) => read(record).iter().any(|s| contains_folded(s, needle)),
        })
    }

    /// `needle` must already be lowercased and non-empty.
    pub(crate) fn matches_attribute(&self, record: &E, needle: &str) -> bool {
        (self.attribute)(record)
            .iter()
            .any(|s| contains_folded(s, needle))
    }
}

impl<E> fmt::Debug for QueryProfile<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryProfile")
            .field("searchable", &self.searchable_field_names())
            .field("attribute", &self.attribute_name)
            .finish()
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lowercases a user query for matching, `None` when blank.
///
/// Surrounding whitespace is kept: `"cataracts "` only matches text that has a space after the
/// word.
pub(crate) fn fold_query(query: &str) -> Option<String> {
    (!query.trim().is_empty()).then(|| query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        title: String,
        subtitle: Option<String>,
        tags: Vec<String>,
    }

    fn profile() -> QueryProfile<Note> {
        QueryProfile::<Note>::new("tags", |n| n.tags.as_slice())
            .text("title", |n| n.title.as_str())
            .optional("subtitle", |n| n.subtitle.as_deref())
    }

    fn note() -> Note {
        Note {
            title: "Gradual Vision Loss".into(),
            subtitle: None,
            tags: vec!["Smoking (strongest modifiable risk)".into()],
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(profile().matches_search(&note(), "vision"));
        assert!(profile().matches_search(&note(), "al vis"));
        assert!(!profile().matches_search(&note(), "glaucoma"));
    }

    #[test]
    fn undeclared_fields_are_not_searched() {
        assert!(!profile().matches_search(&note(), "smoking"));
        assert!(profile().matches_attribute(&note(), "smoking"));
    }

    #[test]
    fn absent_optional_field_never_matches() {
        let mut n = note();
        assert!(!profile().matches_search(&n, "retina"));
        n.subtitle = Some("Retina".into());
        assert!(profile().matches_search(&n, "retina"));
    }

    #[test]
    fn fold_query_rejects_blank() {
        assert_eq!(fold_query(""), None);
        assert_eq!(fold_query("   "), None);
        assert_eq!(fold_query(" Vision "), Some(" vision ".to_string()));
    }

    #[test]
    fn profile_reports_declared_names() {
        let p = profile();
        assert_eq!(p.searchable_field_names(), vec!["title", "subtitle"]);
        assert_eq!(p.attribute_field_name(), "tags");
    }
}
