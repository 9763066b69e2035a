//! Auxiliary records attached to an entry: media, citations, cross-references and tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::CategoryTag;

/// Kind of entry. Doubles as the category of the five-level `topics` collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl CategoryTag for ContentType {
    const ALL: &'static [Self] = &[
        Self::Structure,
        Self::System,
        Self::Pathway,
        Self::Process,
        Self::Condition,
        Self::Concept,
        Self::Topic,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::System => "system",
            Self::Pathway => "pathway",
            Self::Process => "process",
            Self::Condition => "condition",
            Self::Concept => "concept",
            Self::Topic => "topic",
        }
    }
}

/// Authoring lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Review,
    Published,
    Deprecated,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Draft,
        Status::Review,
        Status::Published,
        Status::Deprecated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Review => "review",
            Status::Published => "published",
            Status::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}

/// Direction and meaning of a cross-reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Parent,
        Relationship::Child,
        Relationship::Sibling,
        Relationship::Related,
        Relationship::SeeAlso,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Parent => "parent",
            Relationship::Child => "child",
            Relationship::Sibling => "sibling",
            Relationship::Related => "related",
            Relationship::SeeAlso => "see-also",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::ALL
            .into_iter()
            .find(|rel| rel.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown relationship '{s}' (expected one of: parent, child, sibling, related, see-also)"
                )
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Diagram,
    Video,
    Animation,
    Interactive,
}

/// A diagram, image or other asset shown alongside an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub filename: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Article,
    Book,
    Guideline,
    Website,
    Textbook,
}

/// A bibliographic entry. Formatting is left to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CitationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A typed, directed link to another entry.
///
/// `target_id` is not checked against the corpus at construction; see
/// [`crate::CrossReferenceIndex`] for resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: String,
    pub target_type: ContentType,
    pub relationship: Relationship,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamRelevance {
    pub usmle: bool,
    pub nbme: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shelf: Vec<String>,
}

/// Classification facets used for filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTags {
    pub systems: Vec<String>,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_relevance: Option<ClinicalRelevance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_parses_kebab_case() {
        assert_eq!("see-also".parse::<Relationship>(), Ok(Relationship::SeeAlso));
        assert_eq!("sibling".parse::<Relationship>(), Ok(Relationship::Sibling));
        let err = "cousin".parse::<Relationship>().expect_err("unknown relationship");
        assert!(err.contains("cousin"));
    }

    #[test]
    fn relationship_serializes_like_authoring_vocabulary() {
        let json = serde_json::to_string(&Relationship::SeeAlso).expect("serialize");
        assert_eq!(json, "\"see-also\"");
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn content_type_parses_only_known_tags() {
        assert_eq!(ContentType::parse("condition"), Some(ContentType::Condition));
        assert_eq!(ContentType::parse("Condition"), None);
        assert_eq!(ContentType::parse("disease"), None);
    }

    #[test]
    fn tags_deserialize_with_defaults() {
        let tags: ContentTags =
            serde_json::from_str(r#"{"keywords":["gout"],"clinicalRelevance":"high"}"#)
                .expect("tags should deserialize");
        assert_eq!(tags.keywords, vec!["gout".to_string()]);
        assert!(tags.systems.is_empty());
        assert_eq!(tags.clinical_relevance, Some(ClinicalRelevance::High));
        assert!(tags.exam_relevance.is_none());
    }
}
