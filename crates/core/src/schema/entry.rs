//! The validated five-level entry.

use catalog_types::{NonEmptyText, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaViolation;
use crate::record::{CatalogRecord, PlaceholderScan, QualityNote, QueryProfile};
use crate::schema::draft::EntryDraft;
use crate::schema::level::Levels;
use crate::schema::metadata::{
    Citation, ContentTags, ContentType, CrossReference, MediaAsset, Status,
};

/// Display language for localized fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// One topic, complete at all five depths.
///
/// An `Entry` only exists if it passed the validating factory ([`EntryDraft::build`]); this
/// includes values produced by deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EntryDraft")]
pub struct Entry {
    pub(crate) id: Slug,
    #[serde(rename = "type")]
    pub(crate) content_type: ContentType,
    pub(crate) name: NonEmptyText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name_es: Option<NonEmptyText>,
    pub(crate) alternate_names: Vec<String>,
    pub(crate) levels: Levels,
    pub(crate) media: Vec<MediaAsset>,
    pub(crate) citations: Vec<Citation>,
    pub(crate) cross_references: Vec<CrossReference>,
    pub(crate) tags: ContentTags,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) version: u32,
    pub(crate) status: Status,
}

impl Entry {
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn name_es(&self) -> Option<&NonEmptyText> {
        self.name_es.as_ref()
    }

    /// Display name in `locale`, falling back to English when no translation exists.
    pub fn name_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => self.name_es.as_ref().unwrap_or(&self.name).as_str(),
            Locale::En => self.name.as_str(),
        }
    }

    pub fn alternate_names(&self) -> &[String] {
        &self.alternate_names
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn media(&self) -> &[MediaAsset] {
        &self.media
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn cross_references(&self) -> &[CrossReference] {
        &self.cross_references
    }

    pub fn tags(&self) -> &ContentTags {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl CatalogRecord for Entry {
    type Category = ContentType;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn category(&self) -> ContentType {
        self.content_type
    }

    fn query_profile() -> QueryProfile<Self> {
        QueryProfile::<Self>::new("keywords", |e| e.tags.keywords.as_slice())
            .text("name", |e| e.name.as_str())
            .optional("nameEs", |e| e.name_es.as_ref().map(NonEmptyText::as_str))
            .list("alternateNames", |e| e.alternate_names.as_slice())
            .list("keywords", |e| e.tags.keywords.as_slice())
    }

    // Every invariant is established by the factory and fields are not mutable from outside.
    fn validate(&self) -> Result<(), SchemaViolation> {
        Ok(())
    }

    fn cross_references(&self) -> &[CrossReference] {
        &self.cross_references
    }

    fn quality_notes(&self) -> Vec<QualityNote> {
        let mut notes = Vec::new();
        if self.name_es.is_none() {
            notes.push(QualityNote::MissingTranslation);
        }

        let summaries: Vec<_> = self.levels.iter().collect();
        for pair in summaries.windows(2) {
            if pair[1].summary().char_count() <= pair[0].summary().char_count() {
                notes.push(QualityNote::SummaryNotDeepening {
                    depth: pair[1].depth(),
                });
            }
        }

        for level in self.levels.iter() {
            if level.key_terms().is_empty() {
                notes.push(QualityNote::MissingKeyTerms {
                    depth: level.depth(),
                });
            }
        }

        let mut scan = PlaceholderScan::new();
        for level in self.levels.iter() {
            let field = format!("levels.{}", level.depth());
            scan = scan
                .text(&format!("{field}.summary"), level.summary().as_str())
                .text(&format!("{field}.explanation"), level.explanation().as_str());
            for (i, kt) in level.key_terms().iter().enumerate() {
                scan = scan.text(
                    &format!("{field}.keyTerms[{i}].definition"),
                    kt.definition.as_str(),
                );
            }
        }
        notes.extend(scan.finish());
        notes
    }
}
