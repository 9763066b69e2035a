//! Raw authoring data and the validating factory that turns it into an [`Entry`].
//!
//! A draft is deliberately loose: every field may be absent or blank, so that the factory, not
//! the deserializer, decides what is wrong and reports it as a [`SchemaViolation`] with a field
//! path. Validation stops at the first violation; an entry is admitted whole or not at all.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::constants::{LEVELS_FIELD, LEVEL_COUNT};
use crate::error::{SchemaViolation, ViolationKind};
use crate::schema::entry::Entry;
use crate::schema::level::{Depth, KeyTerm, Level, Levels};
use crate::schema::metadata::{
    Citation, CitationKind, ContentTags, ContentType, CrossReference, ExamRelevance, MediaAsset,
    MediaKind, Relationship, Status,
};
use crate::validation::{
    optional_sequence, optional_text, parse_entry_id, parse_timestamp, require_text, text_list,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyTermDraft {
    pub term: String,
    pub definition: String,
    pub pronunciation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LevelDraft {
    pub level: Option<u8>,
    pub summary: String,
    pub explanation: String,
    pub key_terms: Vec<KeyTermDraft>,
    pub analogies: Option<Vec<String>>,
    pub examples: Option<Vec<String>>,
    pub patient_counseling_points: Option<Vec<String>>,
    pub clinical_notes: Option<Vec<String>>,
}

impl LevelDraft {
    pub fn new(level: u8, summary: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            level: Some(level),
            summary: summary.into(),
            explanation: explanation.into(),
            ..Self::default()
        }
    }

    pub fn key_term(mut self, term: impl Into<String>, definition: impl Into<String>) -> Self {
        self.key_terms.push(KeyTermDraft {
            term: term.into(),
            definition: definition.into(),
            pronunciation: None,
        });
        self
    }

    pub fn key_term_pronounced(
        mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        self.key_terms.push(KeyTermDraft {
            term: term.into(),
            definition: definition.into(),
            pronunciation: Some(pronunciation.into()),
        });
        self
    }

    pub fn analogies<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.analogies = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn examples<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn counseling<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patient_counseling_points = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn clinical_notes<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clinical_notes = Some(items.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MediaDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<MediaKind>,
    pub filename: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CitationDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<CitationKind>,
    pub title: String,
    pub authors: Vec<String>,
    pub source: Option<String>,
    pub year: Option<u16>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CrossReferenceDraft {
    pub target_id: String,
    pub target_type: Option<ContentType>,
    pub relationship: Option<Relationship>,
    pub label: Option<String>,
}

/// Structured authoring input for one five-level entry.
///
/// Levels are keyed by depth number, mirroring the authoring format:
///
/// ```yaml
/// id: glaucoma-overview
/// type: condition
/// levels:
///   1: { level: 1, summary: ..., explanation: ... }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EntryDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub name: String,
    pub name_es: Option<String>,
    pub alternate_names: Vec<String>,
    pub levels: BTreeMap<u8, LevelDraft>,
    pub media: Vec<MediaDraft>,
    pub citations: Vec<CitationDraft>,
    pub cross_references: Vec<CrossReferenceDraft>,
    pub tags: ContentTags,
    pub created_at: String,
    pub updated_at: String,
    pub version: u32,
    pub status: Option<Status>,
}

impl EntryDraft {
    /// Starts a draft at version 1 in `draft` status. Levels and timestamps must still be added.
    pub fn new(id: impl Into<String>, content_type: ContentType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: Some(content_type),
            name: name.into(),
            version: 1,
            status: Some(Status::Draft),
            ..Self::default()
        }
    }

    /// Inserts `level` under its own depth number.
    ///
    /// A level without a number is kept under the first unused depth, so the factory reports its
    /// missing `level` field instead of a missing tier.
    pub fn level(mut self, level: LevelDraft) -> Self {
        let key = level.level.unwrap_or_else(|| self.first_unused_depth());
        self.levels.insert(key, level);
        self
    }

    /// Inserts `level` under `depth` whatever its own `level` field says.
    pub fn level_at(mut self, depth: u8, level: LevelDraft) -> Self {
        self.levels.insert(depth, level);
        self
    }

    fn first_unused_depth(&self) -> u8 {
        (1..=u8::MAX)
            .find(|n| !self.levels.contains_key(n))
            .unwrap_or(u8::MAX)
    }

    pub fn name_es(mut self, name_es: impl Into<String>) -> Self {
        self.name_es = Some(name_es.into());
        self
    }

    pub fn alternate_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn cross_reference(
        mut self,
        target_id: impl Into<String>,
        target_type: ContentType,
        relationship: Relationship,
    ) -> Self {
        self.cross_references.push(CrossReferenceDraft {
            target_id: target_id.into(),
            target_type: Some(target_type),
            relationship: Some(relationship),
            label: None,
        });
        self
    }

    /// Adds a fully specified reference, e.g. one with a label.
    pub fn cross_reference_with(mut self, reference: CrossReferenceDraft) -> Self {
        self.cross_references.push(reference);
        self
    }

    pub fn media(mut self, media: MediaDraft) -> Self {
        self.media.push(media);
        self
    }

    pub fn citation(mut self, citation: CitationDraft) -> Self {
        self.citations.push(citation);
        self
    }

    pub fn tags(mut self, tags: ContentTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Runs the validating factory.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaViolation`] found, naming the entry id and the field path.
    pub fn build(self) -> Result<Entry, SchemaViolation> {
        Entry::try_from(self)
    }
}

impl TryFrom<EntryDraft> for Entry {
    type Error = SchemaViolation;

    fn try_from(draft: EntryDraft) -> Result<Self, Self::Error> {
        let id = parse_entry_id(&draft.id)?;
        let eid = id.as_str();

        let content_type = draft
            .content_type
            .ok_or_else(|| SchemaViolation::new(eid, "type", ViolationKind::Missing))?;
        let name = require_text(eid, "name", &draft.name)?;
        let name_es = optional_text(eid, "nameEs", draft.name_es.as_deref())?;
        let alternate_names = text_list(eid, "alternateNames", &draft.alternate_names)?;

        let levels = build_levels(eid, draft.levels)?;
        let media = build_media(eid, draft.media)?;
        let citations = build_citations(eid, draft.citations)?;
        let cross_references = build_cross_references(eid, draft.cross_references)?;
        let tags = build_tags(eid, draft.tags)?;

        let created_at = parse_timestamp(eid, "createdAt", &draft.created_at)?;
        let updated_at = parse_timestamp(eid, "updatedAt", &draft.updated_at)?;
        if updated_at < created_at {
            return Err(SchemaViolation::new(
                eid,
                "updatedAt",
                ViolationKind::OutOfOrder(format!(
                    "updatedAt {} is earlier than createdAt {}",
                    updated_at.to_rfc3339(),
                    created_at.to_rfc3339()
                )),
            ));
        }

        if draft.version == 0 {
            return Err(SchemaViolation::new(
                eid,
                "version",
                ViolationKind::Invalid("version must be at least 1".into()),
            ));
        }

        let status = draft
            .status
            .ok_or_else(|| SchemaViolation::new(eid, "status", ViolationKind::Missing))?;

        Ok(Entry {
            id,
            content_type,
            name,
            name_es,
            alternate_names,
            levels,
            media,
            citations,
            cross_references,
            tags,
            created_at,
            updated_at,
            version: draft.version,
            status,
        })
    }
}

fn build_levels(
    entry_id: &str,
    mut drafts: BTreeMap<u8, LevelDraft>,
) -> Result<Levels, SchemaViolation> {
    if let Some(stray) = drafts.keys().find(|k| Depth::from_number(**k).is_none()) {
        return Err(SchemaViolation::new(
            entry_id,
            format!("{LEVELS_FIELD}.{stray}"),
            ViolationKind::Invalid(format!("depth must be between 1 and {LEVEL_COUNT}")),
        ));
    }

    // Completeness first, so a partial ladder is reported as such before any content problem.
    if let Some(absent) = Depth::ALL
        .into_iter()
        .find(|d| !drafts.contains_key(&d.number()))
    {
        return Err(SchemaViolation::new(
            entry_id,
            format!("{LEVELS_FIELD}.{absent}"),
            ViolationKind::Missing,
        ));
    }

    let mut built = Vec::with_capacity(LEVEL_COUNT);
    for depth in Depth::ALL {
        if let Some(draft) = drafts.remove(&depth.number()) {
            built.push(build_level(entry_id, depth, draft)?);
        }
    }

    let ordered: [Level; LEVEL_COUNT] = built.try_into().map_err(|_| {
        SchemaViolation::new(
            entry_id,
            LEVELS_FIELD,
            ViolationKind::Invalid(format!("expected exactly {LEVEL_COUNT} levels")),
        )
    })?;
    Ok(Levels::from_ordered(ordered))
}

fn build_level(entry_id: &str, depth: Depth, draft: LevelDraft) -> Result<Level, SchemaViolation> {
    let field = format!("{LEVELS_FIELD}.{depth}");

    match draft.level {
        None => {
            return Err(SchemaViolation::new(
                entry_id,
                format!("{field}.level"),
                ViolationKind::Missing,
            ))
        }
        Some(found) if found != depth.number() => {
            return Err(SchemaViolation::new(
                entry_id,
                format!("{field}.level"),
                ViolationKind::LevelMismatch {
                    expected: depth.number(),
                    found,
                },
            ))
        }
        Some(_) => {}
    }

    let summary = require_text(entry_id, &format!("{field}.summary"), &draft.summary)?;
    let explanation = require_text(entry_id, &format!("{field}.explanation"), &draft.explanation)?;

    let mut seen = HashSet::new();
    let mut key_terms = Vec::with_capacity(draft.key_terms.len());
    for (i, kt) in draft.key_terms.into_iter().enumerate() {
        let path = format!("{field}.keyTerms[{i}]");
        let term = require_text(entry_id, &format!("{path}.term"), &kt.term)?;
        let definition = require_text(entry_id, &format!("{path}.definition"), &kt.definition)?;
        let pronunciation = optional_text(
            entry_id,
            &format!("{path}.pronunciation"),
            kt.pronunciation.as_deref(),
        )?;

        if !seen.insert(term.as_str().to_lowercase()) {
            return Err(SchemaViolation::new(
                entry_id,
                format!("{path}.term"),
                ViolationKind::Duplicate(term.into_string()),
            ));
        }

        key_terms.push(KeyTerm {
            term,
            definition,
            pronunciation,
        });
    }

    Ok(Level {
        level: depth,
        summary,
        explanation,
        key_terms,
        analogies: optional_sequence(
            entry_id,
            &format!("{field}.analogies"),
            draft.analogies.as_deref(),
        )?,
        examples: optional_sequence(
            entry_id,
            &format!("{field}.examples"),
            draft.examples.as_deref(),
        )?,
        patient_counseling_points: optional_sequence(
            entry_id,
            &format!("{field}.patientCounselingPoints"),
            draft.patient_counseling_points.as_deref(),
        )?,
        clinical_notes: optional_sequence(
            entry_id,
            &format!("{field}.clinicalNotes"),
            draft.clinical_notes.as_deref(),
        )?,
    })
}

fn build_media(entry_id: &str, drafts: Vec<MediaDraft>) -> Result<Vec<MediaAsset>, SchemaViolation> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            let path = format!("media[{i}]");
            let id = require_text(entry_id, &format!("{path}.id"), &m.id)?.into_string();
            if !seen.insert(id.clone()) {
                return Err(SchemaViolation::new(
                    entry_id,
                    format!("{path}.id"),
                    ViolationKind::Duplicate(id),
                ));
            }
            let kind = m.kind.ok_or_else(|| {
                SchemaViolation::new(entry_id, format!("{path}.type"), ViolationKind::Missing)
            })?;
            Ok(MediaAsset {
                id,
                kind,
                filename: require_text(entry_id, &format!("{path}.filename"), &m.filename)?
                    .into_string(),
                title: require_text(entry_id, &format!("{path}.title"), &m.title)?.into_string(),
                description: optional_text(
                    entry_id,
                    &format!("{path}.description"),
                    m.description.as_deref(),
                )?
                .map(|d| d.into_string()),
            })
        })
        .collect()
}

fn build_citations(
    entry_id: &str,
    drafts: Vec<CitationDraft>,
) -> Result<Vec<Citation>, SchemaViolation> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let path = format!("citations[{i}]");
            let id = require_text(entry_id, &format!("{path}.id"), &c.id)?.into_string();
            if !seen.insert(id.clone()) {
                return Err(SchemaViolation::new(
                    entry_id,
                    format!("{path}.id"),
                    ViolationKind::Duplicate(id),
                ));
            }
            let kind = c.kind.ok_or_else(|| {
                SchemaViolation::new(entry_id, format!("{path}.type"), ViolationKind::Missing)
            })?;
            Ok(Citation {
                id,
                kind,
                title: require_text(entry_id, &format!("{path}.title"), &c.title)?.into_string(),
                authors: text_list(entry_id, &format!("{path}.authors"), &c.authors)?,
                source: optional_text(entry_id, &format!("{path}.source"), c.source.as_deref())?
                    .map(|s| s.into_string()),
                year: c.year,
                url: optional_text(entry_id, &format!("{path}.url"), c.url.as_deref())?
                    .map(|u| u.into_string()),
            })
        })
        .collect()
}

fn build_cross_references(
    entry_id: &str,
    drafts: Vec<CrossReferenceDraft>,
) -> Result<Vec<CrossReference>, SchemaViolation> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let path = format!("crossReferences[{i}]");
            let target_id =
                require_text(entry_id, &format!("{path}.targetId"), &r.target_id)?.into_string();
            let target_type = r.target_type.ok_or_else(|| {
                SchemaViolation::new(entry_id, format!("{path}.targetType"), ViolationKind::Missing)
            })?;
            let relationship = r.relationship.ok_or_else(|| {
                SchemaViolation::new(
                    entry_id,
                    format!("{path}.relationship"),
                    ViolationKind::Missing,
                )
            })?;
            let label = optional_text(entry_id, &format!("{path}.label"), r.label.as_deref())?
                .map(|l| l.into_string());
            Ok(CrossReference {
                target_id,
                target_type,
                relationship,
                label,
            })
        })
        .collect()
}

fn build_tags(entry_id: &str, tags: ContentTags) -> Result<ContentTags, SchemaViolation> {
    let exam_relevance = tags
        .exam_relevance
        .map(|exam| {
            Ok::<_, SchemaViolation>(ExamRelevance {
                usmle: exam.usmle,
                nbme: exam.nbme,
                shelf: text_list(entry_id, "tags.examRelevance.shelf", &exam.shelf)?,
            })
        })
        .transpose()?;

    Ok(ContentTags {
        systems: text_list(entry_id, "tags.systems", &tags.systems)?,
        topics: text_list(entry_id, "tags.topics", &tags.topics)?,
        keywords: text_list(entry_id, "tags.keywords", &tags.keywords)?,
        clinical_relevance: tags.clinical_relevance,
        exam_relevance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNKNOWN_ENTRY_ID;

    fn ladder(id: &str) -> EntryDraft {
        (1..=5).fold(
            EntryDraft::new(id, ContentType::Condition, "Cataracts")
                .timestamps("2026-01-30T00:00:00.000Z", "2026-02-01T00:00:00.000Z"),
            |draft, n| {
                draft.level(
                    LevelDraft::new(n, format!("summary {n}"), format!("explanation {n}"))
                        .key_term("Lens", "The clear structure behind the iris"),
                )
            },
        )
    }

    #[test]
    fn builds_complete_ladder() {
        let entry = ladder("cataracts").build().expect("complete entry should build");
        assert_eq!(entry.id(), "cataracts");
        assert_eq!(entry.levels().iter().count(), 5);
        for (level, depth) in entry.levels().iter().zip(Depth::ALL) {
            assert_eq!(level.depth(), depth);
        }
    }

    #[test]
    fn missing_level_three_is_named() {
        let mut draft = ladder("cataracts");
        draft.levels.remove(&3);

        let err = draft.build().expect_err("partial ladder should be rejected");
        assert_eq!(err.entry_id, "cataracts");
        assert_eq!(err.field, "levels.3");
        assert_eq!(err.kind, ViolationKind::Missing);
    }

    #[test]
    fn missing_level_is_reported_before_content_problems() {
        let mut draft = ladder("cataracts");
        draft.levels.remove(&4);
        if let Some(first) = draft.levels.get_mut(&1) {
            first.summary.clear();
        }

        let err = draft.build().expect_err("should fail");
        assert_eq!(err.field, "levels.4");
    }

    #[test]
    fn unnumbered_level_reports_its_level_field() {
        let mut draft = ladder("cataracts");
        let mut third = draft.levels.remove(&3).expect("ladder has level 3");
        third.level = None;

        let err = draft.level(third).build().expect_err("unnumbered level");
        assert_eq!(err.field, "levels.3.level");
        assert_eq!(err.kind, ViolationKind::Missing);
    }

    #[test]
    fn level_at_keeps_a_mismatched_number_for_the_factory() {
        let mut draft = ladder("cataracts");
        draft.levels.remove(&3);

        let err = draft
            .level_at(3, LevelDraft::new(4, "summary", "explanation"))
            .build()
            .expect_err("mismatched level");
        assert_eq!(err.field, "levels.3.level");
        assert_eq!(
            err.kind,
            ViolationKind::LevelMismatch {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn level_key_must_match_level_field() {
        let mut draft = ladder("cataracts");
        if let Some(second) = draft.levels.get_mut(&2) {
            second.level = Some(4);
        }

        let err = draft.build().expect_err("aliased level should be rejected");
        assert_eq!(err.field, "levels.2.level");
        assert_eq!(
            err.kind,
            ViolationKind::LevelMismatch {
                expected: 2,
                found: 4
            }
        );
    }

    #[test]
    fn depth_outside_ladder_is_invalid() {
        let draft = ladder("cataracts").level(LevelDraft::new(6, "extra", "extra"));
        let err = draft.build().expect_err("level 6 should be rejected");
        assert_eq!(err.field, "levels.6");
        assert!(matches!(err.kind, ViolationKind::Invalid(_)));
    }

    #[test]
    fn missing_id_reports_unknown_id() {
        let err = ladder("").build().expect_err("blank id should fail");
        assert_eq!(err.entry_id, UNKNOWN_ENTRY_ID);
        assert_eq!(err.field, "id");
    }

    #[test]
    fn non_slug_id_is_rejected() {
        let err = ladder("Cataracts").build().expect_err("uppercase id should fail");
        assert_eq!(err.field, "id");
        assert!(matches!(err.kind, ViolationKind::Invalid(_)));
    }

    #[test]
    fn key_term_definition_must_not_be_blank() {
        let mut draft = ladder("cataracts");
        if let Some(level) = draft.levels.get_mut(&2) {
            level.key_terms.push(KeyTermDraft {
                term: "Opacity".into(),
                definition: "   ".into(),
                pronunciation: None,
            });
        }

        let err = draft.build().expect_err("blank definition should fail");
        assert_eq!(err.field, "levels.2.keyTerms[1].definition");
        assert_eq!(err.kind, ViolationKind::Empty);
    }

    #[test]
    fn duplicate_key_terms_within_a_level_are_rejected_case_insensitively() {
        let mut draft = ladder("cataracts");
        if let Some(level) = draft.levels.remove(&1) {
            draft = draft.level(level.key_term("LENS", "Duplicate in another case"));
        }

        let err = draft.build().expect_err("duplicate term should fail");
        assert_eq!(err.field, "levels.1.keyTerms[1].term");
        assert_eq!(err.kind, ViolationKind::Duplicate("LENS".into()));
    }

    #[test]
    fn same_term_across_levels_is_fine() {
        // ladder() repeats "Lens" at every level.
        ladder("cataracts").build().expect("terms only need to be unique within a level");
    }

    #[test]
    fn present_but_empty_sequence_is_rejected() {
        let mut draft = ladder("cataracts");
        if let Some(level) = draft.levels.get_mut(&1) {
            level.analogies = Some(Vec::new());
        }

        let err = draft.build().expect_err("empty analogies should fail");
        assert_eq!(err.field, "levels.1.analogies");
        assert_eq!(err.kind, ViolationKind::Empty);
    }

    #[test]
    fn updated_before_created_is_out_of_order() {
        let draft = ladder("cataracts")
            .timestamps("2026-02-01T00:00:00Z", "2026-01-01T00:00:00Z");
        let err = draft.build().expect_err("should fail");
        assert_eq!(err.field, "updatedAt");
        assert!(matches!(err.kind, ViolationKind::OutOfOrder(_)));
    }

    #[test]
    fn version_zero_is_invalid() {
        let err = ladder("cataracts").version(0).build().expect_err("should fail");
        assert_eq!(err.field, "version");
    }

    #[test]
    fn cross_reference_target_must_not_be_blank() {
        let draft = ladder("cataracts").cross_reference(" ", ContentType::Structure, Relationship::Related);
        let err = draft.build().expect_err("blank target should fail");
        assert_eq!(err.field, "crossReferences[0].targetId");
    }

    #[test]
    fn duplicate_media_ids_are_rejected() {
        let asset = MediaDraft {
            id: "lens-diagram".into(),
            kind: Some(MediaKind::Diagram),
            filename: "lens.svg".into(),
            title: "Lens".into(),
            description: None,
        };
        let err = ladder("cataracts")
            .media(asset.clone())
            .media(asset)
            .build()
            .expect_err("duplicate media id should fail");
        assert_eq!(err.field, "media[1].id");
    }

    #[test]
    fn deserializes_structured_authoring_object() {
        let json = r#"{
            "id": "cataracts",
            "type": "condition",
            "name": "Cataracts",
            "nameEs": "Cataratas",
            "levels": {
                "1": {"level": 1, "summary": "Cloudy lens", "explanation": "The lens gets cloudy."},
                "2": {"level": 2, "summary": "Lens opacity", "explanation": "Proteins clump."},
                "3": {"level": 3, "summary": "Lens opacity with glare", "explanation": "Nuclear, cortical, subcapsular."},
                "4": {"level": 4, "summary": "Age-related lens opacification", "explanation": "Oxidative damage."},
                "5": {"level": 5, "summary": "Crystallin aggregation in the ageing lens", "explanation": "Surgical indications."}
            },
            "crossReferences": [
                {"targetId": "lens", "targetType": "structure", "relationship": "parent"}
            ],
            "createdAt": "2026-01-30T00:00:00.000Z",
            "updatedAt": "2026-01-30T00:00:00.000Z",
            "version": 1,
            "status": "review"
        }"#;

        let draft: EntryDraft = serde_json::from_str(json).expect("draft should deserialize");
        let entry = draft.build().expect("draft should validate");
        assert_eq!(entry.status(), Status::Review);
        assert_eq!(entry.cross_references()[0].relationship, Relationship::Parent);
    }

    #[test]
    fn missing_status_is_reported() {
        let mut draft = ladder("cataracts");
        draft.status = None;
        let err = draft.build().expect_err("status is required");
        assert_eq!(err.field, "status");
        assert_eq!(err.kind, ViolationKind::Missing);
    }
}
