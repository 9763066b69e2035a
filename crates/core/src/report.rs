//! Whole-corpus validation pass.
//!
//! The factory checks one entry at a time. This pass checks what only the whole corpus can show:
//! ids shared between collections, cross-references that resolve nowhere, self-references, and
//! content-quality notes. It reports and never rejects; the caller decides what fails a build.

use std::fmt;

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::corpus::Corpus;
use crate::error::{CatalogError, CatalogResult};
use crate::record::QualityNote;
use crate::schema::Relationship;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum IssueKind {
    IdCollision { collections: Vec<String> },
    DanglingReference {
        target: String,
        relationship: Relationship,
    },
    SelfReference { relationship: Relationship },
    Quality(QualityNote),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    pub collection: String,
    pub entry_id: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}/{}: ", self.severity, self.collection, self.entry_id)?;
        match &self.kind {
            IssueKind::IdCollision { collections } => {
                write!(f, "id is defined in {}", collections.join(", "))
            }
            IssueKind::DanglingReference {
                target,
                relationship,
            } => write!(f, "{relationship} reference to '{target}' resolves to no entry"),
            IssueKind::SelfReference { relationship } => {
                write!(f, "entry lists itself as {relationship}")
            }
            IssueKind::Quality(note) => write!(f, "{note}"),
        }
    }
}

/// What the pass treats as an error rather than a warning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub strict_references: bool,
    pub require_translations: bool,
}

impl From<&CatalogConfig> for ValidationPolicy {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            strict_references: config.strict_references(),
            require_translations: config.require_translations(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> + '_ {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> + '_ {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Passes the report through unless it contains an error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` with the error and warning counts.
    pub fn into_result(self) -> CatalogResult<Self> {
        let errors = self.error_count();
        if errors > 0 {
            return Err(CatalogError::ValidationFailed {
                errors,
                warnings: self.warning_count(),
            });
        }
        Ok(self)
    }

    fn push(&mut self, severity: Severity, collection: &str, entry_id: &str, kind: IssueKind) {
        self.issues.push(ValidationIssue {
            severity,
            collection: collection.to_owned(),
            entry_id: entry_id.to_owned(),
            kind,
        });
    }
}

/// Runs every corpus-level check under `policy`.
pub fn validate_corpus(corpus: &Corpus, policy: &ValidationPolicy) -> ValidationReport {
    let mut report = ValidationReport::default();

    for collision in corpus.id_collisions() {
        let owner = collision.collections.first().cloned().unwrap_or_default();
        report.push(
            Severity::Error,
            &owner,
            &collision.id,
            IssueKind::IdCollision {
                collections: collision.collections,
            },
        );
    }

    let dangling_severity = if policy.strict_references {
        Severity::Error
    } else {
        Severity::Warning
    };

    for edge in corpus.cross_references().edges() {
        if edge.source == edge.target {
            report.push(
                Severity::Warning,
                &edge.collection,
                &edge.source,
                IssueKind::SelfReference {
                    relationship: edge.relationship,
                },
            );
        }
        if !edge.resolved {
            report.push(
                dangling_severity,
                &edge.collection,
                &edge.source,
                IssueKind::DanglingReference {
                    target: edge.target.clone(),
                    relationship: edge.relationship,
                },
            );
        }
    }

    for collection in corpus.collections() {
        for (entry_id, note) in collection.quality_notes() {
            if note == QualityNote::MissingTranslation && !policy.require_translations {
                continue;
            }
            report.push(
                Severity::Warning,
                collection.name(),
                entry_id,
                IssueKind::Quality(note),
            );
        }
    }

    tracing::debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated corpus"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::DomainCollection;
    use crate::schema::{ContentType, Entry, EntryDraft, LevelDraft};
    use std::sync::Arc;

    fn topic(id: &str, refs: &[(&str, Relationship)]) -> Entry {
        let mut draft = EntryDraft::new(id, ContentType::Concept, id)
            .name_es(id)
            .timestamps("2026-01-30T00:00:00Z", "2026-01-30T00:00:00Z");
        for n in 1..=5u8 {
            draft = draft.level(
                LevelDraft::new(n, "y".repeat(usize::from(n) * 3), "body")
                    .key_term("Urate", "Ionised uric acid"),
            );
        }
        for (target, rel) in refs {
            draft = draft.cross_reference(*target, ContentType::Concept, *rel);
        }
        draft.build().expect("valid topic")
    }

    fn corpus(entries: Vec<Entry>) -> Corpus {
        let topics = DomainCollection::new("topics", entries).expect("topics");
        Corpus::builder()
            .with_collection(Arc::new(topics))
            .expect("single collection")
            .build()
    }

    #[test]
    fn clean_corpus_has_no_issues() {
        let c = corpus(vec![
            topic("gout", &[("uric-acid", Relationship::Related)]),
            topic("uric-acid", &[("gout", Relationship::Related)]),
        ]);
        let report = validate_corpus(&c, &ValidationPolicy::default());
        assert!(report.is_clean(), "{:?}", report.issues());
    }

    #[test]
    fn dangling_reference_is_a_warning_unless_strict() {
        let c = corpus(vec![topic("gout", &[("not-yet-written", Relationship::SeeAlso)])]);

        let lenient = validate_corpus(&c, &ValidationPolicy::default());
        assert_eq!(lenient.warning_count(), 1);
        assert_eq!(lenient.error_count(), 0);
        assert!(lenient.into_result().is_ok());

        let strict = ValidationPolicy {
            strict_references: true,
            ..ValidationPolicy::default()
        };
        let report = validate_corpus(&c, &strict);
        assert_eq!(report.error_count(), 1);
        assert!(matches!(
            report.into_result(),
            Err(CatalogError::ValidationFailed { errors: 1, warnings: 0 })
        ));
    }

    #[test]
    fn self_reference_is_reported() {
        let c = corpus(vec![topic("gout", &[("gout", Relationship::Related)])]);
        let report = validate_corpus(&c, &ValidationPolicy::default());
        assert!(matches!(
            report.issues(),
            [ValidationIssue { kind: IssueKind::SelfReference { .. }, .. }]
        ));
    }

    #[test]
    fn missing_translation_only_with_policy() {
        let untranslated = EntryDraft::new("gout", ContentType::Condition, "Gout")
            .timestamps("2026-01-30T00:00:00Z", "2026-01-30T00:00:00Z");
        let untranslated = (1..=5u8)
            .fold(untranslated, |d, n| {
                d.level(
                    LevelDraft::new(n, "z".repeat(usize::from(n)), "body")
                        .key_term("Urate", "Ionised uric acid"),
                )
            })
            .build()
            .expect("valid");
        let c = corpus(vec![untranslated]);

        assert!(validate_corpus(&c, &ValidationPolicy::default()).is_clean());

        let policy = ValidationPolicy {
            require_translations: true,
            ..ValidationPolicy::default()
        };
        let report = validate_corpus(&c, &policy);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(
            report.issues()[0].to_string(),
            "[warning] topics/gout: missing Spanish translation (nameEs)"
        );
    }

    #[test]
    fn missing_key_terms_and_placeholders_are_warnings() {
        let draft = EntryDraft::new("gout", ContentType::Condition, "Gout")
            .name_es("Gota")
            .timestamps("2026-01-30T00:00:00Z", "2026-01-30T00:00:00Z");
        let entry = (1..=5u8)
            .fold(draft, |d, n| {
                let summary = if n == 3 {
                    "FIXME expand".to_string()
                } else {
                    "w".repeat(usize::from(n) * 4)
                };
                let level = LevelDraft::new(n, summary, "body");
                d.level(if n == 1 {
                    level
                } else {
                    level.key_term("Urate", "Ionised uric acid")
                })
            })
            .build()
            .expect("quality problems do not block construction");
        let c = corpus(vec![entry]);

        let report = validate_corpus(&c, &ValidationPolicy::default());
        assert_eq!(report.error_count(), 0);
        let notes: Vec<_> = report
            .issues()
            .iter()
            .filter_map(|i| match &i.kind {
                IssueKind::Quality(note) => Some(note.clone()),
                _ => None,
            })
            .collect();
        assert!(notes.contains(&QualityNote::MissingKeyTerms {
            depth: crate::schema::Depth::Layperson
        }));
        assert!(notes.contains(&QualityNote::Placeholder {
            field: "levels.3.summary".into(),
            marker: "FIXME".into(),
        }));
    }

    #[test]
    fn policy_follows_config() {
        let policy = ValidationPolicy::from(&CatalogConfig::new(true, false));
        assert!(policy.strict_references);
        assert!(!policy.require_translations);
    }
}
