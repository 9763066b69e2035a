//! # Catalog Core
//!
//! Content model and query engine for the medical education catalog.
//!
//! This crate contains pure, in-memory data operations:
//! - The five-level content schema and its validating factory ([`EntryDraft`] → [`Entry`])
//! - A generic query engine over named domain collections ([`DomainCollection`])
//! - The [`Corpus`] composition step and its lazily built [`CrossReferenceIndex`]
//! - A whole-corpus validation pass ([`validate_corpus`])
//!
//! **No content**: the collections themselves live in `catalog-content`. **No I/O**: nothing here
//! reads files or the network, and configuration is handed in by the caller.

pub mod collection;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod cross_reference;
pub mod error;
pub mod record;
pub mod report;
pub mod schema;
pub mod validation;

pub use catalog_types::{NonEmptyText, Slug, SlugError, TextError};
pub use collection::DomainCollection;
pub use config::{flag_from_env_value, CatalogConfig};
pub use corpus::{CollectionView, Corpus, CorpusBuilder, IdCollision};
pub use cross_reference::{CrossReferenceIndex, Edge, Link, Neighbor};
pub use error::{CatalogError, CatalogResult, SchemaViolation, ViolationKind, UNKNOWN_ENTRY_ID};
pub use record::{CatalogRecord, CategoryTag, PlaceholderScan, QualityNote, QueryProfile};
pub use report::{
    validate_corpus, IssueKind, Severity, ValidationIssue, ValidationPolicy, ValidationReport,
};
pub use schema::{
    Citation, CitationDraft, CitationKind, ClinicalRelevance, ContentTags, ContentType,
    CrossReference, CrossReferenceDraft, Depth, Entry, EntryDraft, ExamRelevance, KeyTerm,
    KeyTermDraft, Level, LevelDraft, Levels, Locale, MediaAsset, MediaDraft, MediaKind,
    Relationship, Status,
};
pub use validation::{find_placeholder, parse_entry_id, RecordCheck};
