//! Content schema for five-level entries.
//!
//! Raw authoring data goes in as an [`EntryDraft`]; the only way out is a validated [`Entry`].

mod draft;
mod entry;
mod level;
mod metadata;

pub use draft::{
    CitationDraft, CrossReferenceDraft, EntryDraft, KeyTermDraft, LevelDraft, MediaDraft,
};
pub use entry::{Entry, Locale};
pub use level::{Depth, KeyTerm, Level, Levels};
pub use metadata::{
    Citation, CitationKind, ClinicalRelevance, ContentTags, ContentType, CrossReference,
    ExamRelevance, MediaAsset, MediaKind, Relationship, Status,
};
