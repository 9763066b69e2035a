//! # Catalog Content
//!
//! The seeded domain collections, authored as in-memory literals, and the single composition
//! step that assembles them into a [`Corpus`].
//!
//! - `ophthalmology`: common eye conditions
//! - `musculoskeletal-gout`: gout and related crystal and urate disorders
//! - `infectious-viral`: viral infections
//! - `topics`: five-level entries that link the collections together

pub mod gout;
pub mod ophthalmology;
pub mod topics;
pub mod viral;

use std::sync::Arc;

use catalog_core::{CatalogResult, Corpus, DomainCollection, Entry};

use gout::GoutCondition;
use ophthalmology::OphthalmicCondition;
use viral::ViralInfection;

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Every loaded collection, typed, plus the corpus built from them.
#[derive(Debug)]
pub struct Catalog {
    ophthalmology: Arc<DomainCollection<OphthalmicCondition>>,
    gout: Arc<DomainCollection<GoutCondition>>,
    viral: Arc<DomainCollection<ViralInfection>>,
    topics: Arc<DomainCollection<Entry>>,
    corpus: Corpus,
}

impl Catalog {
    /// Builds every collection and composes the corpus.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed entry, duplicate id within a collection or duplicate
    /// collection name. A partially loaded catalog is never returned.
    pub fn load() -> CatalogResult<Self> {
        let ophthalmology = Arc::new(ophthalmology::collection()?);
        let gout = Arc::new(gout::collection()?);
        let viral = Arc::new(viral::collection()?);
        let topics = Arc::new(topics::collection()?);

        let corpus = Corpus::builder()
            .with_collection(Arc::clone(&ophthalmology))?
            .with_collection(Arc::clone(&gout))?
            .with_collection(Arc::clone(&viral))?
            .with_collection(Arc::clone(&topics))?
            .build();

        tracing::debug!(
            collections = corpus.collections().count(),
            entries = corpus.total_count(),
            "loaded catalog"
        );

        Ok(Self {
            ophthalmology,
            gout,
            viral,
            topics,
            corpus,
        })
    }

    pub fn ophthalmology(&self) -> &DomainCollection<OphthalmicCondition> {
        &self.ophthalmology
    }

    pub fn gout(&self) -> &DomainCollection<GoutCondition> {
        &self.gout
    }

    pub fn viral(&self) -> &DomainCollection<ViralInfection> {
        &self.viral
    }

    pub fn topics(&self) -> &DomainCollection<Entry> {
        &self.topics
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fmt::Debug;

    use catalog_core::{
        validate_corpus, CatalogRecord, ContentType, Depth, EntryDraft, IssueKind, LevelDraft,
        Relationship, ValidationPolicy, ViolationKind,
    };

    fn assert_lookup_and_count<E>(collection: &DomainCollection<E>)
    where
        E: CatalogRecord + PartialEq + Debug,
    {
        for entry in collection {
            assert_eq!(collection.get_by_id(entry.id()), Some(entry), "{}", entry.id());
        }
        let distinct: HashSet<_> = collection.ids().collect();
        assert_eq!(collection.count(), distinct.len(), "{}", collection.name());
    }

    #[test]
    fn catalog_loads_every_collection() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        let names: Vec<_> = catalog.corpus().collections().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                ophthalmology::COLLECTION,
                gout::COLLECTION,
                viral::COLLECTION,
                topics::COLLECTION
            ]
        );
        assert_eq!(
            catalog.corpus().total_count(),
            catalog.ophthalmology().count()
                + catalog.gout().count()
                + catalog.viral().count()
                + catalog.topics().count()
        );
    }

    #[test]
    fn every_seeded_entry_round_trips_through_lookup() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        assert_lookup_and_count(catalog.ophthalmology());
        assert_lookup_and_count(catalog.gout());
        assert_lookup_and_count(catalog.viral());
        assert_lookup_and_count(catalog.topics());
    }

    #[test]
    fn ids_are_unique_across_collections() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        assert!(catalog.corpus().id_collisions().is_empty());
    }

    #[test]
    fn topic_references_resolve_across_collections() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        let children = catalog
            .corpus()
            .neighbors("eye-anatomy", Some(Relationship::Child));
        assert_eq!(children.len(), 4);
        assert!(children.iter().all(|n| n.resolved));
        assert_eq!(catalog.corpus().locate("cataracts"), vec![ophthalmology::COLLECTION]);
    }

    #[test]
    fn unwritten_targets_stay_unresolved() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        let see_also = catalog
            .corpus()
            .neighbors("gout", Some(Relationship::SeeAlso));
        let diet = see_also
            .iter()
            .find(|n| n.id == "purine-rich-diet")
            .expect("declared reference");
        assert!(!diet.resolved);
        assert!(catalog.corpus().cross_references().dangling().count() >= 2);
    }

    #[test]
    fn gout_and_uric_acid_reference_each_other() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        let corpus = catalog.corpus();
        assert!(corpus.reverse_neighbors("gout").contains(&"uric-acid-metabolism"));
        assert!(corpus.reverse_neighbors("uric-acid-metabolism").contains(&"gout"));
    }

    #[test]
    fn seeded_corpus_has_only_dangling_reference_warnings() {
        let catalog = Catalog::load().expect("seeded catalog should load");
        let report = validate_corpus(catalog.corpus(), &ValidationPolicy::default());
        assert_eq!(report.error_count(), 0);
        assert!(report
            .issues()
            .iter()
            .all(|i| matches!(i.kind, IssueKind::DanglingReference { .. })));

        let strict = ValidationPolicy {
            strict_references: true,
            ..ValidationPolicy::default()
        };
        assert!(validate_corpus(catalog.corpus(), &strict).into_result().is_err());
    }

    #[test]
    fn entry_missing_level_three_is_rejected() {
        let draft = [1u8, 2, 4, 5].into_iter().fold(
            EntryDraft::new("cataracts-overview", ContentType::Condition, "Cataracts")
                .timestamps("2026-01-30T00:00:00Z", "2026-01-30T00:00:00Z"),
            |d, n| d.level(LevelDraft::new(n, format!("summary {n}"), "body")),
        );
        let err = draft.build().expect_err("partial ladder must be rejected");
        assert_eq!(err.entry_id, "cataracts-overview");
        assert_eq!(err.field, format!("levels.{}", Depth::Intermediate));
        assert_eq!(err.kind, ViolationKind::Missing);
    }
}
