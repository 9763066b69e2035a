//! The composition of every loaded domain collection.
//!
//! A [`Corpus`] is assembled once, after all collections are built, and handed to anything that
//! needs to see across collections. It never changes after [`CorpusBuilder::build`].

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::collection::DomainCollection;
use crate::cross_reference::{CrossReferenceIndex, Link, Neighbor};
use crate::error::{CatalogError, CatalogResult};
use crate::record::{CatalogRecord, QualityNote};
use crate::schema::{CrossReference, Relationship};

/// Shape-independent view of one collection.
///
/// Lets the corpus hold collections of different record types side by side. Implemented for
/// every [`DomainCollection`].
pub trait CollectionView: Send + Sync {
    fn name(&self) -> &str;

    fn entry_count(&self) -> usize;

    fn contains_id(&self, id: &str) -> bool;

    /// Ids in authoring order.
    fn entry_ids(&self) -> Vec<&str>;

    /// `(source id, reference)` for every declared cross-reference, in authoring order.
    fn outgoing_links(&self) -> Vec<(&str, &CrossReference)>;

    /// `(entry id, note)` for every content-quality observation, in authoring order.
    fn quality_notes(&self) -> Vec<(&str, QualityNote)>;
}

impl<E> CollectionView for DomainCollection<E>
where
    E: CatalogRecord + Send + Sync,
{
    fn name(&self) -> &str {
        DomainCollection::name(self)
    }

    fn entry_count(&self) -> usize {
        self.count()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn entry_ids(&self) -> Vec<&str> {
        self.ids().collect()
    }

    fn outgoing_links(&self) -> Vec<(&str, &CrossReference)> {
        self.iter()
            .flat_map(|e| e.cross_references().iter().map(move |r| (e.id(), r)))
            .collect()
    }

    fn quality_notes(&self) -> Vec<(&str, QualityNote)> {
        self.iter()
            .flat_map(|e| {
                CatalogRecord::quality_notes(e)
                    .into_iter()
                    .map(move |n| (e.id(), n))
            })
            .collect()
    }
}

/// An id held by more than one collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdCollision {
    pub id: String,
    pub collections: Vec<String>,
}

/// Collects collections for a [`Corpus`]. Obtained from [`Corpus::builder`].
#[derive(Default)]
pub struct CorpusBuilder {
    collections: Vec<Arc<dyn CollectionView>>,
}

impl CorpusBuilder {
    /// Adds a collection.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCollection` if a collection with the same name was already added.
    pub fn with_collection<C>(mut self, collection: Arc<C>) -> CatalogResult<Self>
    where
        C: CollectionView + 'static,
    {
        if self.collections.iter().any(|c| c.name() == collection.name()) {
            return Err(CatalogError::DuplicateCollection(
                collection.name().to_owned(),
            ));
        }
        self.collections.push(collection);
        Ok(self)
    }

    /// Freezes the collections into a corpus. The cross-reference index is not built yet.
    pub fn build(self) -> Corpus {
        Corpus {
            collections: self.collections,
            index: OnceLock::new(),
        }
    }
}

/// Every loaded collection, in the order they were added.
pub struct Corpus {
    collections: Vec<Arc<dyn CollectionView>>,
    index: OnceLock<CrossReferenceIndex>,
}

impl Corpus {
    /// Starts an empty [`CorpusBuilder`].
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    /// Collections in the order they were added.
    pub fn collections(&self) -> impl Iterator<Item = &dyn CollectionView> + '_ {
        self.collections.iter().map(|c| &**c)
    }

    /// Looks up a collection by name.
    ///
    /// # Returns
    ///
    /// The collection, or `None` if no collection with that name was added.
    pub fn collection(&self, name: &str) -> Option<&dyn CollectionView> {
        self.collections().find(|c| c.name() == name)
    }

    /// True if any collection holds `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.collections.iter().any(|c| c.contains_id(id))
    }

    /// Names of the collections holding `id`; more than one means an id collision.
    pub fn locate(&self, id: &str) -> Vec<&str> {
        self.collections()
            .filter(|c| c.contains_id(id))
            .map(|c| c.name())
            .collect()
    }

    /// Ids present in more than one collection, sorted by id.
    pub fn id_collisions(&self) -> Vec<IdCollision> {
        let mut owners: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for collection in self.collections() {
            for id in collection.entry_ids() {
                owners.entry(id).or_default().push(collection.name());
            }
        }

        owners
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(id, names)| IdCollision {
                id: id.to_owned(),
                collections: names.into_iter().map(str::to_owned).collect(),
            })
            .collect()
    }

    /// Sum of the entry counts of every collection. Colliding ids are counted once per
    /// collection.
    pub fn total_count(&self) -> usize {
        self.collections.iter().map(|c| c.entry_count()).sum()
    }

    /// The cross-reference index, built on first use and cached for the corpus lifetime.
    pub fn cross_references(&self) -> &CrossReferenceIndex {
        self.index.get_or_init(|| {
            let links: Vec<(&str, Vec<(&str, &CrossReference)>)> = self
                .collections()
                .map(|c| (c.name(), c.outgoing_links()))
                .collect();

            CrossReferenceIndex::build(
                links.iter().flat_map(|(collection, declared)| {
                    declared.iter().map(move |&(source, reference)| Link {
                        collection,
                        source,
                        reference,
                    })
                }),
                |target| self.contains(target),
            )
        })
    }

    /// One-hop neighbors of `id` through the cached index.
    pub fn neighbors(&self, id: &str, relationship: Option<Relationship>) -> Vec<Neighbor<'_>> {
        self.cross_references().neighbors(id, relationship)
    }

    /// Ids of the entries that reference `id`, each once. `id` itself need not be loaded.
    pub fn reverse_neighbors(&self, id: &str) -> Vec<&str> {
        self.cross_references().reverse_neighbors(id)
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field(
                "collections",
                &self.collections().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("index_built", &self.index.get().is_some())
            .finish()
    }
}
