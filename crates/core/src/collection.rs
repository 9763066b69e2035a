//! Domain collections and the generic query engine.
//!
//! A [`DomainCollection`] is an immutable, named map from id to record, built once through
//! [`DomainCollection::new`]. Every query is a pure read over the collection; results preserve
//! authoring order and "nothing found" is always an empty `Vec` or `None`.

use std::collections::HashMap;

use catalog_types::Slug;

use crate::error::{CatalogError, CatalogResult};
use crate::record::{fold_query, CatalogRecord, CategoryTag, QueryProfile};
use crate::schema::{Entry, Status};

/// A named, immutable set of records of one shape, queried through the record's
/// [`QueryProfile`].
pub struct DomainCollection<E: CatalogRecord> {
    name: Slug,
    entries: Vec<E>,
    positions: HashMap<String, usize>,
    profile: QueryProfile<E>,
}

impl<E: CatalogRecord> DomainCollection<E> {
    /// Builds a collection from records in authoring order.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `name` is not a slug.
    /// - `Schema` if a record fails [`CatalogRecord::validate`].
    /// - `DuplicateId` if two records share an id. Nothing is silently overwritten.
    pub fn new(name: &str, entries: Vec<E>) -> CatalogResult<Self> {
        let name = Slug::parse(name).map_err(|e| {
            CatalogError::InvalidInput(format!("collection name '{name}': {e}"))
        })?;

        let mut positions = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if positions.insert(entry.id().to_owned(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    collection: name.to_string(),
                    id: entry.id().to_owned(),
                });
            }
        }

        tracing::debug!(collection = %name, entries = entries.len(), "built domain collection");

        Ok(Self {
            name,
            entries,
            positions,
            profile: E::query_profile(),
        })
    }

    /// The collection name, e.g. `ophthalmology`. Always a valid slug.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The searchable fields and attribute field declared by `E`.
    pub fn profile(&self) -> &QueryProfile<E> {
        &self.profile
    }

    /// Exact id lookup.
    ///
    /// # Arguments
    ///
    /// * `id` - Entry id, compared byte for byte.
    ///
    /// # Returns
    ///
    /// The record with that id, or `None` if this collection does not hold it.
    pub fn get_by_id(&self, id: &str) -> Option<&E> {
        self.positions.get(id).map(|&i| &self.entries[i])
    }

    /// Case-insensitive substring search across the declared searchable fields.
    ///
    /// The query is lowercased but otherwise used as given, surrounding whitespace included. A
    /// blank query returns nothing rather than the whole collection.
    ///
    /// # Returns
    ///
    /// Matching records in authoring order; empty when nothing matches.
    pub fn search(&self, query: &str) -> Vec<&E> {
        let Some(needle) = fold_query(query) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| self.profile.matches_search(e, &needle))
            .collect()
    }

    /// Exact match against the collection's category tags. Unknown tags match nothing.
    pub fn filter_by_category(&self, category: &str) -> Vec<&E> {
        match E::Category::parse(category) {
            Some(c) => self.filter_by(c),
            None => Vec::new(),
        }
    }

    /// Records tagged with `category`, in authoring order.
    pub fn filter_by(&self, category: E::Category) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .collect()
    }

    /// Case-insensitive substring match against any element of the attribute list.
    ///
    /// Same query rules as [`DomainCollection::search`]; only the attribute field is read.
    pub fn filter_by_attribute(&self, value: &str) -> Vec<&E> {
        let Some(needle) = fold_query(value) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| self.profile.matches_attribute(e, &needle))
            .collect()
    }

    /// Number of records, equal to the number of distinct ids.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if a record with `id` exists here.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Records in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Record ids in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(CatalogRecord::id)
    }

    /// Entry count per category, in declaration order, zero counts included.
    pub fn category_counts(&self) -> Vec<(E::Category, usize)> {
        E::Category::ALL
            .iter()
            .map(|&c| (c, self.entries.iter().filter(|e| e.category() == c).count()))
            .collect()
    }

    /// Categories with at least one entry, in declaration order.
    pub fn available_categories(&self) -> Vec<E::Category> {
        self.category_counts()
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .map(|(c, _)| c)
            .collect()
    }
}

impl DomainCollection<Entry> {
    /// Entries in one lifecycle state. Other queries ignore status.
    pub fn filter_by_status(&self, status: Status) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.status() == status)
            .collect()
    }
}

impl<'a, E: CatalogRecord> IntoIterator for &'a DomainCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: CatalogRecord> std::fmt::Debug for DomainCollection<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainCollection")
            .field("name", &self.name)
            .field("count", &self.entries.len())
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SchemaViolation, ViolationKind};
    use crate::validation::RecordCheck;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Zone {
        Upper,
        Lower,
        Joint,
    }

    impl CategoryTag for Zone {
        const ALL: &'static [Self] = &[Zone::Upper, Zone::Lower, Zone::Joint];

        fn as_str(self) -> &'static str {
            match self {
                Zone::Upper => "upper",
                Zone::Lower => "lower",
                Zone::Joint => "joint",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Finding {
        id: String,
        name: String,
        zone: Zone,
        notes: Vec<String>,
        triggers: Vec<String>,
    }

    impl CatalogRecord for Finding {
        type Category = Zone;

        fn id(&self) -> &str {
            &self.id
        }

        fn category(&self) -> Zone {
            self.zone
        }

        fn query_profile() -> QueryProfile<Self> {
            QueryProfile::<Self>::new("triggers", |f| f.triggers.as_slice())
                .text("name", |f| f.name.as_str())
                .list("notes", |f| f.notes.as_slice())
        }

        fn validate(&self) -> Result<(), SchemaViolation> {
            RecordCheck::for_id(&self.id)?
                .text("name", &self.name)?
                .list("triggers", &self.triggers)?;
            Ok(())
        }
    }

    fn finding(id: &str, name: &str, zone: Zone, notes: &[&str], triggers: &[&str]) -> Finding {
        Finding {
            id: id.into(),
            name: name.into(),
            zone,
            notes: notes.iter().map(|s| s.to_string()).collect(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn collection() -> DomainCollection<Finding> {
        DomainCollection::new(
            "findings",
            vec![
                finding("podagra", "Podagra", Zone::Lower, &["Red hot toe"], &["Alcohol"]),
                finding("tophus", "Tophus", Zone::Upper, &["Chalky nodule"], &["Diuretics"]),
                finding("pseudogout", "Pseudogout", Zone::Joint, &["Knee swelling"], &["Surgery", "Alcohol binge"]),
            ],
        )
        .expect("fixture collection should build")
    }

    #[test]
    fn lookup_round_trips_every_entry() {
        let c = collection();
        for entry in &c {
            assert_eq!(c.get_by_id(entry.id()), Some(entry));
        }
        assert!(c.get_by_id("missing").is_none());
    }

    #[test]
    fn search_preserves_authoring_order_and_ors_list_elements() {
        let c = collection();
        let ids: Vec<_> = c.search("GOUT").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["pseudogout"]);

        let ids: Vec<_> = c.search("o").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["podagra", "tophus", "pseudogout"]);

        let ids: Vec<_> = c.search("swelling").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["pseudogout"]);
    }

    #[test]
    fn blank_search_returns_nothing() {
        let c = collection();
        assert!(c.search("").is_empty());
        assert!(c.search("   ").is_empty());
        assert!(c.filter_by_attribute("").is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_query() {
        let c = collection();
        assert_eq!(c.search("tophus").len(), 1);
        assert!(c.search("tophus ").is_empty());

        let ids: Vec<_> = c.search("chalky ").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["tophus"]);

        let ids: Vec<_> = c.filter_by_attribute("alcohol ").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["pseudogout"]);
    }

    #[test]
    fn narrower_query_never_adds_results() {
        let c = collection();
        let broad = c.search("to");
        for hit in c.search("toe") {
            assert!(broad.contains(&hit));
        }
    }

    #[test]
    fn category_filter_is_exact_and_total() {
        let c = collection();
        assert_eq!(c.filter_by_category("lower").len(), 1);
        assert!(c.filter_by_category("Lower").is_empty());
        assert!(c.filter_by_category("spine").is_empty());

        let total: usize = Zone::ALL.iter().map(|&z| c.filter_by(z).len()).sum();
        assert_eq!(total, c.count());
    }

    #[test]
    fn attribute_filter_matches_any_element() {
        let c = collection();
        let ids: Vec<_> = c.filter_by_attribute("alcohol").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["podagra", "pseudogout"]);
        assert!(c.filter_by_attribute("chalky").is_empty());
    }

    #[test]
    fn category_counts_include_zeros() {
        let c = DomainCollection::new(
            "findings",
            vec![finding("podagra", "Podagra", Zone::Lower, &[], &["Alcohol"])],
        )
        .expect("should build");
        assert_eq!(
            c.category_counts(),
            vec![(Zone::Upper, 0), (Zone::Lower, 1), (Zone::Joint, 0)]
        );
        assert_eq!(c.available_categories(), vec![Zone::Lower]);
    }

    #[test]
    fn duplicate_id_fails_the_build() {
        let err = DomainCollection::new(
            "findings",
            vec![
                finding("podagra", "Podagra", Zone::Lower, &[], &["Alcohol"]),
                finding("podagra", "Podagra again", Zone::Upper, &[], &["Alcohol"]),
            ],
        )
        .expect_err("duplicate id should fail");
        assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "podagra"));
    }

    #[test]
    fn invalid_record_is_rejected_with_schema_violation() {
        let err = DomainCollection::new(
            "findings",
            vec![finding("podagra", "Podagra", Zone::Lower, &[], &[])],
        )
        .expect_err("empty attribute list should fail");
        assert!(matches!(
            err,
            CatalogError::Schema(SchemaViolation { ref field, kind: ViolationKind::Empty, .. })
                if field == "triggers"
        ));
    }

    #[test]
    fn collection_name_must_be_a_slug() {
        let err = DomainCollection::<Finding>::new("My Findings", Vec::new())
            .expect_err("bad name");
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn count_matches_distinct_ids() {
        let c = collection();
        let distinct: std::collections::HashSet<_> = c.ids().collect();
        assert_eq!(c.count(), distinct.len());
    }
}
