//! Directed graph of declared cross-references.
//!
//! Built by one pass over every loaded entry. Targets that resolve to no loaded entry are kept as
//! unresolved edges. Cycles and self-references are ordinary edges; nothing here traverses more
//! than one hop.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::schema::{CrossReference, Relationship};

/// One declared reference, as seen during the fold.
#[derive(Clone, Copy, Debug)]
pub struct Link<'a> {
    pub collection: &'a str,
    pub source: &'a str,
    pub reference: &'a CrossReference,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub collection: String,
    pub source: String,
    pub target: String,
    pub relationship: Relationship,
    pub resolved: bool,
}

/// One hop away from a queried id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Neighbor<'a> {
    pub id: &'a str,
    pub relationship: Relationship,
    pub resolved: bool,
}

#[derive(Debug, Default)]
pub struct CrossReferenceIndex {
    edges: Vec<Edge>,
    forward: HashMap<String, Vec<usize>>,
    reverse: HashMap<String, Vec<usize>>,
}

impl CrossReferenceIndex {
    /// Folds `links` into an index. `resolves` answers whether a target id is loaded anywhere.
    pub fn build<'a, I, F>(links: I, resolves: F) -> Self
    where
        I: IntoIterator<Item = Link<'a>>,
        F: Fn(&str) -> bool,
    {
        let mut index = Self::default();
        for link in links {
            let target = link.reference.target_id.as_str();
            let edge = Edge {
                collection: link.collection.to_owned(),
                source: link.source.to_owned(),
                target: target.to_owned(),
                relationship: link.reference.relationship,
                resolved: resolves(target),
            };
            let position = index.edges.len();
            index
                .forward
                .entry(edge.source.clone())
                .or_default()
                .push(position);
            index
                .reverse
                .entry(edge.target.clone())
                .or_default()
                .push(position);
            index.edges.push(edge);
        }

        tracing::debug!(
            edges = index.edges.len(),
            dangling = index.dangling().count(),
            "built cross-reference index"
        );
        index
    }

    /// Declared targets of `id`, in declaration order, optionally restricted to one relationship.
    ///
    /// An id with no outgoing references, or one that is not loaded at all, yields an empty list.
    pub fn neighbors(&self, id: &str, relationship: Option<Relationship>) -> Vec<Neighbor<'_>> {
        self.forward
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.edges[i])
            .filter(|e| relationship.is_none_or(|r| e.relationship == r))
            .map(|e| Neighbor {
                id: e.target.as_str(),
                relationship: e.relationship,
                resolved: e.resolved,
            })
            .collect()
    }

    /// Ids of entries that declare `id` as a target, each listed once.
    pub fn reverse_neighbors(&self, id: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.reverse
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| self.edges[i].source.as_str())
            .filter(|source| seen.insert(*source))
            .collect()
    }

    pub fn dangling(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| !e.resolved)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
