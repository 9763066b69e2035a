//! The five-tier level ladder of an entry.

use catalog_types::NonEmptyText;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Depth tier, from layperson (1) to expert (5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    Layperson = 1,
    Foundational = 2,
    Intermediate = 3,
    Advanced = 4,
    Expert = 5,
}

impl Depth {
    pub const ALL: [Depth; 5] = [
        Depth::Layperson,
        Depth::Foundational,
        Depth::Intermediate,
        Depth::Advanced,
        Depth::Expert,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Depth> {
        Depth::ALL.into_iter().find(|d| d.number() == n)
    }

    /// The next shallower tier, if any.
    pub fn shallower(self) -> Option<Depth> {
        Depth::from_number(self.number().checked_sub(1)?)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Depth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    pub term: NonEmptyText,
    pub definition: NonEmptyText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<NonEmptyText>,
}

/// One depth tier of one entry.
///
/// Optional sequences are `None` when absent and never `Some` of an empty vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub(crate) level: Depth,
    pub(crate) summary: NonEmptyText,
    pub(crate) explanation: NonEmptyText,
    pub(crate) key_terms: Vec<KeyTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) analogies: Option<Vec<NonEmptyText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<Vec<NonEmptyText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) patient_counseling_points: Option<Vec<NonEmptyText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) clinical_notes: Option<Vec<NonEmptyText>>,
}

impl Level {
    pub fn depth(&self) -> Depth {
        self.level
    }

    pub fn summary(&self) -> &NonEmptyText {
        &self.summary
    }

    pub fn explanation(&self) -> &NonEmptyText {
        &self.explanation
    }

    pub fn key_terms(&self) -> &[KeyTerm] {
        &self.key_terms
    }

    pub fn analogies(&self) -> Option<&[NonEmptyText]> {
        self.analogies.as_deref()
    }

    pub fn examples(&self) -> Option<&[NonEmptyText]> {
        self.examples.as_deref()
    }

    pub fn patient_counseling_points(&self) -> Option<&[NonEmptyText]> {
        self.patient_counseling_points.as_deref()
    }

    pub fn clinical_notes(&self) -> Option<&[NonEmptyText]> {
        self.clinical_notes.as_deref()
    }
}

/// Exactly five levels, indexed by [`Depth`]. A partial ladder cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Levels([Level; 5]);

impl Levels {
    /// Callers guarantee `levels[i].depth() == Depth::ALL[i]`.
    pub(crate) fn from_ordered(levels: [Level; 5]) -> Self {
        debug_assert!(levels
            .iter()
            .zip(Depth::ALL)
            .all(|(level, depth)| level.depth() == depth));
        Self(levels)
    }

    pub fn get(&self, depth: Depth) -> &Level {
        &self.0[usize::from(depth.number() - 1)]
    }

    /// Levels in ascending depth.
    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Levels {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Levels {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for level in &self.0 {
            map.serialize_entry(&level.depth().number(), level)?;
        }
        map.end()
    }
}
