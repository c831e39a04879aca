//! Directed entity relations and ordered relation sets.
//!
//! This module provides the diagram data model: [`Relation`], a directed edge
//! between two entity names, and [`RelationSet`], an insertion-ordered
//! collection with a structural deduplication invariant. Relation sets are
//! produced once per parse and consumed once by the orderer; they are never
//! mutated afterwards.

use std::fmt;

use crate::identifier::EntityName;

/// A directed edge between two entities, discovered in the source text.
///
/// Equality is structural: two relations are equal when both their `from` and
/// `to` names are equal. A relation is immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    from: EntityName,
    to: EntityName,
}

impl Relation {
    /// Creates a new relation from source entity to target entity.
    pub fn new(from: EntityName, to: EntityName) -> Self {
        Self { from, to }
    }

    /// Returns the source entity name.
    pub fn from(self) -> EntityName {
        self.from
    }

    /// Returns the target entity name.
    pub fn to(self) -> EntityName {
        self.to
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An insertion-ordered set of relations with no structural duplicates.
///
/// Insertion order reflects first-seen order in the source text. The
/// deduplication invariant holds at all times: no two stored relations share
/// the same `(from, to)` pair, and the first occurrence keeps its slot.
///
/// # Examples
///
/// ```
/// use crowfoot_core::{identifier::EntityName, relation::{Relation, RelationSet}};
///
/// let a_b = Relation::new(EntityName::new("A"), EntityName::new("B"));
/// let mut set = RelationSet::new();
/// assert!(set.insert(a_b));
/// assert!(!set.insert(a_b));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSet {
    relations: Vec<Relation>,
}

impl RelationSet {
    /// Creates an empty relation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a relation unless a structurally-equal one is already present.
    ///
    /// Returns `true` if the relation was added, `false` if it was a
    /// duplicate. Duplicates are dropped, never reordered.
    pub fn insert(&mut self, relation: Relation) -> bool {
        if self.relations.contains(&relation) {
            return false;
        }
        self.relations.push(relation);
        true
    }

    /// Returns the number of stored relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Returns `true` if the set holds no relations.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Iterates over the relations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Relation> + '_ {
        self.relations.iter().copied()
    }

    /// Returns the distinct entity names in discovery order.
    ///
    /// Discovery order is all `from` names in relation order, then all `to`
    /// names in relation order, keeping the first occurrence of each name.
    /// The orderer's tie-break rule depends on this exact order.
    pub fn entity_names(&self) -> Vec<EntityName> {
        let mut names = Vec::new();
        for relation in &self.relations {
            if !names.contains(&relation.from) {
                names.push(relation.from);
            }
        }
        for relation in &self.relations {
            if !names.contains(&relation.to) {
                names.push(relation.to);
            }
        }
        names
    }
}

impl IntoIterator for RelationSet {
    type Item = Relation;
    type IntoIter = std::vec::IntoIter<Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.into_iter()
    }
}

impl FromIterator<Relation> for RelationSet {
    /// Collects relations, applying first-occurrence-wins deduplication.
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        let mut set = Self::new();
        for relation in iter {
            set.insert(relation);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(from: &str, to: &str) -> Relation {
        Relation::new(EntityName::new(from), EntityName::new(to))
    }

    #[test]
    fn insert_deduplicates_first_occurrence_wins() {
        let mut set = RelationSet::new();
        assert!(set.insert(relation("A", "B")));
        assert!(set.insert(relation("B", "C")));
        assert!(!set.insert(relation("A", "B")));

        let stored: Vec<Relation> = set.iter().collect();
        assert_eq!(stored, vec![relation("A", "B"), relation("B", "C")]);
    }

    #[test]
    fn reversed_pair_is_a_distinct_relation() {
        let mut set = RelationSet::new();
        assert!(set.insert(relation("A", "B")));
        assert!(set.insert(relation("B", "A")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn entity_names_lists_froms_before_tos() {
        let set: RelationSet = [relation("A", "B"), relation("B", "C")]
            .into_iter()
            .collect();

        let names = set.entity_names();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "A");
        assert_eq!(names[1], "B");
        assert_eq!(names[2], "C");
    }

    #[test]
    fn empty_set_has_no_names() {
        assert!(RelationSet::new().entity_names().is_empty());
    }
}
