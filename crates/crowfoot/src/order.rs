//! Draw-order computation for relation sets.
//!
//! The orderer decides the sequence in which relations should be handed to
//! the drawing collaborator so a diagram can grow incrementally without
//! moving nodes placed earlier. At each step it peels off every relation
//! whose source is the currently least-referenced entity, building the
//! diagram outward from the node other nodes point at least.

use indexmap::IndexMap;
use log::{debug, trace};

use crowfoot_core::{
    identifier::EntityName,
    relation::{Relation, RelationSet},
};

/// Produces the draw order for a relation set.
///
/// The result is a permutation of the input: relations sharing the currently
/// least-referenced source entity are emitted contiguously, groups ordered
/// from least-referenced to most-referenced as reference counts shrink after
/// each peel. Within a group the input's relative order is preserved. An
/// empty input yields an empty output.
///
/// Ties on the reference count resolve to the entity discovered first, where
/// discovery order is all source names in relation order followed by all
/// target names in relation order.
pub fn draw_order(relations: RelationSet) -> Vec<Relation> {
    let mut remaining: Vec<Relation> = relations.into_iter().collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    while let Some(next) = least_referenced(&remaining) {
        trace!(entity:% = next, remaining = remaining.len(); "Peeling least-referenced entity");

        let (peeled, rest): (Vec<Relation>, Vec<Relation>) = remaining
            .into_iter()
            .partition(|relation| relation.from() == next);

        if peeled.is_empty() {
            // A cyclic remainder can put the minimum on an entity with no
            // outgoing relations. Flush what is left so the function stays
            // total; acyclic inputs never reach this branch.
            debug!(flushed = rest.len(); "Remainder is cyclic around a sink, emitting as-is");
            ordered.extend(rest);
            return ordered;
        }

        ordered.extend(peeled);
        remaining = rest;
    }

    ordered
}

/// Finds the entity with the fewest incoming references among `relations`.
///
/// Reference count is the number of relations naming the entity as their
/// target. Entities that never appear as a target count zero. Returns `None`
/// only for an empty slice.
fn least_referenced(relations: &[Relation]) -> Option<EntityName> {
    let mut counts: IndexMap<EntityName, usize> = IndexMap::new();
    for relation in relations {
        counts.entry(relation.from()).or_insert(0);
    }
    for relation in relations {
        *counts.entry(relation.to()).or_insert(0) += 1;
    }

    // min_by_key keeps the earliest entry on ties, which is the
    // first-discovered name thanks to IndexMap's insertion order.
    counts
        .iter()
        .min_by_key(|(_, count)| **count)
        .map(|(name, _)| *name)
}
