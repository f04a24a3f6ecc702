//! Node and arc records.
//!
//! A node owns two arc lists. `outgoing` is ordered: an arc's 1-based
//! ordinal is its position in the list, so removal must preserve the order
//! of everything behind it. `incoming` is an unordered index of
//! back-references kept only to make removals and path reconstruction cheap;
//! its slots may be backfilled freely.

use crate::graph::Weight;

/// One directed arc. In an outgoing list `node` is the target; in an
/// incoming list it is the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArcEntry {
    pub(crate) node: usize,
    pub(crate) weight: Weight,
}

/// Payload plus the two mirrored arc lists.
pub(crate) struct NodeRecord<T> {
    pub(crate) payload: T,
    pub(crate) outgoing: Vec<ArcEntry>,
    pub(crate) incoming: Vec<ArcEntry>,
}

impl<T> NodeRecord<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self {
            payload,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Appends an arc at the tail of the outgoing list.
    pub(crate) fn push_outgoing(&mut self, target: usize, weight: Weight) {
        self.outgoing.push(ArcEntry {
            node: target,
            weight,
        });
    }

    /// Appends a back-reference at the tail of the incoming list.
    pub(crate) fn push_incoming(&mut self, source: usize, weight: Weight) {
        self.incoming.push(ArcEntry {
            node: source,
            weight,
        });
    }

    /// Removes the first outgoing arc matching `target` (and `weight`, when
    /// one is given) and returns its weight. Later arcs keep their relative
    /// order, so ordinals stay dense.
    pub(crate) fn remove_outgoing(
        &mut self,
        target: usize,
        weight: Option<Weight>,
    ) -> Option<Weight> {
        let pos = self
            .outgoing
            .iter()
            .position(|arc| arc.node == target && weight.map_or(true, |w| arc.weight == w))?;
        Some(self.outgoing.remove(pos).weight)
    }

    /// Removes the first incoming back-reference matching `source` and
    /// `weight`. Returns `false` when no entry matches.
    pub(crate) fn remove_incoming(&mut self, source: usize, weight: Weight) -> bool {
        match self
            .incoming
            .iter()
            .position(|arc| arc.node == source && arc.weight == weight)
        {
            Some(pos) => {
                self.incoming.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}
