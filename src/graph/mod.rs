//! `DiGraph` — a directed-graph container addressed by stable indices.
//!
//! Every node carries an ordered outgoing arc list and an unordered incoming
//! back-reference list; the facade keeps the two mirrored across all
//! mutation. Nodes live in an insertion-ordered store whose indices are
//! never reused, so a handle stays valid for the container's lifetime and
//! addressing a removed node is an error, not a surprise.
//!
//! # Performance
//! - `add_node`: O(1)
//! - `remove_node`: O(arcs touching the node)
//! - `add_arc`: O(1) (append to both lists)
//! - `remove_arc`: O(degree) (scan, order-preserving splice)
//! - `get` / `contains`: O(1)

mod display;
mod node;

pub(crate) use node::{ArcEntry, NodeRecord};

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::store::NodeStore;
use crate::traverse;

/// Arc weight. Weights ride along on every arc and disambiguate parallel
/// arcs during removal; the shortest-path solver ignores them.
pub type Weight = i64;

/// Weight assigned by [`DiGraph::add_arc`] when none is given.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A mutable directed graph with stable integer node indices.
///
/// Indices are assigned once, in increasing order from 0, and never reused:
/// removing a node tombstones its slot. All operations addressing a
/// tombstoned or out-of-range index report [`GraphError::NodeNotFound`].
///
/// The container is single-threaded; exclusivity of mutation is carried by
/// `&mut self`.
pub struct DiGraph<T> {
    store: NodeStore<T>,
}

impl<T> DiGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            store: NodeStore::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: NodeStore::with_capacity(capacity),
        }
    }

    /// Adds a node and returns its permanent index.
    ///
    /// Indices start at 0 and increase by one per added node, independent of
    /// any removals in between.
    pub fn add_node(&mut self, payload: T) -> usize {
        let index = self.store.add(NodeRecord::new(payload));
        trace!(index, "added node");
        index
    }

    /// Removes a node together with every arc touching it, in either
    /// direction, and returns its payload.
    ///
    /// The incoming side is severed first: each back-reference names a
    /// source whose outgoing list loses the mirrored arc. Then each
    /// remaining outgoing arc loses its mirror in the target's incoming
    /// list. Arcs the node sent to itself die with the record and need no
    /// fixup. Cost is proportional to the number of arcs touching the node.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is out of range or already
    /// removed.
    ///
    /// # Panics
    /// Panics if a mirrored entry is missing on either side; that is
    /// structural corruption, not caller misuse.
    pub fn remove_node(&mut self, index: usize) -> Result<T, GraphError> {
        let record = self
            .store
            .erase(index)
            .ok_or(GraphError::NodeNotFound(index))?;

        let mut severed_in = 0_usize;
        for back in &record.incoming {
            if back.node == index {
                continue;
            }
            let source = self.store.get_mut(back.node).unwrap_or_else(|| {
                panic!(
                    "mirror invariant violated: incoming arc names dead node {}",
                    back.node
                )
            });
            if source.remove_outgoing(index, Some(back.weight)).is_none() {
                panic!(
                    "mirror invariant violated: node {} has no arc to {} with weight {}",
                    back.node, index, back.weight
                );
            }
            severed_in += 1;
        }

        let mut severed_out = 0_usize;
        for arc in &record.outgoing {
            if arc.node == index {
                continue;
            }
            let target = self.store.get_mut(arc.node).unwrap_or_else(|| {
                panic!(
                    "mirror invariant violated: outgoing arc names dead node {}",
                    arc.node
                )
            });
            if !target.remove_incoming(index, arc.weight) {
                panic!(
                    "mirror invariant violated: node {} has no back-reference to {} with weight {}",
                    arc.node, index, arc.weight
                );
            }
            severed_out += 1;
        }

        debug!(index, severed_in, severed_out, "removed node");
        Ok(record.payload)
    }

    /// Adds an arc from `src` to `dst` with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is invalid.
    pub fn add_arc(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.add_arc_weighted(src, dst, DEFAULT_WEIGHT)
    }

    /// Adds an arc from `src` to `dst` with the given weight.
    ///
    /// The arc is appended at the tail of `src`'s outgoing list and a
    /// mirrored back-reference at the tail of `dst`'s incoming list.
    /// Self-loops and parallel arcs are allowed.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is invalid.
    pub fn add_arc_weighted(
        &mut self,
        src: usize,
        dst: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        if src == dst {
            let record = self
                .store
                .get_mut(src)
                .ok_or(GraphError::NodeNotFound(src))?;
            record.push_outgoing(dst, weight);
            record.push_incoming(src, weight);
        } else {
            if !self.store.is_live(src) {
                return Err(GraphError::NodeNotFound(src));
            }
            if !self.store.is_live(dst) {
                return Err(GraphError::NodeNotFound(dst));
            }
            let Some((source, target)) = self.store.pair_mut(src, dst) else {
                unreachable!("endpoints validated above")
            };
            source.push_outgoing(dst, weight);
            target.push_incoming(src, weight);
        }
        trace!(src, dst, weight, "added arc");
        Ok(())
    }

    /// Removes the first arc from `src` to `dst`, whatever its weight, and
    /// returns the weight it carried.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is invalid;
    /// [`GraphError::ArcNotFound`] if `src` has no arc to `dst`.
    ///
    /// # Panics
    /// Panics if the outgoing half is found but its mirror is missing.
    pub fn remove_arc(&mut self, src: usize, dst: usize) -> Result<Weight, GraphError> {
        self.remove_arc_matching(src, dst, None)
    }

    /// Removes the first arc from `src` to `dst` carrying exactly `weight`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is invalid;
    /// [`GraphError::ArcNotFound`] if no arc with that weight exists.
    ///
    /// # Panics
    /// Panics if the outgoing half is found but its mirror is missing.
    pub fn remove_arc_weighted(
        &mut self,
        src: usize,
        dst: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.remove_arc_matching(src, dst, Some(weight)).map(|_| ())
    }

    fn remove_arc_matching(
        &mut self,
        src: usize,
        dst: usize,
        weight: Option<Weight>,
    ) -> Result<Weight, GraphError> {
        let not_found = GraphError::ArcNotFound {
            from: src,
            to: dst,
            weight,
        };
        let removed = if src == dst {
            let record = self
                .store
                .get_mut(src)
                .ok_or(GraphError::NodeNotFound(src))?;
            let removed = record.remove_outgoing(dst, weight).ok_or(not_found)?;
            if !record.remove_incoming(src, removed) {
                panic!("mirror invariant violated: self-loop on {src} has no back-reference");
            }
            removed
        } else {
            if !self.store.is_live(src) {
                return Err(GraphError::NodeNotFound(src));
            }
            if !self.store.is_live(dst) {
                return Err(GraphError::NodeNotFound(dst));
            }
            let Some((source, target)) = self.store.pair_mut(src, dst) else {
                unreachable!("endpoints validated above")
            };
            let removed = source.remove_outgoing(dst, weight).ok_or(not_found)?;
            if !target.remove_incoming(src, removed) {
                panic!(
                    "mirror invariant violated: node {dst} has no back-reference to {src} with weight {removed}"
                );
            }
            removed
        };
        trace!(src, dst, weight = removed, "removed arc");
        Ok(removed)
    }

    /// Severs every arc pointing at `index` and returns how many were
    /// removed. The node itself and its outgoing arcs to other nodes are
    /// untouched.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    ///
    /// # Panics
    /// Panics if a back-reference has no matching outgoing half.
    pub fn remove_incoming_arcs(&mut self, index: usize) -> Result<usize, GraphError> {
        let record = self
            .store
            .get_mut(index)
            .ok_or(GraphError::NodeNotFound(index))?;
        let incoming = core::mem::take(&mut record.incoming);
        let severed = incoming.len();

        for back in incoming {
            // A self-loop's outgoing half lives on this same record.
            let source = self.store.get_mut(back.node).unwrap_or_else(|| {
                panic!(
                    "mirror invariant violated: incoming arc names dead node {}",
                    back.node
                )
            });
            if source.remove_outgoing(index, Some(back.weight)).is_none() {
                panic!(
                    "mirror invariant violated: node {} has no arc to {} with weight {}",
                    back.node, index, back.weight
                );
            }
        }

        debug!(index, severed, "removed incoming arcs");
        Ok(severed)
    }

    /// Returns a reference to the node's payload.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn get(&self, index: usize) -> Result<&T, GraphError> {
        self.store
            .get(index)
            .map(|record| &record.payload)
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Returns a mutable reference to the node's payload.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, GraphError> {
        self.store
            .get_mut(index)
            .map(|record| &mut record.payload)
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Whether `index` names a live node.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.store.is_live(index)
    }

    /// Number of live nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Total number of arcs in the graph.
    pub fn arc_count(&self) -> usize {
        self.store
            .iter_live()
            .map(|(_, record)| record.outgoing.len())
            .sum()
    }

    /// Number of arcs this node sends.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn out_degree(&self, index: usize) -> Result<usize, GraphError> {
        self.store
            .get(index)
            .map(|record| record.outgoing.len())
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Number of arcs this node receives.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn in_degree(&self, index: usize) -> Result<usize, GraphError> {
        self.store
            .get(index)
            .map(|record| record.incoming.len())
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Iterates the node's outgoing arcs as `(target, weight)` pairs, in arc
    /// order (an arc's 1-based ordinal is its position here).
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn arcs_out(
        &self,
        index: usize,
    ) -> Result<impl Iterator<Item = (usize, Weight)> + '_, GraphError> {
        self.store
            .get(index)
            .map(|record| record.outgoing.iter().map(|arc| (arc.node, arc.weight)))
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Iterates the node's incoming arcs as `(source, weight)` pairs. The
    /// incoming list carries no ordering guarantee.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `index` is invalid.
    pub fn arcs_in(
        &self,
        index: usize,
    ) -> Result<impl Iterator<Item = (usize, Weight)> + '_, GraphError> {
        self.store
            .get(index)
            .map(|record| record.incoming.iter().map(|arc| (arc.node, arc.weight)))
            .ok_or(GraphError::NodeNotFound(index))
    }

    /// Iterates live nodes as `(index, &payload)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.store.iter_live().map(|(i, record)| (i, &record.payload))
    }

    /// Finds a shortest path from `start` to `end` by hop count, ignoring
    /// arc weights. The result runs from `start` to `end` inclusive; when
    /// several shortest paths exist, which one is returned is unspecified.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if either endpoint is invalid;
    /// [`GraphError::Unreachable`] if no directed path exists.
    pub fn shortest_path(&self, start: usize, end: usize) -> Result<Vec<usize>, GraphError> {
        traverse::shortest_path(self, start, end)
    }

    /// Internal record access for the solver and the dump.
    pub(crate) fn record(&self, index: usize) -> Option<&NodeRecord<T>> {
        self.store.get(index)
    }

    /// One past the highest index ever allocated.
    pub(crate) fn index_bound(&self) -> usize {
        self.store.slot_count()
    }
}

impl<T> Default for DiGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}
