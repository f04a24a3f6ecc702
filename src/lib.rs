//! # `digraph` — a directed-graph container with stable indices
//!
//! A mutable directed graph addressed by permanent integer indices. Each
//! node keeps an ordered list of its outgoing arcs and an unordered list of
//! incoming back-references; the two lists are kept mirrored through every
//! insertion and removal, which makes deleting a node cost O(arcs touching
//! it) instead of a whole-graph sweep.
//!
//! ## Guarantees
//!
//! - **Stable indices**: [`DiGraph::add_node`] hands out indices starting at
//!   0, monotonically increasing, never reused. Removing a node leaves a
//!   tombstone; addressing it later reports [`GraphError::NodeNotFound`]
//!   rather than silently doing nothing.
//! - **Mirrored arc lists**: every outgoing arc has exactly one
//!   back-reference on the target, created and destroyed together. A
//!   mismatch between the two sides is structural corruption and panics
//!   rather than being absorbed.
//! - **Hop-count shortest paths**: [`DiGraph::shortest_path`] runs an
//!   unweighted breadth-first search and reconstructs one concrete shortest
//!   path through the incoming lists.
//!
//! ## Example
//!
//! ```rust
//! use digraph::DiGraph;
//!
//! let mut graph = DiGraph::new();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_arc(a, b)?;
//! graph.add_arc(b, c)?;
//! assert_eq!(graph.shortest_path(a, c)?, vec![a, b, c]);
//!
//! graph.remove_node(b)?;
//! assert_eq!(graph.out_degree(a)?, 0);
//! assert!(!graph.contains(b));
//! # Ok::<(), digraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod graph;
mod store;
mod traverse;

pub use error::GraphError;
pub use graph::{DiGraph, Weight, DEFAULT_WEIGHT};
