//! Unweighted shortest-path search.
//!
//! Breadth-first over the outgoing arc lists with first-discovery-wins
//! labeling, then a backward walk over the incoming lists to produce one
//! concrete path. The solver reads the graph structure only; its visited,
//! distance, and frontier bookkeeping is transient.

mod visited;

use std::collections::VecDeque;

use tracing::trace;

use crate::error::GraphError;
use crate::graph::DiGraph;
use visited::VisitedSet;

/// Finds a shortest path from `start` to `end` by hop count.
///
/// Arc weights are ignored. The frontier carries `(node, distance)` pairs so
/// discovery labels each node exactly once; the search stops as soon as
/// `end` is discovered, which is safe because BFS hands out distances in
/// nondecreasing order.
pub(crate) fn shortest_path<T>(
    graph: &DiGraph<T>,
    start: usize,
    end: usize,
) -> Result<Vec<usize>, GraphError> {
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(start));
    }
    if !graph.contains(end) {
        return Err(GraphError::NodeNotFound(end));
    }
    if start == end {
        trace!(start, end, "shortest path is the node itself");
        return Ok(vec![start]);
    }

    let bound = graph.index_bound();
    let mut visited = VisitedSet::new(bound);
    let mut distance: Vec<Option<u32>> = vec![None; bound];
    let mut frontier: VecDeque<(usize, u32)> = VecDeque::new();

    visited.mark(start);
    distance[start] = Some(0);
    frontier.push_back((start, 0));

    'search: loop {
        let Some((u, hops)) = frontier.pop_front() else {
            trace!(start, end, "frontier exhausted, no path");
            return Err(GraphError::Unreachable {
                from: start,
                to: end,
            });
        };
        let Some(record) = graph.record(u) else {
            unreachable!("arc references tombstoned node {u}")
        };
        for arc in &record.outgoing {
            if visited.try_visit(arc.node) {
                distance[arc.node] = Some(hops + 1);
                if arc.node == end {
                    break 'search;
                }
                frontier.push_back((arc.node, hops + 1));
            }
        }
    }

    let Some(end_distance) = distance[end] else {
        unreachable!("search ended without labeling {end}")
    };

    // Walk backward from `end`; the node that discovered each step is in
    // its incoming list, one hop closer to `start`.
    let mut path = Vec::with_capacity(end_distance as usize + 1);
    path.push(end);
    let mut current = end;
    let mut hops = end_distance;
    while current != start {
        let Some(record) = graph.record(current) else {
            unreachable!("path runs through tombstoned node {current}")
        };
        let previous = record
            .incoming
            .iter()
            .map(|arc| arc.node)
            .find(|&p| distance[p] == Some(hops - 1))
            .unwrap_or_else(|| {
                panic!("mirror invariant violated: no labeled predecessor of {current}")
            });
        path.push(previous);
        current = previous;
        hops -= 1;
    }
    path.reverse();

    trace!(start, end, hops = end_distance, "found shortest path");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn line(n: usize) -> DiGraph<usize> {
        let mut graph = DiGraph::new();
        for i in 0..n {
            graph.add_node(i);
        }
        for i in 0..n.saturating_sub(1) {
            graph.add_arc(i, i + 1).unwrap();
        }
        graph
    }

    #[test]
    fn line_graph_end_to_end() {
        let graph = line(5);
        assert_eq!(graph.shortest_path(0, 4).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_node_is_a_single_node_path() {
        let graph = line(3);
        assert_eq!(graph.shortest_path(1, 1).unwrap(), vec![1]);
    }

    #[test]
    fn direction_matters() {
        let graph = line(3);
        assert_eq!(
            graph.shortest_path(2, 0),
            Err(GraphError::Unreachable { from: 2, to: 0 })
        );
    }

    #[test]
    fn start_without_outgoing_arcs_is_unreachable() {
        let mut graph = DiGraph::new();
        let a = graph.add_node('a');
        let b = graph.add_node('b');
        graph.add_arc(b, a).unwrap();
        assert_eq!(
            graph.shortest_path(a, b),
            Err(GraphError::Unreachable { from: a, to: b })
        );
    }

    #[test]
    fn cycles_terminate() {
        let mut graph = DiGraph::new();
        for i in 0..4 {
            graph.add_node(i);
        }
        graph.add_arc(0, 1).unwrap();
        graph.add_arc(1, 2).unwrap();
        graph.add_arc(2, 1).unwrap();
        graph.add_arc(2, 3).unwrap();
        assert_eq!(graph.shortest_path(0, 3).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            graph.shortest_path(3, 0),
            Err(GraphError::Unreachable { from: 3, to: 0 })
        );
    }

    #[test]
    fn shorter_of_two_routes_wins() {
        let mut graph = DiGraph::new();
        for i in 0..5 {
            graph.add_node(i);
        }
        // long way round: 0 -> 1 -> 2 -> 4, short cut: 0 -> 3 -> 4
        graph.add_arc(0, 1).unwrap();
        graph.add_arc(1, 2).unwrap();
        graph.add_arc(2, 4).unwrap();
        graph.add_arc(0, 3).unwrap();
        graph.add_arc(3, 4).unwrap();
        let path = graph.shortest_path(0, 4).unwrap();
        assert_eq!(path, vec![0, 3, 4]);
    }

    #[test]
    fn weights_are_ignored() {
        let mut graph = DiGraph::new();
        for i in 0..3 {
            graph.add_node(i);
        }
        graph.add_arc_weighted(0, 1, 100).unwrap();
        graph.add_arc_weighted(1, 2, 100).unwrap();
        graph.add_arc_weighted(0, 2, 1_000_000).unwrap();
        // one heavy hop still beats two light ones
        assert_eq!(graph.shortest_path(0, 2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn invalid_endpoints_are_reported_before_searching() {
        let mut graph = line(3);
        graph.remove_node(1).unwrap();
        assert_eq!(graph.shortest_path(1, 2), Err(GraphError::NodeNotFound(1)));
        assert_eq!(graph.shortest_path(0, 1), Err(GraphError::NodeNotFound(1)));
        assert_eq!(graph.shortest_path(9, 0), Err(GraphError::NodeNotFound(9)));
    }

    #[test]
    fn path_survives_unrelated_tombstones() {
        let mut graph = line(6);
        graph.remove_node(5).unwrap();
        assert_eq!(graph.shortest_path(0, 4).unwrap(), vec![0, 1, 2, 3, 4]);
    }
}
