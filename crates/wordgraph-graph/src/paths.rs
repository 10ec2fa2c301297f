//! Weighted shortest paths (Dijkstra) over the word graph.
//!
//! The priority queue is ordered by `(distance, word)` and relaxation is
//! strict, so among several equal-cost paths the one through the predecessor
//! finalized first (lowest distance, then lexicographically smallest word)
//! is reported.

use crate::graph::{NodeIndex, WordGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

/// A shortest path from source to target, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub nodes: Vec<String>,
    /// Sum of edge weights along the path
    pub cost: u64,
}

impl ShortestPath {
    /// First word; `None` only for a hand-built path with no nodes
    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// `a -> b -> c`
impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

struct Search {
    dist: Vec<Option<u64>>,
    prev: Vec<Option<NodeIndex>>,
}

fn dijkstra(graph: &WordGraph, source: NodeIndex, target: Option<NodeIndex>) -> Search {
    let g = graph.inner();
    let n = g.node_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
    let mut done = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = Some(0);
    heap.push(Reverse((0u64, graph.word(source), source)));

    while let Some(Reverse((d, _, node))) = heap.pop() {
        if done[node.index()] {
            continue;
        }
        done[node.index()] = true;

        if Some(node) == target {
            break;
        }

        for edge in g.edges(node) {
            let next = edge.target();
            let candidate = d + u64::from(*edge.weight());
            if dist[next.index()].is_none_or(|current| candidate < current) {
                dist[next.index()] = Some(candidate);
                prev[next.index()] = Some(node);
                heap.push(Reverse((candidate, graph.word(next), next)));
            }
        }
    }

    Search { dist, prev }
}

fn reconstruct(graph: &WordGraph, search: &Search, target: NodeIndex) -> Option<ShortestPath> {
    let cost = search.dist[target.index()]?;
    let mut nodes = vec![graph.word(target).to_string()];
    let mut cursor = target;
    while let Some(previous) = search.prev[cursor.index()] {
        nodes.push(graph.word(previous).to_string());
        cursor = previous;
    }
    nodes.reverse();
    Some(ShortestPath { nodes, cost })
}

/// Shortest path from `word1` to `word2`.
///
/// `None` when either word is not a node or `word2` is unreachable. When
/// both words are the same node the path is that single node.
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> Option<ShortestPath> {
    let source = graph.index_of(word1)?;
    let target = graph.index_of(word2)?;
    let search = dijkstra(graph, source, Some(target));
    reconstruct(graph, &search, target)
}

/// Shortest paths from `word` to every other reachable word.
///
/// The source itself is never a key; unreachable words are omitted. Empty
/// when `word` is not a node.
pub fn shortest_paths_from(graph: &WordGraph, word: &str) -> BTreeMap<String, ShortestPath> {
    let Some(source) = graph.index_of(word) else {
        return BTreeMap::new();
    };

    let search = dijkstra(graph, source, None);
    graph
        .inner()
        .node_indices()
        .filter(|&idx| idx != source)
        .filter_map(|idx| {
            reconstruct(graph, &search, idx).map(|path| (graph.word(idx).to_string(), path))
        })
        .collect()
}

/// Render the single-pair result as text.
///
/// Distinguishes a missing endpoint from disconnected endpoints.
pub fn path_message(graph: &WordGraph, word1: &str, word2: &str) -> String {
    let word1 = word1.to_ascii_lowercase();
    let word2 = word2.to_ascii_lowercase();

    if !graph.contains(&word1) || !graph.contains(&word2) {
        return "No path found.".to_string();
    }

    match shortest_path(graph, &word1, &word2) {
        Some(path) => path.to_string(),
        None => format!("No path found from {} to {}.", word1, word2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a->c weighs 5, a->b and b->c weigh 1 each
    const DETOUR: &str = "a c a c a c a c a c a b c";

    #[test]
    fn test_prefers_lighter_detour() {
        let graph = WordGraph::from_text(DETOUR);
        assert_eq!(graph.edge_weight("a", "c"), 5);

        let path = shortest_path(&graph, "a", "c").unwrap();
        assert_eq!(path.nodes, vec!["a", "b", "c"]);
        assert_eq!(path.cost, 2);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.source(), Some("a"));
        assert_eq!(path.target(), Some("c"));
        assert_eq!(path.to_string(), "a -> b -> c");
    }

    #[test]
    fn test_same_word_is_single_node_path() {
        let graph = WordGraph::from_text(DETOUR);
        let path = shortest_path(&graph, "B", "b").unwrap();
        assert_eq!(path.nodes, vec!["b"]);
        assert_eq!(path.cost, 0);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.source(), path.target());
        assert_eq!(path_message(&graph, "a", "A"), "a");
    }

    #[test]
    fn test_empty_node_list_accessors() {
        let path: ShortestPath = serde_json::from_str(r#"{"nodes":[],"cost":0}"#).unwrap();
        assert_eq!(path.source(), None);
        assert_eq!(path.target(), None);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_missing_and_unreachable() {
        let graph = WordGraph::from_text("x y z");
        assert!(shortest_path(&graph, "x", "ghost").is_none());
        assert!(shortest_path(&graph, "z", "x").is_none());

        assert_eq!(path_message(&graph, "x", "ghost"), "No path found.");
        assert_eq!(path_message(&graph, "z", "x"), "No path found from z to x.");
        assert_eq!(path_message(&graph, "X", "Z"), "x -> y -> z");
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // a->b->d and a->c->d both cost 2
        let graph = WordGraph::from_text("a c d a b d");
        let path = shortest_path(&graph, "a", "d").unwrap();
        assert_eq!(path.nodes, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_single_source_keys_are_reachable_set() {
        let graph = WordGraph::from_text("a b c a d e");
        // e is a dead end, nothing leads back from it
        let paths = shortest_paths_from(&graph, "a");
        let keys: Vec<&str> = paths.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c", "d", "e"]);
        assert!(!paths.contains_key("a"));
        assert_eq!(paths["e"].to_string(), "a -> d -> e");
        assert_eq!(paths["c"].cost, 2);

        let from_e = shortest_paths_from(&graph, "e");
        assert!(from_e.is_empty());
    }

    #[test]
    fn test_single_source_missing_word() {
        let graph = WordGraph::from_text("a b c");
        assert!(shortest_paths_from(&graph, "zzz").is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::from_text("solo");
        assert!(shortest_path(&graph, "solo", "solo").is_none());
        assert_eq!(path_message(&graph, "solo", "solo"), "No path found.");
    }

    #[test]
    fn test_single_source_agrees_with_single_pair() {
        let text = "the quick brown fox jumps over the lazy dog and the quick cat \
            naps under the brown dog";
        let graph = WordGraph::from_text(text);
        let all = shortest_paths_from(&graph, "the");
        for (target, path) in &all {
            let pair = shortest_path(&graph, "the", target).unwrap();
            assert_eq!(pair.cost, path.cost, "cost mismatch for {}", target);
        }
    }
}
