//! Word-adjacency graph using petgraph

use crate::tokenizer::tokenize;
use petgraph::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Node index type for graph
pub(crate) type NodeIndex = petgraph::graph::NodeIndex;

/// Directed word-adjacency graph.
///
/// Nodes are lowercase words; an edge `u -> v` with weight `w` means `u` is
/// immediately followed by `v` exactly `w` times in the source tokens. The
/// value is immutable once built; loading new text builds a new graph.
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// Directed graph: nodes are words, edge weights are adjacency counts
    graph: DiGraph<String, u32>,

    /// Map from word to node index
    word_index: HashMap<String, NodeIndex>,

    /// Token sequence the graph was built from
    tokens: Vec<String>,
}

impl WordGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            word_index: HashMap::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize raw text and build its graph
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Build a graph from an already-normalized token sequence.
    ///
    /// With fewer than two tokens there are no adjacent pairs and the graph
    /// is left empty (no nodes, no edges).
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut graph: DiGraph<String, u32> = DiGraph::new();
        let mut word_index: HashMap<String, NodeIndex> = HashMap::new();

        if tokens.len() < 2 {
            log::debug!("Fewer than two tokens ({}), graph left empty", tokens.len());
            return Self {
                graph,
                word_index,
                tokens,
            };
        }

        // Every token becomes a node, in order of first appearance
        for token in &tokens {
            if !word_index.contains_key(token) {
                let idx = graph.add_node(token.clone());
                word_index.insert(token.clone(), idx);
            }
        }

        for pair in tokens.windows(2) {
            let source = word_index[&pair[0]];
            let target = word_index[&pair[1]];
            match graph.find_edge(source, target) {
                Some(edge) => graph[edge] += 1,
                None => {
                    graph.add_edge(source, target, 1);
                }
            }
        }

        log::debug!(
            "Built word graph: {} tokens, {} words, {} edges",
            tokens.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Self {
            graph,
            word_index,
            tokens,
        }
    }

    /// Whether `word` (case-insensitive) is a node
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Number of distinct successors of `word`, 0 when absent
    pub fn out_degree(&self, word: &str) -> usize {
        self.index_of(word)
            .map(|idx| self.graph.edges(idx).count())
            .unwrap_or(0)
    }

    /// Number of distinct predecessors of `word`, 0 when absent
    pub fn in_degree(&self, word: &str) -> usize {
        self.index_of(word)
            .map(|idx| self.graph.edges_directed(idx, Incoming).count())
            .unwrap_or(0)
    }

    /// Weight of `source -> target`, 0 when the edge or either word is absent
    pub fn edge_weight(&self, source: &str, target: &str) -> u32 {
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => self
                .graph
                .find_edge(s, t)
                .map(|edge| self.graph[edge])
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Words `b` with edges `word1 -> b` and `b -> word2`.
    ///
    /// Candidates range over the direct successors of `word1` and are
    /// returned in lexicographic order. Empty when either word is absent.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Vec<String> {
        let (Some(from), Some(to)) = (self.index_of(word1), self.index_of(word2)) else {
            return Vec::new();
        };

        let mut bridges: Vec<String> = self
            .graph
            .neighbors(from)
            .filter(|&candidate| self.graph.find_edge(candidate, to).is_some())
            .map(|candidate| self.graph[candidate].clone())
            .collect();
        bridges.sort();
        bridges
    }

    /// Successor words of `word` with their edge weights, sorted by word
    pub fn successors(&self, word: &str) -> Vec<(String, u32)> {
        let Some(idx) = self.index_of(word) else {
            return Vec::new();
        };

        let mut out: Vec<(String, u32)> = self
            .graph
            .edges(idx)
            .map(|edge| (self.graph[edge.target()].clone(), *edge.weight()))
            .collect();
        out.sort();
        out
    }

    /// All words in order of first appearance
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(move |idx| self.graph[idx].as_str())
    }

    /// All `(source, target, weight)` triples in order of first occurrence
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                *edge.weight(),
            )
        })
    }

    /// Token sequence the graph was built from
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Occurrence count of every word in the token sequence
    pub fn term_frequencies(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for token in &self.tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Words with no outgoing edges
    pub fn dangling_words(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.edges(idx).next().is_none())
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_tokens: self.tokens.len(),
            total_words: self.graph.node_count(),
            total_edges: self.graph.edge_count(),
            total_weight: self.graph.edge_weights().map(|&w| u64::from(w)).sum(),
            dangling_words: self.dangling_words().len(),
        }
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn index_of(&self, word: &str) -> Option<NodeIndex> {
        self.word_index.get(&word.to_ascii_lowercase()).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, u32> {
        &self.graph
    }

    pub(crate) fn word(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for WordGraph {
    fn eq(&self, other: &Self) -> bool {
        let mine: Vec<_> = self.edges().collect();
        let theirs: Vec<_> = other.edges().collect();
        self.words().eq(other.words()) && mine == theirs
    }
}

/// One line per edge: `<source> -> <target> [weight=<w>]`
impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, target, weight) in self.edges() {
            writeln!(f, "{} -> {} [weight={}]", source, target, weight)?;
        }
        Ok(())
    }
}

/// Statistics about the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_tokens: usize,
    pub total_words: usize,
    pub total_edges: usize,
    pub total_weight: u64,
    pub dangling_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORY: &str = "The scientist carefully analyzed the data, wrote a detailed report, \
        and shared the report with the team, but the team requested more data, \
        so the scientist analyzed it again.";

    #[test]
    fn test_every_word_is_a_node() {
        let graph = WordGraph::from_text("alpha beta gamma");
        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains("gamma"));
        assert_eq!(graph.out_degree("gamma"), 0);
        assert_eq!(graph.in_degree("alpha"), 0);
    }

    #[test]
    fn test_weight_accumulation() {
        let graph = WordGraph::from_text("a b a b a b");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_weight("a", "b"), 3);
        // b is followed by a twice (positions 1-2 and 3-4)
        assert_eq!(graph.edge_weight("b", "a"), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_fewer_than_two_tokens() {
        for text in ["", "hello", "!!! 42 ???"] {
            let graph = WordGraph::from_text(text);
            assert_eq!(graph.edge_count(), 0);
            assert!(graph.is_empty());
            assert!(graph.bridge_words("hello", "hello").is_empty());
        }
    }

    #[test]
    fn test_self_loop_counted() {
        let graph = WordGraph::from_text("go go go stop");
        assert_eq!(graph.edge_weight("go", "go"), 2);
        assert_eq!(graph.out_degree("go"), 2);
        assert_eq!(graph.in_degree("go"), 1);
    }

    #[test]
    fn test_degrees_are_case_insensitive_and_distinct() {
        let graph = WordGraph::from_text(STORY);
        // the -> scientist, data, report, team
        assert_eq!(graph.out_degree("THE"), 4);
        // analyzed, shared, with, but, so all precede "the"
        assert_eq!(graph.in_degree("The"), 5);
        assert_eq!(graph.out_degree("missing"), 0);
        assert_eq!(graph.in_degree("missing"), 0);
    }

    #[test]
    fn test_edge_weight_lookup() {
        let graph = WordGraph::from_text(STORY);
        assert_eq!(graph.edge_weight("the", "scientist"), 2);
        assert_eq!(graph.edge_weight("The", "TEAM"), 2);
        assert_eq!(graph.edge_weight("team", "the"), 0);
        assert_eq!(graph.edge_weight("nope", "the"), 0);
    }

    #[test]
    fn test_bridge_words() {
        let graph = WordGraph::from_text(STORY);
        assert_eq!(graph.bridge_words("the", "analyzed"), vec!["scientist"]);
        assert_eq!(graph.bridge_words("analyzed", "data"), vec!["the"]);
        assert!(graph.bridge_words("the", "data").is_empty());
        assert!(graph.bridge_words("missing", "data").is_empty());
    }

    #[test]
    fn test_bridge_words_are_directional() {
        let graph = WordGraph::from_text("a detailed report a complicated report");
        assert_eq!(
            graph.bridge_words("a", "report"),
            vec!["complicated", "detailed"]
        );
        assert!(graph.bridge_words("report", "a").is_empty());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let first = WordGraph::from_text(STORY);
        let second = WordGraph::from_text(STORY);
        assert_eq!(first, second);
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn test_stats() {
        let graph = WordGraph::from_text("a b c a b");
        let stats = graph.stats();
        assert_eq!(stats.total_tokens, 5);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.total_edges, 3);
        assert_eq!(stats.total_weight, 4);
        assert_eq!(stats.dangling_words, 0);
    }

    #[test]
    fn test_display_lists_edges() {
        let graph = WordGraph::from_text("a b a");
        let listing = graph.to_string();
        assert_eq!(listing, "a -> b [weight=1]\nb -> a [weight=1]\n");
    }

    #[test]
    fn test_term_frequencies() {
        let graph = WordGraph::from_text("x y x z x");
        let tf = graph.term_frequencies();
        assert_eq!(tf["x"], 3);
        assert_eq!(tf["y"], 1);
        assert_eq!(tf["z"], 1);
    }
}
