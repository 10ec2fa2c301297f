//! # Word Graph Analysis
//!
//! Directed word-adjacency graphs built from free text, using petgraph.
//!
//! Provides:
//! - Tokenization into lowercase alphabetic words
//! - Graph construction with adjacency-count edge weights
//! - Degree, edge-weight and bridge-word queries
//! - Text augmentation with random bridge words
//! - Weighted shortest paths (single pair and single source)
//! - PageRank with dangling-word redistribution
//! - Random walks with repeated-edge termination
//! - DOT export for external rendering
//!
//! ## Quick Start
//!
//! ```
//! use wordgraph_graph::WordGraph;
//!
//! let graph = WordGraph::from_text("To be, or not to be");
//! assert_eq!(graph.edge_weight("to", "be"), 2);
//! assert_eq!(graph.bridge_words("be", "not"), vec!["or"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Nodes**: distinct lowercase words
//! - **Edges**: `u -> v` weighted by how often `u` is immediately followed by `v`
//! - **Bridge word**: `b` such that `u -> b` and `b -> v` are both edges
//! - **Dangling word**: a word with no outgoing edges
//!
//! Every query is total: absent words yield 0, empty results or a "not in
//! the graph" message rather than an error.
//!
//! ## Randomness
//!
//! Augmentation and walks take any `rand::Rng`, so callers can pass a seeded
//! `StdRng` for reproducible output. [`Engine`] owns one for convenience.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordgraph_graph::{WordGraph, augment_text};
//! use wordgraph_core::AugmentSpacing;
//!
//! let graph = WordGraph::from_text("seek new worlds and new civilizations");
//! let mut rng = StdRng::seed_from_u64(42);
//! let text = augment_text(&graph, "Seek worlds", AugmentSpacing::Preserve, &mut rng);
//! assert_eq!(text, "Seek new worlds");
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] - Text normalization
//! - [`graph`] - WordGraph construction and lookups
//! - [`bridge`] - Bridge-word messages
//! - [`augment`] - Bridge-word text augmentation
//! - [`paths`] - Dijkstra shortest paths
//! - [`rank`] - PageRank
//! - [`walk`] - Random walk state machine
//! - [`export`] - DOT output
//! - [`engine`] - Configured facade

pub mod augment;
pub mod bridge;
pub mod engine;
pub mod export;
pub mod graph;
pub mod paths;
pub mod rank;
pub mod tokenizer;
pub mod walk;

pub use augment::augment_text;
pub use bridge::bridge_message;
pub use engine::Engine;
pub use export::to_dot;
pub use graph::{GraphStats, WordGraph};
pub use paths::{ShortestPath, path_message, shortest_path, shortest_paths_from};
pub use rank::{RankVector, page_rank, rank_of, top_ranked};
pub use tokenizer::{Fragment, fragments, tokenize};
pub use walk::{AlwaysContinue, RandomWalker, StepDecider, Walk, WalkControl, WalkEnd};
pub use wordgraph_core::prelude::*;

pub mod prelude {
    pub use crate::engine::Engine;
    pub use crate::graph::{GraphStats, WordGraph};
    pub use crate::paths::ShortestPath;
    pub use crate::walk::{AlwaysContinue, StepDecider, Walk, WalkControl, WalkEnd};
    pub use wordgraph_core::prelude::*;
}
