//! Configured facade over a loaded graph.
//!
//! Holds the current [`WordGraph`], the [`EngineConfig`] policies and the
//! random source, and exposes every query with those policies applied.
//! Loading text replaces the graph wholesale.

use crate::augment::augment_text;
use crate::bridge::bridge_message;
use crate::graph::{GraphStats, WordGraph};
use crate::paths::{self, ShortestPath};
use crate::rank::{self, RankVector};
use crate::walk::{RandomWalker, StepDecider, Walk};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::io::Write;
use wordgraph_core::{EngineConfig, Result};

pub struct Engine {
    graph: WordGraph,
    config: EngineConfig,
    rng: StdRng,
}

impl Engine {
    /// Engine with an entropy-seeded random source and an empty graph
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a deterministic random source
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        Self {
            graph: WordGraph::new(),
            config,
            rng,
        }
    }

    /// Rebuild the graph from scratch from `text`
    pub fn load_text(&mut self, text: &str) -> &WordGraph {
        self.graph = WordGraph::from_text(text);
        log::info!(
            "Loaded graph: {} words, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        &self.graph
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> GraphStats {
        self.graph.stats()
    }

    pub fn out_degree(&self, word: &str) -> usize {
        self.graph.out_degree(word)
    }

    pub fn in_degree(&self, word: &str) -> usize {
        self.graph.in_degree(word)
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> u32 {
        self.graph.edge_weight(source, target)
    }

    pub fn bridge_words(&self, word1: &str, word2: &str) -> Vec<String> {
        self.graph.bridge_words(word1, word2)
    }

    /// Bridge query rendered in the configured message style
    pub fn query_bridge_words(&self, word1: &str, word2: &str) -> String {
        bridge_message(&self.graph, word1, word2, self.config.message_style)
    }

    /// Augment text using the configured spacing policy
    pub fn augment(&mut self, text: &str) -> String {
        augment_text(&self.graph, text, self.config.augment_spacing, &mut self.rng)
    }

    pub fn shortest_path(&self, word1: &str, word2: &str) -> Option<ShortestPath> {
        paths::shortest_path(&self.graph, word1, word2)
    }

    pub fn shortest_paths_from(&self, word: &str) -> BTreeMap<String, ShortestPath> {
        paths::shortest_paths_from(&self.graph, word)
    }

    pub fn path_message(&self, word1: &str, word2: &str) -> String {
        paths::path_message(&self.graph, word1, word2)
    }

    /// Full rank vector with the configured parameters
    pub fn page_rank(&self) -> RankVector {
        rank::page_rank(&self.graph, &self.config.rank)
    }

    pub fn rank_of(&self, word: &str) -> f64 {
        rank::rank_of(&self.graph, word, &self.config.rank)
    }

    /// Random walk, logging each committed step to `log`
    pub fn random_walk<D, W>(&mut self, decider: &mut D, log: &mut W) -> Result<Walk>
    where
        D: StepDecider + ?Sized,
        W: Write + ?Sized,
    {
        RandomWalker::new(&self.graph).walk(&mut self.rng, decider, log)
    }
}
