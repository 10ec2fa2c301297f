//! PageRank over the word graph.
//!
//! Scores of dangling words (no outgoing edges) are pooled every round and
//! spread evenly over all words, so mass is not lost through dead ends.
//! Edge weights are ignored: each predecessor splits its score evenly over
//! its distinct successors.

use crate::graph::WordGraph;
use petgraph::Direction::Incoming;
use std::collections::HashMap;
use wordgraph_core::{RankConfig, RankInit};

/// Final score for every word
pub type RankVector = HashMap<String, f64>;

/// Compute PageRank for every word in the graph.
///
/// Iterates up to `config.max_iterations` rounds, stopping early once the
/// total absolute change in one round drops below `config.tolerance`.
#[allow(clippy::cast_precision_loss)]
pub fn page_rank(graph: &WordGraph, config: &RankConfig) -> RankVector {
    let g = graph.inner();
    let n = g.node_count();
    if n == 0 {
        return RankVector::new();
    }
    let n_f = n as f64;
    let d = config.damping;

    let mut ranks = initial_ranks(graph, config.init);
    let out_degree: Vec<usize> = g.node_indices().map(|idx| g.edges(idx).count()).collect();
    let dangling: Vec<usize> = (0..n).filter(|&i| out_degree[i] == 0).collect();

    let mut rounds = 0;
    for _ in 0..config.max_iterations {
        rounds += 1;
        let dangling_sum: f64 = dangling.iter().map(|&i| ranks[i]).sum();
        let dangling_share = dangling_sum / n_f;

        let mut next = vec![0.0; n];
        let mut diff = 0.0;
        for u in g.node_indices() {
            let incoming: f64 = g
                .neighbors_directed(u, Incoming)
                .map(|v| ranks[v.index()] / out_degree[v.index()] as f64)
                .sum();
            let score = (1.0 - d) / n_f + d * (incoming + dangling_share);
            diff += (score - ranks[u.index()]).abs();
            next[u.index()] = score;
        }

        ranks = next;
        if diff < config.tolerance {
            break;
        }
    }

    log::debug!("PageRank finished after {} round(s) over {} words", rounds, n);

    g.node_indices()
        .map(|idx| (graph.word(idx).to_string(), ranks[idx.index()]))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn initial_ranks(graph: &WordGraph, init: RankInit) -> Vec<f64> {
    let g = graph.inner();
    let n = g.node_count();

    match init {
        RankInit::Uniform => vec![1.0 / n as f64; n],
        RankInit::TermFrequency => {
            let counts = graph.term_frequencies();
            let total = graph.tokens().len() as f64;
            g.node_indices()
                .map(|idx| {
                    let count = counts.get(graph.word(idx)).copied().unwrap_or(0);
                    count as f64 / total
                })
                .collect()
        }
    }
}

/// Score of a single word; 0.0 for an empty graph or an absent word
pub fn rank_of(graph: &WordGraph, word: &str, config: &RankConfig) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }
    page_rank(graph, config)
        .get(&word.to_ascii_lowercase())
        .copied()
        .unwrap_or(0.0)
}

/// Highest scoring words first; ties broken alphabetically
pub fn top_ranked(ranks: &RankVector, limit: usize) -> Vec<(String, f64)> {
    let mut sorted: Vec<(String, f64)> = ranks.iter().map(|(w, s)| (w.clone(), *s)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(limit);
    sorted
}
