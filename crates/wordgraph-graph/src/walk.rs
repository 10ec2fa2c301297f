//! Random walk over the word graph.
//!
//! A walk starts at a uniformly random word and repeatedly follows a
//! uniformly random outgoing edge (edge weights are ignored). It stops at a
//! dead end, when the chosen edge was already taken during this walk, or when
//! the step decider asks to stop. Every committed step is appended to a log:
//!
//! ```text
//! 节点: <start>
//! 边: <start>-><next>
//! 节点: <next>
//! ```

use crate::graph::WordGraph;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use wordgraph_core::{Error, Result};

/// Log line prefix for a visited node
pub const NODE_PREFIX: &str = "节点: ";
/// Log line prefix for a traversed edge
pub const EDGE_PREFIX: &str = "边: ";

/// Answer from the step decider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    Stop,
}

/// External source deciding whether each step may be taken.
///
/// Consulted once per candidate step, after the repeated-edge check and
/// before anything is recorded. Implementations may block (e.g. on a prompt).
pub trait StepDecider {
    fn decide(&mut self, from: &str, to: &str) -> Result<WalkControl>;
}

impl<F> StepDecider for F
where
    F: FnMut(&str, &str) -> Result<WalkControl>,
{
    fn decide(&mut self, from: &str, to: &str) -> Result<WalkControl> {
        self(from, to)
    }
}

/// Decider that never interrupts
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysContinue;

impl StepDecider for AlwaysContinue {
    fn decide(&mut self, _from: &str, _to: &str) -> Result<WalkControl> {
        Ok(WalkControl::Continue)
    }
}

/// Why a walk stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum WalkEnd {
    /// The graph has no words
    EmptyGraph,
    /// Current word has no outgoing edges
    DeadEnd { word: String },
    /// The chosen edge was already traversed in this walk
    RepeatedEdge { from: String, to: String },
    /// The step decider asked to stop
    Cancelled,
}

/// Result of one walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    /// Visited words, starting word first
    pub nodes: Vec<String>,
    /// Traversed edges in order
    pub edges: Vec<(String, String)>,
    pub end: WalkEnd,
}

impl Walk {
    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(|s| s.as_str())
    }

    /// Visited words separated by single spaces
    pub fn path_text(&self) -> String {
        self.nodes.join(" ")
    }
}

/// Stateful walker bound to one graph
pub struct RandomWalker<'a> {
    graph: &'a WordGraph,
}

impl<'a> RandomWalker<'a> {
    pub fn new(graph: &'a WordGraph) -> Self {
        Self { graph }
    }

    /// Run one walk, appending each committed step to `log`.
    ///
    /// Write failures on the log abort the walk and are returned.
    pub fn walk<R, D, W>(&self, rng: &mut R, decider: &mut D, log: &mut W) -> Result<Walk>
    where
        R: Rng + ?Sized,
        D: StepDecider + ?Sized,
        W: Write + ?Sized,
    {
        let words: Vec<&str> = self.graph.words().collect();
        let Some(&start) = words.choose(rng) else {
            log::debug!("Walk skipped: graph is empty");
            return Ok(Walk {
                nodes: Vec::new(),
                edges: Vec::new(),
                end: WalkEnd::EmptyGraph,
            });
        };

        let mut nodes = vec![start.to_string()];
        let mut edges: Vec<(String, String)> = Vec::new();
        let mut taken: HashSet<(String, String)> = HashSet::new();
        write_line(log, NODE_PREFIX, start)?;

        let mut current = start.to_string();
        let end = loop {
            let successors = self.graph.successors(&current);
            let Some((next, _)) = successors.choose(rng) else {
                break WalkEnd::DeadEnd { word: current };
            };

            let edge = (current.clone(), next.clone());
            if taken.contains(&edge) {
                break WalkEnd::RepeatedEdge {
                    from: edge.0,
                    to: edge.1,
                };
            }

            if decider.decide(&current, next)? == WalkControl::Stop {
                break WalkEnd::Cancelled;
            }

            write_line(log, EDGE_PREFIX, &format!("{}->{}", current, next))?;
            write_line(log, NODE_PREFIX, next)?;

            taken.insert(edge.clone());
            edges.push(edge);
            nodes.push(next.clone());
            current = next.clone();
        };

        log.flush()
            .map_err(|e| Error::walk_log(format!("failed to flush walk log: {}", e)))?;
        log::debug!("Walk of {} step(s) ended: {:?}", edges.len(), end);

        Ok(Walk { nodes, edges, end })
    }
}

fn write_line<W: Write + ?Sized>(log: &mut W, prefix: &str, body: &str) -> Result<()> {
    writeln!(log, "{}{}", prefix, body)
        .map_err(|e| Error::walk_log(format!("failed to record step: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;

    struct BrokenLog;

    impl Write for BrokenLog {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_graph_walk() {
        let graph = WordGraph::from_text("solitary");
        let mut log = Vec::new();
        let walk = RandomWalker::new(&graph)
            .walk(&mut StdRng::seed_from_u64(0), &mut AlwaysContinue, &mut log)
            .unwrap();
        assert_eq!(walk.end, WalkEnd::EmptyGraph);
        assert!(walk.nodes.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_cycle_stops_on_repeated_edge() {
        let graph = WordGraph::from_text("a b a b");
        for seed in 0..8 {
            let mut log = Vec::new();
            let walk = RandomWalker::new(&graph)
                .walk(&mut StdRng::seed_from_u64(seed), &mut AlwaysContinue, &mut log)
                .unwrap();
            assert_eq!(walk.edges.len(), 2);
            assert_eq!(walk.nodes.len(), 3);
            assert!(matches!(walk.end, WalkEnd::RepeatedEdge { .. }));
            assert_eq!(walk.nodes[0], walk.nodes[2]);
        }
    }

    #[test]
    fn test_chain_stops_at_dead_end() {
        let graph = WordGraph::from_text("one two three");
        let mut log = Vec::new();
        let walk = RandomWalker::new(&graph)
            .walk(&mut StdRng::seed_from_u64(3), &mut AlwaysContinue, &mut log)
            .unwrap();
        assert_eq!(
            walk.end,
            WalkEnd::DeadEnd {
                word: "three".to_string()
            }
        );
        assert_eq!(walk.nodes.last().map(|s| s.as_str()), Some("three"));
    }

    #[test]
    fn test_decider_can_cancel() {
        let graph = WordGraph::from_text("a b a");
        let mut log = Vec::new();
        let mut stop = |_: &str, _: &str| Ok::<_, Error>(WalkControl::Stop);
        let walk = RandomWalker::new(&graph)
            .walk(&mut StdRng::seed_from_u64(11), &mut stop, &mut log)
            .unwrap();
        assert_eq!(walk.end, WalkEnd::Cancelled);
        assert!(walk.edges.is_empty());
        assert_eq!(walk.nodes.len(), 1);

        let text = String::from_utf8(log).unwrap();
        assert_eq!(text, format!("{}{}\n", NODE_PREFIX, walk.nodes[0]));
    }

    #[test]
    fn test_log_records_every_step() {
        let graph = WordGraph::from_text("one two three");
        let mut log = Vec::new();
        let walk = RandomWalker::new(&graph)
            .walk(&mut StdRng::seed_from_u64(5), &mut AlwaysContinue, &mut log)
            .unwrap();

        let text = String::from_utf8(log).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 2 * walk.edges.len());
        assert_eq!(lines[0], format!("节点: {}", walk.nodes[0]));
        for (i, (from, to)) in walk.edges.iter().enumerate() {
            assert_eq!(lines[1 + 2 * i], format!("边: {}->{}", from, to));
            assert_eq!(lines[2 + 2 * i], format!("节点: {}", to));
        }
    }

    #[test]
    fn test_edges_never_repeat_and_length_bounded() {
        let text = "the cat sat on the mat and the cat ran to the dog and the dog sat";
        let graph = WordGraph::from_text(text);
        for seed in 0..50 {
            let mut log = io::sink();
            let walk = RandomWalker::new(&graph)
                .walk(&mut StdRng::seed_from_u64(seed), &mut AlwaysContinue, &mut log)
                .unwrap();
            let unique: HashSet<_> = walk.edges.iter().collect();
            assert_eq!(unique.len(), walk.edges.len());
            assert!(walk.edges.len() <= graph.edge_count());
            assert_eq!(walk.nodes.len(), walk.edges.len() + 1);
        }
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let graph = WordGraph::from_text("a b c a c b a");
        let run = |seed| {
            RandomWalker::new(&graph)
                .walk(
                    &mut StdRng::seed_from_u64(seed),
                    &mut AlwaysContinue,
                    &mut io::sink(),
                )
                .unwrap()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_log_failure_propagates() {
        let graph = WordGraph::from_text("a b");
        let result = RandomWalker::new(&graph).walk(
            &mut StdRng::seed_from_u64(0),
            &mut AlwaysContinue,
            &mut BrokenLog,
        );
        assert!(matches!(result, Err(Error::WalkLog { .. })));
    }
}
