//! Graphviz DOT description of the word graph.
//!
//! The layout tool itself is driven by the outer crate; this module only
//! produces the text it consumes.

use crate::graph::WordGraph;
use std::fmt::Write;

/// Render the graph as a left-to-right DOT digraph with weight labels
pub fn to_dot(graph: &WordGraph) -> String {
    let mut dot = String::from("digraph G {\n");
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    node [shape=circle];\n");

    for (source, target, weight) in graph.edges() {
        // Writing to a String cannot fail
        let _ = writeln!(
            dot,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            source, target, weight
        );
    }

    dot.push_str("}\n");
    dot
}
