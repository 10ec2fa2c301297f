//! Human-readable bridge-word query results.

use crate::graph::WordGraph;
use wordgraph_core::MessageStyle;

/// Describe the bridge words from `word1` to `word2`.
///
/// Both inputs are case-folded before lookup and echoed back lowercase.
pub fn bridge_message(graph: &WordGraph, word1: &str, word2: &str, style: MessageStyle) -> String {
    let word1 = word1.to_ascii_lowercase();
    let word2 = word2.to_ascii_lowercase();

    let has1 = graph.contains(&word1);
    let has2 = graph.contains(&word2);

    match style {
        MessageStyle::Structured => match (has1, has2) {
            (false, false) => {
                return format!("No \"{}\" and \"{}\" in the graph!", word1, word2);
            }
            (false, true) => return format!("No \"{}\" in the graph!", word1),
            (true, false) => return format!("No \"{}\" in the graph!", word2),
            (true, true) => {}
        },
        MessageStyle::Plain => {
            if !has1 {
                return format!("No {} in the graph!", word1);
            }
            if !has2 {
                return format!("No {} in the graph!", word2);
            }
        }
    }

    let bridges = graph.bridge_words(&word1, &word2);
    if bridges.is_empty() {
        return format!("No bridge words from {} to {}!", word1, word2);
    }

    let singular = bridges.len() == 1 && style == MessageStyle::Structured;
    let header = if singular {
        format!("The bridge word from {} to {} is: ", word1, word2)
    } else {
        format!("The bridge words from {} to {} are: ", word1, word2)
    };

    format!("{}{}.", header, join_with_and(&bridges))
}

/// `a` / `a, and b` / `a, b, and c`
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => {
            let mut out = String::new();
            for item in init {
                out.push_str(item);
                out.push_str(", ");
            }
            out.push_str("and ");
            out.push_str(last);
            out
        }
    }
}
