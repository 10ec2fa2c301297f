//! Text augmentation: splice a random bridge word between adjacent words.

use crate::graph::WordGraph;
use crate::tokenizer::{Fragment, fragments};
use rand::Rng;
use rand::seq::SliceRandom;
use wordgraph_core::AugmentSpacing;

/// Insert bridge words into `text`.
///
/// Adjacent words are consecutive word fragments of the original text, so
/// punctuation between them does not break the pair. When a pair has bridge
/// words, one is picked uniformly at random and inserted lowercase, preceded
/// by a single space, right after the first word. Everything else keeps its
/// original position, casing and punctuation. Text with fewer than two words
/// is returned unchanged.
pub fn augment_text<R: Rng + ?Sized>(
    graph: &WordGraph,
    text: &str,
    spacing: AugmentSpacing,
    rng: &mut R,
) -> String {
    let frags = fragments(text);
    let words: Vec<String> = frags
        .iter()
        .filter(|f| f.is_word())
        .map(|f| f.as_str().to_ascii_lowercase())
        .collect();

    if words.len() < 2 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut word_pos = 0;
    let mut inserted = 0usize;

    for frag in &frags {
        out.push_str(frag.as_str());

        if let Fragment::Word(_) = frag {
            if let Some(next) = words.get(word_pos + 1) {
                let bridges = graph.bridge_words(&words[word_pos], next);
                if let Some(bridge) = bridges.choose(rng) {
                    out.push(' ');
                    out.push_str(bridge);
                    inserted += 1;
                }
            }
            word_pos += 1;
        }
    }

    log::debug!("Augmented text with {} bridge word(s)", inserted);

    match spacing {
        AugmentSpacing::Preserve => out,
        AugmentSpacing::Collapse => out.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}
