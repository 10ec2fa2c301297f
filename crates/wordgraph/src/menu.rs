//! Numbered interactive menu over a session.

use crate::session::Session;
use std::io::{BufRead, Write};
use std::path::Path;
use wordgraph_core::Result;

const MENU: &str = "\nChoose an action:
 1. Out-degree of a word
 2. In-degree of a word
 3. Edge weight
 4. Bridge words
 5. Generate new text
 6. Shortest path
 7. Random walk
 8. PageRank
 9. Render graph image
10. Exit";

// End of input while answering a prompt ends the menu
macro_rules! ask_or_quit {
    ($input:expr, $output:expr, $prompt:expr) => {
        match ask($input, $output, $prompt)? {
            Some(line) => line,
            None => return Ok(()),
        }
    };
}

/// Run the menu until `10`, or end of input.
///
/// Invalid selections are reported and the menu is shown again. Failures
/// from walking or rendering are printed and do not end the loop.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = ask(input, output, "Option: ")? else {
            return Ok(());
        };

        let choice: u32 = match choice.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Invalid input, enter a number from 1 to 10.")?;
                continue;
            }
        };

        match choice {
            1 => {
                let word = ask_or_quit!(input, output, "Word: ");
                let degree = session.engine().out_degree(&word);
                writeln!(output, "Out-degree of '{}': {}", word, degree)?;
            }
            2 => {
                let word = ask_or_quit!(input, output, "Word: ");
                let degree = session.engine().in_degree(&word);
                writeln!(output, "In-degree of '{}': {}", word, degree)?;
            }
            3 => {
                let source = ask_or_quit!(input, output, "Source word: ");
                let target = ask_or_quit!(input, output, "Target word: ");
                let weight = session.engine().edge_weight(&source, &target);
                writeln!(output, "Weight of '{}' -> '{}': {}", source, target, weight)?;
            }
            4 => {
                let word1 = ask_or_quit!(input, output, "First word: ");
                let word2 = ask_or_quit!(input, output, "Second word: ");
                writeln!(output, "{}", session.engine().query_bridge_words(&word1, &word2))?;
            }
            5 => {
                let text = ask_or_quit!(input, output, "Text: ");
                let augmented = session.engine_mut().augment(&text);
                writeln!(output, "New text: {}", augmented)?;
            }
            6 => {
                let word1 = ask_or_quit!(input, output, "Start word: ");
                let word2 =
                    ask_or_quit!(input, output, "Target word (empty for all words): ");
                if word2.trim().is_empty() {
                    let paths = session.engine().shortest_paths_from(&word1);
                    if paths.is_empty() {
                        writeln!(output, "No paths found.")?;
                    } else {
                        writeln!(output, "Shortest paths from {}:", word1)?;
                        for (target, path) in &paths {
                            writeln!(output, "to {}: {} (weight {})", target, path, path.cost)?;
                        }
                    }
                } else {
                    let message = session.engine().path_message(&word1, word2.trim());
                    writeln!(output, "Shortest path: {}", message)?;
                }
            }
            7 => match session.walk_interactive(input, output) {
                Ok(walk) => writeln!(output, "Walk: {}", walk.path_text())?,
                Err(e) => writeln!(output, "Walk failed: {}", e)?,
            },
            8 => {
                let word = ask_or_quit!(input, output, "Word: ");
                writeln!(output, "PageRank of {} = {}", word, session.engine().rank_of(&word))?;
            }
            9 => {
                let file = ask_or_quit!(input, output, "Output file (e.g. graph.png): ");
                let target = file.trim();
                let target = (!target.is_empty()).then(|| Path::new(target));
                match session.render(target) {
                    Ok(path) => writeln!(output, "Graph saved to {}", path.display())?,
                    Err(e) => writeln!(output, "Render failed: {}", e)?,
                }
            }
            10 => return Ok(()),
            _ => writeln!(output, "Invalid option, enter a number from 1 to 10.")?,
        }
    }
}

/// Read one line of `input`; `None` at end of input
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
