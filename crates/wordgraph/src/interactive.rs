//! Console collaborators: the per-step walk prompt and the walk log file.

use crate::loader::prepare_output_path;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use wordgraph_core::{Error, Result};
use wordgraph_graph::{StepDecider, WalkControl};

/// Asks on `output` before every walk step and reads the answer from `input`.
///
/// An empty line continues; `q` (any case) or end of input stops.
pub struct PromptDecider<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptDecider<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> StepDecider for PromptDecider<'_, R, W> {
    fn decide(&mut self, from: &str, to: &str) -> Result<WalkControl> {
        write!(
            self.output,
            "Next edge {}->{}. Press Enter to continue, or q then Enter to stop: ",
            from, to
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(WalkControl::Stop);
        }

        if line.trim().eq_ignore_ascii_case("q") {
            writeln!(self.output, "Walk stopped by user.")?;
            Ok(WalkControl::Stop)
        } else {
            Ok(WalkControl::Continue)
        }
    }
}

/// Open the walk log for appending, creating it inside `root` if needed
pub fn open_walk_log(root: &Path, path: &Path) -> Result<BufWriter<File>> {
    let full_path = prepare_output_path(root, path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&full_path)
        .map_err(|e| {
            Error::walk_log(format!(
                "cannot open walk log {}: {}",
                full_path.display(),
                e
            ))
        })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_prompt_answers() {
        let mut input = Cursor::new("\nQ\n");
        let mut output = Vec::new();
        let mut decider = PromptDecider::new(&mut input, &mut output);

        assert_eq!(decider.decide("a", "b").unwrap(), WalkControl::Continue);
        assert_eq!(decider.decide("b", "c").unwrap(), WalkControl::Stop);
        // exhausted input stops the walk
        assert_eq!(decider.decide("c", "d").unwrap(), WalkControl::Stop);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Next edge a->b."));
        assert!(shown.contains("Walk stopped by user."));
    }

    #[test]
    fn test_walk_log_appends() {
        let temp = TempDir::new().unwrap();
        for line in ["first", "second"] {
            let mut log = open_walk_log(temp.path(), Path::new("walk.txt")).unwrap();
            writeln!(log, "{}", line).unwrap();
            log.flush().unwrap();
        }
        let content = std::fs::read_to_string(temp.path().join("walk.txt")).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
