//! Graphviz adapter: DOT files and PNG rendering through the `dot` tool.

use crate::loader::prepare_output_path;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use wordgraph_core::{Error, Result};
use wordgraph_graph::{WordGraph, to_dot};

/// Layout tool invoked for PNG output
pub const DOT_PROGRAM: &str = "dot";

/// Write the DOT description of `graph` to `path` inside `root`
pub fn write_dot(graph: &WordGraph, root: &Path, path: &Path) -> Result<PathBuf> {
    let full_path = prepare_output_path(root, path)?;
    fs::write(&full_path, to_dot(graph))?;
    Ok(full_path)
}

/// Render `graph` to a PNG at `output` (inside `root`) using Graphviz.
///
/// The DOT text goes to a temporary file that is removed afterwards. A
/// missing `dot` binary or a non-zero exit status is a `RenderError`.
pub fn render_png(graph: &WordGraph, root: &Path, output: &Path) -> Result<PathBuf> {
    render_with(DOT_PROGRAM, graph, root, output)
}

pub(crate) fn render_with(
    program: &str,
    graph: &WordGraph,
    root: &Path,
    output: &Path,
) -> Result<PathBuf> {
    let image_path = prepare_output_path(root, output)?;

    let mut dot_file = tempfile::Builder::new()
        .prefix("graph")
        .suffix(".dot")
        .tempfile()?;
    dot_file.write_all(to_dot(graph).as_bytes())?;
    dot_file.flush()?;

    let result = Command::new(program)
        .arg("-Tpng")
        .arg(dot_file.path())
        .arg("-o")
        .arg(&image_path)
        .output();

    match result {
        Err(e) => {
            log::warn!("Could not run {}: {}", program, e);
            Err(Error::render_error(format!(
                "failed to run {} (is Graphviz installed and on PATH?): {}",
                program, e
            )))
        }
        Ok(out) if !out.status.success() => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            log::warn!("{} exited with {}: {}", program, out.status, stderr.trim());
            Err(Error::render_error(format!(
                "{} exited with {}: {}",
                program,
                out.status,
                stderr.trim()
            )))
        }
        Ok(_) => {
            log::info!("Graph image saved to {}", image_path.display());
            Ok(image_path)
        }
    }
}
