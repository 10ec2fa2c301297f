//! # Wordgraph
//!
//! Outer surface of the word-graph engine: loading text from disk inside an
//! allowed root, rendering through Graphviz, the walk log and prompt, and the
//! interactive menu used by the `wordgraph` binary.

pub mod interactive;
pub mod loader;
pub mod menu;
pub mod render;
pub mod session;

pub use interactive::{PromptDecider, open_walk_log};
pub use loader::read_text_file;
pub use menu::run_menu;
pub use render::{render_png, write_dot};
pub use session::Session;
pub use wordgraph_core::prelude::*;
pub use wordgraph_graph::prelude::*;
