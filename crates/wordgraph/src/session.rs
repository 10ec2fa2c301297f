//! A loaded text source plus the engine built from it.

use crate::interactive::{PromptDecider, open_walk_log};
use crate::loader::read_text_file;
use crate::render::render_png;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use wordgraph_core::{EngineConfig, Result};
use wordgraph_graph::{Engine, StepDecider, Walk};

pub struct Session {
    engine: Engine,
    root: PathBuf,
    source: PathBuf,
}

impl Session {
    /// Read `file` (relative to the configured root) and build its graph
    pub fn open(config: EngineConfig, file: &Path, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let root = config.resolved_root()?;
        let text = read_text_file(&root, file)?;

        let mut engine = match seed {
            Some(seed) => Engine::with_seed(config, seed),
            None => Engine::new(config),
        };
        engine.load_text(&text);

        Ok(Self {
            engine,
            root,
            source: file.to_path_buf(),
        })
    }

    /// Re-read the source file and rebuild the graph from scratch
    pub fn reload(&mut self) -> Result<()> {
        let text = read_text_file(&self.root, &self.source)?;
        self.engine.load_text(&text);
        Ok(())
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk with an arbitrary decider, appending to the configured walk log
    pub fn walk_with<D: StepDecider + ?Sized>(&mut self, decider: &mut D) -> Result<Walk> {
        let log_path = self.engine.config().walk_log.clone();
        let mut log = open_walk_log(&self.root, &log_path)?;
        let walk = self.engine.random_walk(decider, &mut log)?;
        log::info!("Walk saved to {}", log_path.display());
        Ok(walk)
    }

    /// Walk asking on `output` before every step
    pub fn walk_interactive<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Walk> {
        let mut decider = PromptDecider::new(input, output);
        self.walk_with(&mut decider)
    }

    /// Render to `output`, or the configured image path when `None`
    pub fn render(&self, output: Option<&Path>) -> Result<PathBuf> {
        let target = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.engine.config().graph_image.clone());
        render_png(self.engine.graph(), &self.root, &target)
    }
}
