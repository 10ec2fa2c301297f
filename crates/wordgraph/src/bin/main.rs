//! Wordgraph CLI

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use wordgraph::{EngineConfig, Session, run_menu, write_dot};
use wordgraph_core::ConfigProfile;
use wordgraph_graph::top_ranked;

/// Wordgraph - word-adjacency graph analysis for plain text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to build the graph from (relative to the allowed root)
    #[arg(short, long, env = "WORDGRAPH_FILE")]
    file: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration profile (structured, classic); ignored with --config
    #[arg(short, long, default_value = "structured")]
    profile: String,

    /// Directory that files must stay within (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Seed for bridge-word picks and walks
    #[arg(long)]
    seed: Option<u64>,

    /// Debug logging
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every edge with its weight
    Show,
    /// Print graph statistics as JSON
    Stats,
    /// Number of distinct successors of a word
    OutDegree { word: String },
    /// Number of distinct predecessors of a word
    InDegree { word: String },
    /// Weight of the edge SOURCE -> TARGET
    Weight { source: String, target: String },
    /// Bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },
    /// Insert bridge words into TEXT
    Augment { text: String },
    /// Shortest path; omit WORD2 for paths to every reachable word
    Path { word1: String, word2: Option<String> },
    /// PageRank of a word, or the top N words
    Rank {
        word: Option<String>,
        #[arg(long)]
        top: Option<usize>,
    },
    /// Interactive random walk (Enter continues, q stops)
    Walk,
    /// Render the graph to PNG with Graphviz
    Render {
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the DOT description instead of invoking Graphviz
        #[arg(long)]
        dot: Option<PathBuf>,
    },
    /// Numbered interactive menu (default)
    Menu,
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => args.profile.parse::<ConfigProfile>()?.create_config(),
    };
    if let Some(root) = &args.root {
        config.allowed_root = Some(root.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::info!("Wordgraph v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Profile: {} | Rank: {:?}", config.profile, config.rank);

    let mut session = Session::open(config, &args.file, args.seed)
        .with_context(|| format!("loading text from {}", args.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Show => write!(out, "{}", session.engine().graph())?,
        Command::Stats => {
            let stats = session.engine().stats();
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
        }
        Command::OutDegree { word } => {
            writeln!(out, "{}", session.engine().out_degree(&word))?;
        }
        Command::InDegree { word } => {
            writeln!(out, "{}", session.engine().in_degree(&word))?;
        }
        Command::Weight { source, target } => {
            writeln!(out, "{}", session.engine().edge_weight(&source, &target))?;
        }
        Command::Bridge { word1, word2 } => {
            writeln!(out, "{}", session.engine().query_bridge_words(&word1, &word2))?;
        }
        Command::Augment { text } => {
            writeln!(out, "{}", session.engine_mut().augment(&text))?;
        }
        Command::Path { word1, word2: Some(word2) } => {
            writeln!(out, "{}", session.engine().path_message(&word1, &word2))?;
        }
        Command::Path { word1, word2: None } => {
            let paths = session.engine().shortest_paths_from(&word1);
            if paths.is_empty() {
                writeln!(out, "No paths found.")?;
            }
            for (target, path) in &paths {
                writeln!(out, "{}: {} (weight {})", target, path, path.cost)?;
            }
        }
        Command::Rank { word: Some(word), .. } => {
            writeln!(out, "{}", session.engine().rank_of(&word))?;
        }
        Command::Rank { word: None, top } => {
            let ranks = session.engine().page_rank();
            for (word, score) in top_ranked(&ranks, top.unwrap_or(10)) {
                writeln!(out, "{:<20} {:.6}", word, score)?;
            }
        }
        Command::Walk => {
            drop(out);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut prompt_out = io::stdout();
            let walk = session.walk_interactive(&mut input, &mut prompt_out)?;
            println!("{}", walk.path_text());
            log::info!("Walk ended: {:?}", walk.end);
        }
        Command::Render { output, dot } => {
            if output.is_some() && dot.is_some() {
                bail!("--output and --dot are mutually exclusive");
            }
            let path = match dot {
                Some(dot) => write_dot(session.engine().graph(), session.root(), &dot)?,
                None => session.render(output.as_deref())?,
            };
            writeln!(out, "{}", path.display())?;
        }
        Command::Menu => {
            drop(out);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut menu_out = io::stdout();
            run_menu(&mut session, &mut input, &mut menu_out)?;
        }
    }

    Ok(())
}
