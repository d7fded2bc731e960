//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use walkgraph::cli::commands;
use walkgraph::graph::SearchType;
use walkgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph: inspect and traverse undirected graphs stored as JSON"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node/edge counts and node degrees
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// List the neighbors of a node
    Neighbors {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Node value
        node: String,
    },
    /// Traverse from a start node, optionally filtering the output
    Traverse {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Start node value
        #[arg(long)]
        start: String,
        /// Search order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        mode: String,
        /// Drop values containing this character (repeatable)
        #[arg(long)]
        skip: Vec<char>,
        /// Keep only values containing this character (repeatable)
        #[arg(long)]
        keep: Vec<char>,
        /// Combine filters with OR instead of AND
        #[arg(long)]
        any: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, &node, json),
        Commands::Traverse {
            file,
            start,
            mode,
            skip,
            keep,
            any,
        } => {
            let mode = match SearchType::from_name(&mode) {
                Some(mode) => mode,
                None => {
                    eprintln!("Invalid search mode: {}", mode);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, &start, mode, &skip, &keep, any, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse(_) | GraphError::NullValue(_) => 2,
            GraphError::NotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
