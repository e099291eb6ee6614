//! CLI entry point for the `pdecay` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use packet_decay::cli::commands;
use packet_decay::types::parse_single_label;
use packet_decay::GraphError;

#[derive(Parser)]
#[command(
    name = "pdecay",
    about = "Packet-decay expiration queries over a lettered network"
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
    /// Print the network's adjacency
    Show {
        /// Input file ("-" for stdin); the first line is the network description
        file: PathBuf,
    },
    /// Print the neighbors of a vertex
    Neighbors {
        /// Input file ("-" for stdin)
        file: PathBuf,
        /// Vertex letter
        vertex: String,
    },
    /// Breadth-first traversal with distance groups
    Traverse {
        /// Input file ("-" for stdin)
        file: PathBuf,
        /// Start vertex letter
        start: String,
    },
    /// Count vertices a packet cannot reach within a hop budget
    Expire {
        /// Input file ("-" for stdin)
        file: PathBuf,
        /// Start vertex letter
        start: String,
        /// Hop budget
        expiration: u32,
    },
    /// Print the network, then answer every query line in the input
    Run {
        /// Input file ("-" for stdin)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Neighbors { file, vertex } => parse_single_label(&vertex)
            .and_then(|v| commands::cmd_neighbors(&file, v, json)),
        Commands::Traverse { file, start } => parse_single_label(&start)
            .and_then(|s| commands::cmd_traverse(&file, s, json)),
        Commands::Expire {
            file,
            start,
            expiration,
        } => parse_single_label(&start)
            .and_then(|s| commands::cmd_expire(&file, s, expiration, json)),
        Commands::Run { file } => commands::cmd_run(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedInput(_) => 2,
            GraphError::InvalidVertexLabel(_) | GraphError::VertexNotFound(_) => 4,
            GraphError::NoTraversal => 5,
        };
        process::exit(code);
    }
}
