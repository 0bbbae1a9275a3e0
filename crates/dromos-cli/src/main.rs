//! Dromos command-line entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dromos_cli::load::NodeNames;
use dromos_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(
    name = "dromos",
    version,
    about = "Shortest-path tables for small router networks"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Name of the first node; nodes are consecutive characters from here.
    #[arg(long, global = true, default_value_t = 'u')]
    first_node: char,
}

#[derive(Subcommand)]
enum Command {
    /// Print the adjacency matrix and the full shortest-path table,
    /// writing both to files as well.
    Report {
        /// Network file to load.
        file: PathBuf,

        /// Where to write the adjacency matrix.
        #[arg(long, default_value = "matrix.txt")]
        matrix_file: PathBuf,

        /// Where to write the shortest-path table.
        #[arg(long, default_value = "LS.txt")]
        table_file: PathBuf,
    },

    /// Print the network as an adjacency matrix.
    Matrix {
        /// Network file to load.
        file: PathBuf,
    },

    /// Compute shortest paths from one node.
    Paths {
        /// Network file to load.
        file: PathBuf,

        /// Source node name.
        #[arg(long)]
        from: char,

        /// Destination node name; all other nodes when omitted.
        #[arg(long)]
        to: Option<char>,
    },

    /// Show network statistics.
    Stats {
        /// Network file to load.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let names = NodeNames::new(cli.first_node);

    match cli.command {
        Command::Report {
            file,
            matrix_file,
            table_file,
        } => commands::report::run(&file, &matrix_file, &table_file, &names, cli.quiet),
        Command::Matrix { file } => commands::matrix::run(&file, &names, cli.format, cli.quiet),
        Command::Paths { file, from, to } => {
            commands::paths::run(&file, from, to, &names, cli.format, cli.quiet)
        }
        Command::Stats { file } => commands::stats::run(&file, &names, cli.format, cli.quiet),
    }
}
