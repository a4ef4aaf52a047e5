//! CLI definitions for depviz.
//!
//! Commands:
//! - scan:   list discovered modules and their extracted facts
//! - graph:  build the graph and print statistics
//! - layout: full pipeline, emit the scene as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depviz")]
#[command(about = "Render a Python project's dependency graph as a 2D scene")]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Directory to skip while scanning, relative to the root (repeatable)
    #[arg(short, long)]
    pub ignore: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List discovered modules and their extracted facts
    Scan,

    /// Build the dependency graph and print statistics
    Graph,

    /// Scan, build, lay out, and emit the render scene as JSON
    Layout {
        /// Write the scene here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Iterations for each layout phase
        #[arg(long)]
        iterations: Option<usize>,

        /// Target edge length for the spring embedding
        #[arg(long)]
        k: Option<f64>,

        /// Seed for the randomized initial placement
        #[arg(long)]
        seed: Option<u64>,
    },
}
