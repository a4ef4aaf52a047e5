//! depviz CLI - dependency graph scenes for Python projects.
//!
//! Usage:
//!   depviz scan                  # List modules and extracted facts
//!   depviz graph                 # Graph statistics as JSON
//!   depviz layout                # Scene JSON on stdout
//!   depviz layout -o scene.json  # Scene JSON to a file
//!   depviz -i venv layout        # Skip a directory while scanning

use anyhow::Result;
use clap::Parser;
use std::fs;

use depviz::cli::{Cli, Commands};
use depviz::{build_graph, compute_layout, scan_project, Config, ImportScanner, Scene};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli.root.canonicalize().unwrap_or_else(|_| cli.root.clone());

    let mut config = Config::load(&root)?;
    config.ignore.extend(cli.ignore.iter().cloned());

    let scanner = ImportScanner::new()?;
    let facts = scan_project(&root, &config.ignore, &scanner);

    match cli.command {
        Commands::Scan => {
            for (module, f) in &facts {
                println!(
                    "{module}: {} imports, {} csv refs, {} json refs",
                    f.dependencies.len(),
                    f.csv_refs.len(),
                    f.json_refs.len()
                );
            }
            println!("{} modules discovered", facts.len());
        }

        Commands::Graph => {
            let graph = build_graph(&facts);
            println!("{}", serde_json::to_string_pretty(&graph.stats())?);
        }

        Commands::Layout {
            output,
            iterations,
            k,
            seed,
        } => {
            let graph = build_graph(&facts);

            let mut params = config.layout;
            if let Some(iterations) = iterations {
                params.iterations = iterations;
            }
            if let Some(k) = k {
                params.k = k;
            }
            if let Some(seed) = seed {
                params.seed = seed;
            }

            let positions = compute_layout(&graph, &params);
            let scene = Scene::assemble(&graph, &positions);
            let json = serde_json::to_string_pretty(&scene)?;

            match output {
                Some(path) => fs::write(&path, json)?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
