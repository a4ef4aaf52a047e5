//! # depviz
//!
//! Dependency graph scenes for Python projects.
//!
//! depviz scans a project tree for Python modules, extracts import and
//! data-file references with best-effort pattern matching, builds a typed
//! directed graph, and computes a force-directed 2D layout with overlap
//! resolution. The output is a serializable scene (positions plus visual
//! attributes) for an external renderer.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use depviz::{build_graph, compute_layout, scan_project, ImportScanner, LayoutParams, Scene};
//! use std::path::Path;
//!
//! # fn main() -> depviz::Result<()> {
//! let scanner = ImportScanner::new()?;
//! let facts = scan_project(Path::new("."), &[], &scanner);
//! let graph = build_graph(&facts);
//! let positions = compute_layout(&graph, &LayoutParams::default());
//! let scene = Scene::assemble(&graph, &positions);
//! # Ok(()) }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod scan;
pub mod scene;

// Re-exports for convenience
pub use config::Config;
pub use error::{DepvizError, Result};
pub use graph::{build_graph, DependencyGraph, EdgeKind, GraphStats, ModuleFacts, NodeKind};
pub use layout::{compute_layout, node_radius, LayoutParams, Position};
pub use scan::{find_python_files, scan_project, ImportScanner, SourceFacts};
pub use scene::{edge_style, marker_size, node_color, Scene, SceneEdge, SceneNode};
