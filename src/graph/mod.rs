//! Dependency graph module — data model, engine, and builder.

pub mod builder;
pub mod engine;
pub mod types;

pub use builder::build_graph;
pub use engine::{DependencyGraph, GraphStats};
pub use types::{EdgeData, EdgeKind, ModuleFacts, NodeData, NodeKind};
