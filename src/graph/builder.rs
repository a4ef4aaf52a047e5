//! Graph builder — turns scanned module facts into the dependency graph.
//!
//! Every discovered module becomes a node. Import edges are only added
//! between modules that were both discovered in the scan; data-file
//! references create their target node on demand.

use std::collections::BTreeMap;
use tracing::debug;

use super::engine::DependencyGraph;
use super::types::{EdgeKind, ModuleFacts, NodeKind};

/// Build a dependency graph from per-module facts.
///
/// Imports of modules outside the scanned set are dropped: they would
/// only show up as dangling names with no further information. Dropping
/// is not an error; it is logged at debug level.
pub fn build_graph(facts: &BTreeMap<String, ModuleFacts>) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for module in facts.keys() {
        graph.add_node(module, NodeKind::Module);
    }

    for (module, details) in facts {
        let from = graph.add_node(module, NodeKind::Module);

        for dep in &details.dependencies {
            if dep == module {
                continue;
            }
            match graph.index_of(dep) {
                Some(to) => graph.add_edge(from, to, EdgeKind::Dependency),
                None => debug!(module = %module, dependency = %dep, "dropping unresolved import"),
            }
        }

        for csv in &details.csv_refs {
            let to = graph.add_node(csv, NodeKind::DataCsv);
            graph.add_edge(from, to, EdgeKind::DataReference);
        }

        for json in &details.json_refs {
            let to = graph.add_node(json, NodeKind::DataJson);
            graph.add_edge(from, to, EdgeKind::DataReference);
        }
    }

    graph
}
