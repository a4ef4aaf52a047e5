//! Source scanning — walks a project tree and extracts dependency facts.
//!
//! Walks Python files respecting .gitignore plus any user-supplied ignore
//! directories, scans each file for imports and data-file references, and
//! returns the per-module facts the graph builder consumes.

pub mod imports;

use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::graph::ModuleFacts;

pub use imports::{ImportScanner, SourceFacts};

/// Walk `root` and collect facts for every Python module found.
///
/// `ignore_dirs` entries are resolved relative to `root` unless absolute.
/// Unreadable files are skipped with a warning; the scan itself never
/// fails.
pub fn scan_project(
    root: &Path,
    ignore_dirs: &[PathBuf],
    scanner: &ImportScanner,
) -> BTreeMap<String, ModuleFacts> {
    let files = find_python_files(root, ignore_dirs);
    debug!(files = files.len(), root = %root.display(), "scanning project");

    let facts: Mutex<BTreeMap<String, ModuleFacts>> = Mutex::new(BTreeMap::new());

    files.par_iter().for_each(|path| {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                return;
            }
        };
        let extracted = scanner.scan_source(&source);
        let module = module_name(root, path);
        if let Ok(mut map) = facts.lock() {
            map.insert(
                module,
                ModuleFacts {
                    dependencies: extracted.imports,
                    csv_refs: extracted.csv_refs,
                    json_refs: extracted.json_refs,
                },
            );
        }
    });

    facts.into_inner().unwrap_or_default()
}

/// Recursively find all Python files under `root`, excluding ignored
/// directories.
pub fn find_python_files(root: &Path, ignore_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let ignored: Vec<PathBuf> = ignore_dirs
        .iter()
        .map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                root.join(dir)
            }
        })
        .collect();

    WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(move |entry| !ignored.iter().any(|dir| entry.path().starts_with(dir)))
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == "py" || ext == "pyw")
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Dotted module name for a file: path relative to the root, separators
/// replaced with dots, extension stripped.
pub fn module_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_from_nested_path() {
        let root = Path::new("/proj");
        assert_eq!(module_name(root, Path::new("/proj/app.py")), "app");
        assert_eq!(
            module_name(root, Path::new("/proj/pkg/sub/util.py")),
            "pkg.sub.util"
        );
    }

    #[test]
    fn test_find_python_files_skips_ignored_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.py"), "import os\n").unwrap();
        fs::create_dir(dir.path().join("venv")).unwrap();
        fs::write(dir.path().join("venv").join("lib.py"), "import sys\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not python").unwrap();

        let files = find_python_files(dir.path(), &[PathBuf::from("venv")]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("main.py"));
    }

    #[test]
    fn test_scan_project_collects_facts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("app.py"),
            "import util\n\nrows = load('records.csv')\n",
        )
        .unwrap();
        fs::write(dir.path().join("util.py"), "import json\n").unwrap();

        let scanner = ImportScanner::new().unwrap();
        let facts = scan_project(dir.path(), &[], &scanner);

        assert_eq!(facts.len(), 2);
        assert_eq!(facts["app"].dependencies, vec!["util"]);
        assert_eq!(facts["app"].csv_refs, vec!["records.csv"]);
        assert_eq!(facts["util"].dependencies, vec!["json"]);
    }
}
