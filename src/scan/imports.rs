//! Regex-based import and data-reference extraction.
//!
//! Pattern matching over source text, not parsing: commented-out imports
//! and dynamically built file paths can over- or under-report. Everything
//! downstream treats the extracted lists as opaque best-effort facts.

use regex::Regex;

use crate::error::Result;

/// Facts extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFacts {
    /// Imported module names (`import x`, `from x import ...`).
    pub imports: Vec<String>,
    /// Quoted `.csv` paths appearing in the source.
    pub csv_refs: Vec<String>,
    /// Quoted `.json` paths appearing in the source.
    pub json_refs: Vec<String>,
}

/// Compiled patterns for scanning Python source.
pub struct ImportScanner {
    from_import: Regex,
    plain_import: Regex,
    csv_ref: Regex,
    json_ref: Regex,
}

impl ImportScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            from_import: Regex::new(r"(?m)^[ \t]*from\s+([\w.]+)\s+import\b")?,
            plain_import: Regex::new(r"(?m)^[ \t]*import\s+([\w.]+)")?,
            csv_ref: Regex::new(r#"['"]([\w/\\]+\.csv)['"]"#)?,
            json_ref: Regex::new(r#"['"]([\w/\\]+\.json)['"]"#)?,
        })
    }

    /// Extract imports and data-file references from source text.
    pub fn scan_source(&self, source: &str) -> SourceFacts {
        let mut facts = SourceFacts::default();

        for cap in self.from_import.captures_iter(source) {
            facts.imports.push(cap[1].to_string());
        }
        for cap in self.plain_import.captures_iter(source) {
            facts.imports.push(cap[1].to_string());
        }
        for cap in self.csv_ref.captures_iter(source) {
            facts.csv_refs.push(cap[1].to_string());
        }
        for cap in self.json_ref.captures_iter(source) {
            facts.json_refs.push(cap[1].to_string());
        }

        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> ImportScanner {
        ImportScanner::new().unwrap()
    }

    #[test]
    fn test_plain_imports() {
        let facts = scanner().scan_source("import os\nimport utils.helpers\n");
        assert_eq!(facts.imports, vec!["os", "utils.helpers"]);
    }

    #[test]
    fn test_from_imports() {
        let source = "from models import User\nfrom pkg.sub import thing\n";
        let facts = scanner().scan_source(source);
        assert_eq!(facts.imports, vec!["models", "pkg.sub"]);
    }

    #[test]
    fn test_indented_import_inside_function() {
        let source = "def lazy():\n    import heavy_module\n";
        let facts = scanner().scan_source(source);
        assert_eq!(facts.imports, vec!["heavy_module"]);
    }

    #[test]
    fn test_from_import_module_captured_once() {
        // `from x import y` must report the module x, not the symbol y.
        let facts = scanner().scan_source("from config import SETTINGS\n");
        assert_eq!(facts.imports, vec!["config"]);
    }

    #[test]
    fn test_data_file_references() {
        let source = r#"
df = read_csv('data/input.csv')
with open("settings.json") as f:
    pass
out = "results\final.csv"
"#;
        let facts = scanner().scan_source(source);
        assert_eq!(facts.csv_refs, vec!["data/input.csv", r"results\final.csv"]);
        assert_eq!(facts.json_refs, vec!["settings.json"]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(scanner().scan_source(""), SourceFacts::default());
    }

    #[test]
    fn test_non_import_lines_ignored() {
        let source = "x = 1\nprint('import-like string')\n# from a import b is discussed here\n";
        let facts = scanner().scan_source(source);
        assert!(facts.imports.is_empty());
    }
}
