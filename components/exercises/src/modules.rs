//! Module import/export: a real Rust boundary and a declarative mirror.
//!
//! The exercise is a pair of module boundary declarations with no runtime
//! behavior beyond name resolution. Two renditions: `string_functions` is
//! an actual module boundary the exercise imports across, and
//! [`ModuleGraph`] models the ES module records and their link step.

use es_values::{EsError, EsResult};

/// The exporting side of the boundary.
pub mod string_functions {
    /// Uppercase a string.
    pub fn uppercase_string(s: &str) -> String {
        s.to_uppercase()
    }

    /// Lowercase a string.
    pub fn lowercase_string(s: &str) -> String {
        s.to_lowercase()
    }
}

/// The status of a module record.
///
/// Linking is the whole lifecycle here; there is no evaluation step.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleStatus {
    /// Record created, imports not yet resolved
    Unlinked,
    /// Every import resolved against its exporting record
    Linked,
    /// Linking failed
    Error(EsError),
}

/// An import declaration: `import { name } from 'specifier'`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportEntry {
    /// The module specifier the name comes from
    pub module_specifier: String,
    /// The name exported by the target module
    pub import_name: String,
    /// The local binding name in the importing module
    pub local_name: String,
}

/// An export declaration: `export { local as name }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportEntry {
    /// The name the binding is exported as
    pub export_name: String,
    /// The local name of the binding
    pub local_name: String,
}

/// One module's record in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRecord {
    /// The module specifier other records import it by
    pub specifier: String,
    /// Import declarations
    pub imports: Vec<ImportEntry>,
    /// Export declarations
    pub exports: Vec<ExportEntry>,
    /// Current status
    pub status: ModuleStatus,
}

impl ModuleRecord {
    /// Create an unlinked record with no imports or exports.
    pub fn new(specifier: impl Into<String>) -> Self {
        ModuleRecord {
            specifier: specifier.into(),
            imports: Vec::new(),
            exports: Vec::new(),
            status: ModuleStatus::Unlinked,
        }
    }

    /// Add an export under its own name.
    pub fn export(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.exports.push(ExportEntry {
            export_name: name.clone(),
            local_name: name,
        });
        self
    }

    /// Add an import of `name` from `specifier`, bound under `name`.
    pub fn import(
        mut self,
        specifier: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.imports.push(ImportEntry {
            module_specifier: specifier.into(),
            import_name: name.clone(),
            local_name: name,
        });
        self
    }

    /// Whether the record exports the given name.
    pub fn provides(&self, name: &str) -> bool {
        self.exports.iter().any(|e| e.export_name == name)
    }
}

/// A set of module records and the link operation over them.
///
/// # Examples
///
/// ```
/// use exercises::{ModuleGraph, ModuleRecord, ModuleStatus};
///
/// let mut graph = ModuleGraph::new();
/// graph.add(ModuleRecord::new("./string_functions.js").export("uppercaseString"));
/// graph.add(ModuleRecord::new("./index.js").import("./string_functions.js", "uppercaseString"));
///
/// graph.link("./index.js").unwrap();
/// assert_eq!(graph.get("./index.js").unwrap().status, ModuleStatus::Linked);
/// ```
#[derive(Debug, Default)]
pub struct ModuleGraph {
    records: Vec<ModuleRecord>,
}

impl ModuleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        ModuleGraph::default()
    }

    /// Add a record to the graph.
    pub fn add(&mut self, record: ModuleRecord) {
        self.records.push(record);
    }

    /// Look up a record by specifier.
    pub fn get(&self, specifier: &str) -> Option<&ModuleRecord> {
        self.records.iter().find(|r| r.specifier == specifier)
    }

    /// Resolve every import of a record against its exporting record.
    ///
    /// On success the record becomes `Linked`; linking an already linked
    /// record is a no-op. On failure the record's status carries the
    /// error.
    ///
    /// # Errors
    ///
    /// A `ReferenceError` when the record itself is unknown, an imported
    /// specifier names no record in the graph, or the exporting record
    /// does not provide the imported name.
    pub fn link(&mut self, specifier: &str) -> EsResult<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.specifier == specifier)
            .ok_or_else(|| {
                EsError::reference_error(format!(
                    "Failed to resolve module specifier '{}'",
                    specifier
                ))
            })?;
        if self.records[index].status == ModuleStatus::Linked {
            return Ok(());
        }

        let imports = self.records[index].imports.clone();
        let result = imports.iter().try_for_each(|entry| {
            let exporter = self
                .records
                .iter()
                .find(|r| r.specifier == entry.module_specifier)
                .ok_or_else(|| {
                    EsError::reference_error(format!(
                        "Failed to resolve module specifier '{}'",
                        entry.module_specifier
                    ))
                })?;
            if !exporter.provides(&entry.import_name) {
                return Err(EsError::reference_error(format!(
                    "The requested module '{}' does not provide an export named '{}'",
                    entry.module_specifier, entry.import_name
                )));
            }
            Ok(())
        });

        match result {
            Ok(()) => {
                self.records[index].status = ModuleStatus::Linked;
                Ok(())
            }
            Err(error) => {
                self.records[index].status = ModuleStatus::Error(error.clone());
                Err(error)
            }
        }
    }
}
