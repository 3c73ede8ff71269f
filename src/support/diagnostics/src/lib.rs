mod id;
mod kind;
mod record;
mod show;
mod suppression;

use core::fmt::Debug;
pub use id::{DiagnosticId, UnknownDiagnosticId};
pub use kind::DiagnosticKind;
pub use record::DiagnosticRecord;
pub use show::{Show, minimal_filename};
use source_files::{Source, SourceFiles};
use std::path::PathBuf;
pub use suppression::SuppressionTable;

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub project_root: Option<PathBuf>,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            project_root: None,
        }
    }
}

impl DiagnosticFlags {
    pub fn collecting() -> Self {
        Self {
            print_without_collecting: false,
            ..Default::default()
        }
    }
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    records: Vec<DiagnosticRecord>,
    suppression: SuppressionTable,
    flags: DiagnosticFlags,
    num_errors: usize,
    halted: bool,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("num_errors", &self.num_errors)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            records: Vec::new(),
            suppression: SuppressionTable::default(),
            flags,
            num_errors: 0,
            halted: false,
        }
    }

    pub fn with_suppression(mut self, suppression: SuppressionTable) -> Self {
        self.suppression = suppression;
        self
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn source_files(&self) -> &'a SourceFiles {
        self.source_files
    }

    pub fn suppression(&self) -> &SuppressionTable {
        &self.suppression
    }

    pub fn suppression_mut(&mut self) -> &mut SuppressionTable {
        &mut self.suppression
    }

    pub fn emit(
        &mut self,
        kind: DiagnosticKind,
        id: DiagnosticId,
        message: impl ToString,
        source: Option<Source>,
    ) -> bool {
        self.push(DiagnosticRecord::new(kind, id, message, source))
    }

    /// Records a diagnostic unless it is suppressed.
    /// Returns whether the diagnostic was kept.
    pub fn push(&mut self, record: DiagnosticRecord) -> bool {
        if !self.suppression.allows(record.kind, record.id) {
            return false;
        }

        if record.kind.is_failure() {
            self.num_errors += 1;
        }

        if record.kind.is_fatal() {
            self.halted = true;
        }

        if self.flags.print_without_collecting {
            self.print(&record);
        } else {
            self.records.push(record);
        }

        true
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn take_records(&mut self) -> Vec<DiagnosticRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn has_errors(&self) -> bool {
        self.num_errors > 0
    }

    /// Whether a fatal diagnostic has been recorded
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn print_all(&self) {
        for record in self.records.iter() {
            self.print(record);
        }
    }

    pub fn print(&self, diagnostic: &dyn Show) {
        diagnostic.eprintln(self.source_files, self.flags.project_root.as_deref());
    }
}
