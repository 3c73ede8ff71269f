use crate::CompileOptions;
use diagnostics::{DiagnosticFlags, SuppressionTable};

/// Run-wide configuration, typically assembled from the command line.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Options every module starts from before its own `push` pragmas
    pub baseline: CompileOptions,
    /// Initial state of the hint/warning suppression table
    pub suppression: SuppressionTable,
    pub diagnostic_flags: DiagnosticFlags,
    pub dump_symbols: bool,
}
