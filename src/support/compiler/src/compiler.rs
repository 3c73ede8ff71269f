use crate::{BuildOptions, CompileOptions};
use diagnostics::Diagnostics;
use source_files::SourceFiles;

/// State owned by a single compilation run
pub struct Compiler<'a> {
    pub options: BuildOptions,
    pub source_files: &'a SourceFiles,
    pub diagnostics: Diagnostics<'a>,
}

impl<'a> Compiler<'a> {
    pub fn new(options: BuildOptions, source_files: &'a SourceFiles) -> Self {
        let diagnostics = Diagnostics::new(source_files, options.diagnostic_flags.clone())
            .with_suppression(options.suppression.clone());

        Self {
            options,
            source_files,
            diagnostics,
        }
    }

    pub fn baseline(&self) -> &CompileOptions {
        &self.options.baseline
    }

    pub fn is_halted(&self) -> bool {
        self.diagnostics.is_halted()
    }

    /// Converts the outcome of the run into the CLI's success/failure convention
    pub fn finish(&self) -> Result<(), ()> {
        if self.diagnostics.has_errors() {
            Err(())
        } else {
            Ok(())
        }
    }
}
