use crate::{DiagnosticId, DiagnosticKind, Show, minimal_filename};
use source_files::{Source, SourceFiles};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct DiagnosticRecord {
    pub kind: DiagnosticKind,
    pub id: DiagnosticId,
    pub message: String,
    pub source: Option<Source>,
}

impl DiagnosticRecord {
    pub fn new(
        kind: DiagnosticKind,
        id: DiagnosticId,
        message: impl ToString,
        source: Option<Source>,
    ) -> Self {
        Self {
            kind,
            id,
            message: message.to_string(),
            source,
        }
    }

    pub fn hint(id: DiagnosticId, message: impl ToString, source: Source) -> Self {
        Self::new(DiagnosticKind::Hint, id, message, Some(source))
    }

    pub fn warning(id: DiagnosticId, message: impl ToString, source: Source) -> Self {
        Self::new(DiagnosticKind::Warning, id, message, Some(source))
    }

    pub fn error(id: DiagnosticId, message: impl ToString, source: Source) -> Self {
        Self::new(DiagnosticKind::Error, id, message, Some(source))
    }

    pub fn fatal(id: DiagnosticId, message: impl ToString, source: Source) -> Self {
        Self::new(DiagnosticKind::Fatal, id, message, Some(source))
    }
}

impl Show for DiagnosticRecord {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        if let Some(source) = self.source {
            write!(
                w,
                "{}:{}:{}: {} {} [{}]",
                minimal_filename(source, source_files, project_root),
                source.location.line,
                source.location.column,
                self.kind.colored_label(),
                self.message,
                self.id,
            )
        } else {
            write!(
                w,
                "{} {} [{}]",
                self.kind.colored_label(),
                self.message,
                self.id
            )
        }
    }
}
