use diagnostics::{DiagnosticId, DiagnosticKind, DiagnosticRecord, Show};
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};

#[derive(Clone, Debug)]
pub struct PragmaError {
    pub kind: PragmaErrorKind,
    pub source: Source,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PragmaErrorKind {
    UnknownPragma(String),
    InvalidPragmaArguments { name: String, reason: String },
    PragmaTargetMismatch { name: String, target: String },
    UnbalancedPop,
    UserError(String),
    UserFatal(String),
    DuplicateUserPragmaAlias(String),
}

impl PragmaErrorKind {
    pub fn at(self, source: Source) -> PragmaError {
        PragmaError { kind: self, source }
    }

    pub fn invalid_arguments(name: impl ToString, reason: impl ToString) -> Self {
        Self::InvalidPragmaArguments {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn id(&self) -> DiagnosticId {
        match self {
            Self::UnknownPragma(_) => DiagnosticId::UnknownPragma,
            Self::InvalidPragmaArguments { .. } => DiagnosticId::InvalidPragmaArguments,
            Self::PragmaTargetMismatch { .. } => DiagnosticId::PragmaTargetMismatch,
            Self::UnbalancedPop => DiagnosticId::UnbalancedPop,
            Self::UserError(_) | Self::UserFatal(_) => DiagnosticId::User,
            Self::DuplicateUserPragmaAlias(_) => DiagnosticId::DuplicateUserPragmaAlias,
        }
    }

    pub fn severity(&self) -> DiagnosticKind {
        match self {
            Self::UserFatal(_) => DiagnosticKind::Fatal,
            _ => DiagnosticKind::Error,
        }
    }
}

impl Display for PragmaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPragma(name) => write!(f, "Unknown pragma '{name}'"),
            Self::InvalidPragmaArguments { name, reason } => {
                write!(f, "Invalid arguments for pragma '{name}': {reason}")
            }
            Self::PragmaTargetMismatch { name, target } => {
                write!(f, "Pragma '{name}' cannot be applied to a {target}")
            }
            Self::UnbalancedPop => f.write_str("'pop' without a matching 'push'"),
            Self::UserError(message) | Self::UserFatal(message) => f.write_str(message),
            Self::DuplicateUserPragmaAlias(name) => {
                write!(f, "Pragma '{name}' is already defined")
            }
        }
    }
}

impl From<PragmaError> for DiagnosticRecord {
    fn from(error: PragmaError) -> Self {
        DiagnosticRecord::new(
            error.kind.severity(),
            error.kind.id(),
            &error.kind,
            Some(error.source),
        )
    }
}

impl Show for PragmaError {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        DiagnosticRecord::from(self.clone()).show(w, source_files, project_root)
    }
}
