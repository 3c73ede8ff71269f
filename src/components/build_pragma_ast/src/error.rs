use diagnostics::{DiagnosticId, DiagnosticRecord, Show, minimal_filename};
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};

#[derive(Clone, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: Source,
}

impl Show for ParseError {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        write!(
            w,
            "{}:{}:{}: error: {}",
            minimal_filename(self.source, source_files, project_root),
            self.source.location.line,
            self.source.location.column,
            self.kind,
        )
    }
}

impl From<ParseError> for DiagnosticRecord {
    fn from(error: ParseError) -> Self {
        DiagnosticRecord::error(DiagnosticId::ParseError, error.kind, error.source)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    ExpectedIdentifier,
    ExpectedDeclaration(String),
    ExpectedValue,
    Expected(char),
    ExpectedEndOfLine(char),
    UnterminatedString,
    UnterminatedPragmaBlock,
    IntegerOutOfRange(String),
    ModuleHeaderNotFirst,
}

impl ParseErrorKind {
    pub fn at(self, source: Source) -> ParseError {
        ParseError { kind: self, source }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedIdentifier => f.write_str("Expected identifier"),
            Self::ExpectedDeclaration(found) => write!(
                f,
                "Expected 'module', 'proc', 'var', 'field', 'type', 'use' or '{{.', got '{found}'"
            ),
            Self::ExpectedValue => f.write_str("Expected string, integer, identifier or list"),
            Self::Expected(c) => write!(f, "Expected '{c}'"),
            Self::ExpectedEndOfLine(c) => write!(f, "Expected end of line, got '{c}'"),
            Self::UnterminatedString => f.write_str("Unterminated string literal"),
            Self::UnterminatedPragmaBlock => f.write_str("Unterminated pragma block, missing '.}'"),
            Self::IntegerOutOfRange(digits) => write!(f, "Integer '{digits}' is out of range"),
            Self::ModuleHeaderNotFirst => {
                f.write_str("'module' must come before any other item")
            }
        }
    }
}
