use colored::Colorize;
use derive_more::IsVariant;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IsVariant)]
pub enum DiagnosticKind {
    Hint,
    Warning,
    Error,
    Fatal,
}

impl DiagnosticKind {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }

    pub fn colored_label(&self) -> colored::ColoredString {
        match self {
            Self::Hint => "hint:".cyan().bold(),
            Self::Warning => "warning:".yellow().bold(),
            Self::Error => "error:".red().bold(),
            Self::Fatal => "fatal:".red().bold().underline(),
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hint => "hint",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        })
    }
}
