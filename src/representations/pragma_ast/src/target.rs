use derive_more::IsVariant;
use std::fmt::Display;

/// Syntactic category that a pragma may annotate
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum TargetKind {
    Proc,
    Variable,
    Field,
    Type,
    Statement,
    Module,
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Proc => "procedure",
            Self::Variable => "variable",
            Self::Field => "field",
            Self::Type => "type",
            Self::Statement => "statement",
            Self::Module => "module",
        })
    }
}
