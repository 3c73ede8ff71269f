use crate::{PragmaInvocation, TargetKind};
use derive_more::From;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Module {
    pub name: String,
    pub pragmas: Vec<PragmaInvocation>,
    pub items: Vec<Item>,
    pub source: Source,
}

#[derive(Clone, Debug, From)]
pub enum Item {
    Declaration(Declaration),
    PragmaStmt(PragmaStmt),
    Reference(Reference),
}

#[derive(Clone, Debug)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub pragmas: Vec<PragmaInvocation>,
    pub source: Source,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Proc,
    Variable,
    Field,
    Type,
}

impl DeclKind {
    pub fn target_kind(&self) -> TargetKind {
        match self {
            Self::Proc => TargetKind::Proc,
            Self::Variable => TargetKind::Variable,
            Self::Field => TargetKind::Field,
            Self::Type => TargetKind::Type,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Proc => "proc",
            Self::Variable => "var",
            Self::Field => "field",
            Self::Type => "type",
        }
    }
}

/// A standalone pragma block, such as `{.push checks: off.}`
#[derive(Clone, Debug)]
pub struct PragmaStmt {
    pub pragmas: Vec<PragmaInvocation>,
    pub source: Source,
}

/// A use site of a name, resolved against the module scope
#[derive(Clone, Debug)]
pub struct Reference {
    pub name: String,
    pub source: Source,
}
