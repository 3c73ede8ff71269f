use derive_more::IsVariant;
use pragma_ast::TargetKind;
use symbols::{SymbolId, SymbolTable};

/// What a pragma invocation is attached to
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum PragmaTarget {
    Symbol(SymbolId),
    Statement,
    Module,
}

impl PragmaTarget {
    pub fn kind(&self, symbols: &SymbolTable) -> TargetKind {
        match self {
            Self::Symbol(id) => symbols.get(*id).kind.target_kind(),
            Self::Statement => TargetKind::Statement,
            Self::Module => TargetKind::Module,
        }
    }
}
