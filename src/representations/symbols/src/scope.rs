use crate::SymbolId;
use indexmap::IndexMap;

/// Names visible within one module.
///
/// Redeclaring a name shadows the previous symbol, so overloaded
/// procedures resolve to the most recent declaration.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    names: IndexMap<String, SymbolId>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, id: SymbolId) {
        self.names.insert(name.into(), id);
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.names.get(name).copied()
    }
}
