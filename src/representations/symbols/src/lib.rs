mod renames;
mod scope;
mod symbol;

pub use renames::{Rename, RenameTable};
pub use scope::Scope;
pub use symbol::Symbol;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SymbolId;
}

/// Every symbol declared during a compilation run
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: SlotMap<SymbolId, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.insert(symbol)
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
