use crate::{BuildDirectives, UserPragmaAlias};
use compiler::{CompileOptions, Compiler, OptionStack};
use diagnostics::DiagnosticRecord;
use indexmap::IndexMap;
use pragma_table::PragmaTable;
use source_files::Source;
use symbols::{RenameTable, Scope, SymbolId, SymbolTable};

/// State shared by every module of a compilation run
pub struct PragmaCtx<'a> {
    pub table: &'a PragmaTable,
    pub compiler: Compiler<'a>,
    pub symbols: SymbolTable,
}

impl<'a> PragmaCtx<'a> {
    pub fn new(table: &'a PragmaTable, compiler: Compiler<'a>) -> Self {
        Self {
            table,
            compiler,
            symbols: SymbolTable::new(),
        }
    }

    pub fn is_halted(&self) -> bool {
        self.compiler.is_halted()
    }

    pub fn report(&mut self, record: impl Into<DiagnosticRecord>) -> bool {
        self.compiler.diagnostics.push(record.into())
    }
}

/// State scoped to the module currently being processed
#[derive(Debug)]
pub struct ModuleCtx {
    pub name: String,
    pub options: OptionStack,
    pub aliases: IndexMap<String, UserPragmaAlias>,
    pub renames: RenameTable,
    pub scope: Scope,
    pub declared: Vec<SymbolId>,
    pub directives: BuildDirectives,
    pub(crate) open_pushes: Vec<Source>,
}

impl ModuleCtx {
    pub fn new(name: impl Into<String>, baseline: CompileOptions) -> Self {
        Self {
            name: name.into(),
            options: OptionStack::new(baseline),
            aliases: IndexMap::new(),
            renames: RenameTable::new(),
            scope: Scope::new(),
            declared: Vec::new(),
            directives: BuildDirectives::default(),
            open_pushes: Vec::new(),
        }
    }
}
