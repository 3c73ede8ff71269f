use attributes::{AttributeSet, SymbolOwnership};
use compiler::CompileOptions;
use pragma_ast::DeclKind;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub kind: DeclKind,
    pub module: String,
    pub attributes: AttributeSet,
    /// Effective compile options at the point of declaration
    pub options: CompileOptions,
    pub source: Source,
    pub referenced: bool,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        kind: DeclKind,
        module: impl Into<String>,
        options: CompileOptions,
        source: Source,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            module: module.into(),
            attributes: AttributeSet::new(),
            options,
            source,
            referenced: false,
        }
    }

    pub fn ownership(&self) -> SymbolOwnership {
        SymbolOwnership::of(&self.attributes)
    }
}
