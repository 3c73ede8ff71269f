/*
    ==================  components/pragma_table/src/lib.rs  ===================
    Registry of every pragma the compiler understands.

    Each entry describes which syntactic targets the pragma may annotate,
    the shape of its arguments, and which handler applies its effect.
    ---------------------------------------------------------------------------
*/

mod builtin;
mod handler;
mod shape;

pub use handler::{BitsKind, BuildDirectiveKind, PragmaHandler, TextKind};
use indexmap::IndexMap;
use pragma_ast::{TargetKind, normalize_name};
pub use shape::{ArgKind, ArgShape, ArgShapeMismatch};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct PragmaSpec {
    pub name: String,
    pub targets: &'static [TargetKind],
    pub shape: ArgShape,
    pub handler: PragmaHandler,
}

impl PragmaSpec {
    pub fn allows(&self, target: TargetKind) -> bool {
        self.targets.contains(&target)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicatePragma {
    pub name: String,
}

impl Display for DuplicatePragma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pragma '{}' is registered more than once", self.name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PragmaTable {
    specs: IndexMap<String, PragmaSpec>,
}

impl PragmaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table containing every builtin pragma
    pub fn builtin() -> Self {
        let mut table = Self::new();
        builtin::register_builtins(&mut table)
            .unwrap_or_else(|duplicate| panic!("invalid builtin pragma table: {duplicate}"));
        table
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        targets: &'static [TargetKind],
        shape: ArgShape,
        handler: PragmaHandler,
    ) -> Result<(), DuplicatePragma> {
        let name = name.into();
        let key = normalize_name(&name);

        if self.specs.contains_key(&key) {
            return Err(DuplicatePragma { name });
        }

        self.specs.insert(
            key,
            PragmaSpec {
                name,
                targets,
                shape,
                handler,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&PragmaSpec> {
        self.specs.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PragmaSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
