use indexmap::IndexMap;
use source_files::Source;

/// Deprecated name that now resolves to another symbol
#[derive(Clone, Debug)]
pub struct Rename {
    pub new_name: String,
    pub source: Source,
}

#[derive(Clone, Debug, Default)]
pub struct RenameTable {
    renames: IndexMap<String, Rename>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, old_name: impl Into<String>, rename: Rename) {
        self.renames.insert(old_name.into(), rename);
    }

    pub fn get(&self, old_name: &str) -> Option<&Rename> {
        self.renames.get(old_name)
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}
