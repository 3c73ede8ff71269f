use indexmap::IndexSet;
use pragma_table::BuildDirectiveKind;

/// Module-level output that is handed to the backend as-is
#[derive(Clone, Debug, Default)]
pub struct BuildDirectives {
    /// Raw code from `emit`, in order
    pub emitted: Vec<String>,
    pub experimental: IndexSet<String>,
    pub entries: Vec<(BuildDirectiveKind, String)>,
}

impl BuildDirectives {
    pub fn of_kind(&self, kind: BuildDirectiveKind) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(entry_kind, _)| *entry_kind == kind)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty() && self.experimental.is_empty() && self.entries.is_empty()
    }
}
