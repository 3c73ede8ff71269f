mod kind;

pub use kind::PragmaArgKind;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct PragmaArg {
    pub kind: PragmaArgKind,
    pub source: Source,
}

impl PragmaArg {
    pub fn new(kind: PragmaArgKind, source: Source) -> Self {
        Self { kind, source }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            PragmaArgKind::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match &self.kind {
            PragmaArgKind::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            PragmaArgKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Identifier or string, for arguments that accept either spelling
    pub fn as_word(&self) -> Option<&str> {
        self.as_ident().or_else(|| self.as_str())
    }

    /// Interprets `on`/`off`/`true`/`false`
    pub fn as_switch(&self) -> Option<bool> {
        match self.as_ident()? {
            "on" | "true" => Some(true),
            "off" | "false" => Some(false),
            _ => None,
        }
    }

    /// Interprets `[Old: New, ...]` as a list of renames
    pub fn as_rename_list(&self) -> Option<Vec<(&str, &str, Source)>> {
        let PragmaArgKind::List(items) = &self.kind else {
            return None;
        };

        items
            .iter()
            .map(|item| match &item.kind {
                PragmaArgKind::KeyValue {
                    key,
                    selector: None,
                    value,
                } => value.as_ident().map(|new| (key.as_str(), new, item.source)),
                _ => None,
            })
            .collect()
    }
}
