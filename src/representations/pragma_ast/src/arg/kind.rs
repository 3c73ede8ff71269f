use super::PragmaArg;
use crate::PragmaInvocation;
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

#[derive(Clone, Debug)]
pub enum PragmaArgKind {
    Str(String),
    Int(i64),
    Ident(String),
    KeyValue {
        key: String,
        selector: Option<String>,
        value: Box<PragmaArg>,
    },
    List(Vec<PragmaArg>),
}

impl PragmaArgKind {
    pub fn at(self, source: Source) -> PragmaArg {
        PragmaArg::new(self, source)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Ident(_) => "identifier",
            Self::KeyValue { .. } => "key-value pair",
            Self::List(_) => "list",
        }
    }
}

impl PragmaArg {
    /// Reinterprets an argument as a nested pragma invocation.
    ///
    /// Used by `push` and `pragma`, whose arguments are themselves
    /// pragmas (`{.pragma: rtl, exportc, header: "rtl.h".}`).
    pub fn to_invocation(&self) -> Option<PragmaInvocation> {
        match &self.kind {
            PragmaArgKind::Ident(name) => Some(PragmaInvocation::new(name.clone(), self.source)),
            PragmaArgKind::KeyValue {
                key,
                selector,
                value,
            } => Some(
                PragmaInvocation::new(key.clone(), self.source)
                    .with_selector(selector.clone())
                    .with_args(vec![(**value).clone()]),
            ),
            _ => None,
        }
    }
}

impl Display for PragmaArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PragmaArgKind::Str(value) => write!(f, "{:?}", value),
            PragmaArgKind::Int(value) => write!(f, "{}", value),
            PragmaArgKind::Ident(name) => f.write_str(name),
            PragmaArgKind::KeyValue {
                key,
                selector,
                value,
            } => {
                f.write_str(key)?;
                if let Some(selector) = selector {
                    write!(f, "[{}]", selector)?;
                }
                write!(f, ": {}", value)
            }
            PragmaArgKind::List(items) => write!(f, "[{}]", items.iter().format(", ")),
        }
    }
}
