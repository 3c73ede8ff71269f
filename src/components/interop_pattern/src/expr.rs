use itertools::Itertools;
use std::fmt::Display;

/// Already-generated argument text at a foreign call site
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteropExpr {
    Value(String),
    Pointer(String),
    Call { callee: String, args: Vec<String> },
}

impl InteropExpr {
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    pub fn pointer(text: impl Into<String>) -> Self {
        Self::Pointer(text.into())
    }

    pub fn call(callee: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Call {
            callee: callee.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Operator used to access a member through this expression
    pub fn member_access(&self) -> &'static str {
        match self {
            Self::Pointer(_) => "->",
            Self::Value(_) | Self::Call { .. } => ".",
        }
    }
}

impl Display for InteropExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(text) | Self::Pointer(text) => f.write_str(text),
            Self::Call { callee, args } => write!(f, "{}({})", callee, args.iter().format(", ")),
        }
    }
}

/// Foreign type used to fill `'N` slots
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForeignType {
    Named(String),
    Pointer(Box<ForeignType>),
    Generic { name: String, args: Vec<ForeignType> },
}

impl ForeignType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn pointer_to(inner: ForeignType) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Removes one level of indirection: the pointee of a pointer,
    /// or the first type argument of a generic.
    pub fn strip(&self) -> Option<&ForeignType> {
        match self {
            Self::Pointer(inner) => Some(inner),
            Self::Generic { args, .. } => args.first(),
            Self::Named(_) => None,
        }
    }

    pub fn strip_n(&self, levels: usize) -> Option<&ForeignType> {
        (0..levels).try_fold(self, |ty, _| ty.strip())
    }
}

impl Display for ForeignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Pointer(inner) => write!(f, "{}*", inner),
            Self::Generic { name, args } => write!(f, "{}<{}>", name, args.iter().format(", ")),
        }
    }
}
