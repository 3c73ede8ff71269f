use crate::DiagnosticKind;
use std::{fmt::Display, str::FromStr};

/// Identifier attached to every diagnostic, used as the key for suppression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticId {
    /// `error`/`fatal` raised by the program itself
    User,
    UserWarning,
    UserHint,
    Deprecated,
    XDeclaredButNotUsed,
    ConflictingPragmas,
    UnbalancedPush,
    UnknownPragma,
    InvalidPragmaArguments,
    PragmaTargetMismatch,
    UnbalancedPop,
    DuplicateUserPragmaAlias,
    UndeclaredIdentifier,
    ParseError,
}

impl DiagnosticId {
    pub const ALL: &'static [DiagnosticId] = &[
        Self::User,
        Self::UserWarning,
        Self::UserHint,
        Self::Deprecated,
        Self::XDeclaredButNotUsed,
        Self::ConflictingPragmas,
        Self::UnbalancedPush,
        Self::UnknownPragma,
        Self::InvalidPragmaArguments,
        Self::PragmaTargetMismatch,
        Self::UnbalancedPop,
        Self::DuplicateUserPragmaAlias,
        Self::UndeclaredIdentifier,
        Self::ParseError,
    ];

    /// Id of a message raised by a `hint` or `warning` pragma.
    pub fn user_message(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Hint => Self::UserHint,
            DiagnosticKind::Warning | DiagnosticKind::Error | DiagnosticKind::Fatal => {
                Self::UserWarning
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::UserWarning => "UserWarning",
            Self::UserHint => "UserHint",
            Self::Deprecated => "Deprecated",
            Self::XDeclaredButNotUsed => "XDeclaredButNotUsed",
            Self::ConflictingPragmas => "ConflictingPragmas",
            Self::UnbalancedPush => "UnbalancedPush",
            Self::UnknownPragma => "UnknownPragma",
            Self::InvalidPragmaArguments => "InvalidPragmaArguments",
            Self::PragmaTargetMismatch => "PragmaTargetMismatch",
            Self::UnbalancedPop => "UnbalancedPop",
            Self::DuplicateUserPragmaAlias => "DuplicateUserPragmaAlias",
            Self::UndeclaredIdentifier => "UndeclaredIdentifier",
            Self::ParseError => "ParseError",
        }
    }
}

impl Display for DiagnosticId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDiagnosticId(pub String);

impl Display for UnknownDiagnosticId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown diagnostic identifier '{}'", self.0)
    }
}

impl FromStr for DiagnosticId {
    type Err = UnknownDiagnosticId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownDiagnosticId(s.into()))
    }
}
