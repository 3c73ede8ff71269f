use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteropError {
    MissingArgument { position: usize },
    CallExpressionExpected { position: usize },
    TypeSlotOutOfRange { index: usize, available: usize },
    UnknownCodegenPlaceholder(char),
}

impl Display for InteropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument { position } => {
                write!(f, "Pattern needs argument #{} but the call has no more", position + 1)
            }
            Self::CallExpressionExpected { position } => {
                write!(f, "Call expression expected for argument #{}", position + 1)
            }
            Self::TypeSlotOutOfRange { index, available } => write!(
                f,
                "Type slot '{}' is out of range, only {} types are available",
                index, available
            ),
            Self::UnknownCodegenPlaceholder(c) => {
                write!(f, "Unknown placeholder '${}' in codegenDecl format", c)
            }
        }
    }
}
