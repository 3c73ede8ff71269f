use itertools::Itertools;
use pragma_ast::{PragmaArg, PragmaArgKind, PragmaInvocation};
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgKind {
    Str,
    Int,
    Ident,
    /// `on`/`off`
    Switch,
    /// Identifier or string
    Word,
    /// `[Old: New, ...]`
    RenameList,
}

impl ArgKind {
    pub fn matches(&self, arg: &PragmaArg) -> bool {
        match self {
            Self::Str => arg.as_str().is_some(),
            Self::Int => arg.as_int().is_some(),
            Self::Ident => arg.as_ident().is_some(),
            Self::Switch => arg.as_switch().is_some(),
            Self::Word => arg.as_word().is_some(),
            Self::RenameList => arg.as_rename_list().is_some(),
        }
    }
}

impl Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Ident => "identifier",
            Self::Switch => "'on' or 'off'",
            Self::Word => "identifier or string",
            Self::RenameList => "list of 'Old: New' renames",
        })
    }
}

/// Argument contract of a pragma
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgShape {
    None,
    Optional(&'static [ArgKind]),
    One(&'static [ArgKind]),
    /// Different argument depending on whether `[Selector]` is present
    Selectable { plain: ArgKind, selected: ArgKind },
    /// `key: value` pairs, as taken by `push`
    OptionList,
    /// Alias name followed by the pragmas it stands for
    AliasDefinition,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgShapeMismatch(pub String);

impl Display for ArgShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ArgShape {
    pub fn check(&self, invocation: &PragmaInvocation) -> Result<(), ArgShapeMismatch> {
        let args = &invocation.args;

        if invocation.selector.is_some() && !matches!(self, Self::Selectable { .. }) {
            return Err(ArgShapeMismatch("does not accept a '[...]' selector".into()));
        }

        match self {
            Self::None => match args.len() {
                0 => Ok(()),
                count => Err(ArgShapeMismatch(format!(
                    "expects no arguments, got {count}"
                ))),
            },
            Self::Optional(kinds) => match args.as_slice() {
                [] => Ok(()),
                [arg] => expect_kind(kinds, arg),
                _ => Err(ArgShapeMismatch(format!(
                    "expects at most one argument, got {}",
                    args.len()
                ))),
            },
            Self::One(kinds) => match args.as_slice() {
                [arg] => expect_kind(kinds, arg),
                _ => Err(ArgShapeMismatch(format!(
                    "expects one {}, got {} arguments",
                    kinds.iter().format(" or "),
                    args.len()
                ))),
            },
            Self::Selectable { plain, selected } => {
                let kind = if invocation.selector.is_some() {
                    selected
                } else {
                    plain
                };

                match args.as_slice() {
                    [arg] => expect_kind(std::slice::from_ref(kind), arg),
                    _ => Err(ArgShapeMismatch(format!(
                        "expects one {kind}, got {} arguments",
                        args.len()
                    ))),
                }
            }
            Self::OptionList => {
                if args.is_empty() {
                    return Err(ArgShapeMismatch("expects at least one 'key: value'".into()));
                }

                match args.iter().find(|arg| {
                    !matches!(arg.kind, PragmaArgKind::KeyValue { selector: None, .. })
                }) {
                    Some(arg) => Err(ArgShapeMismatch(format!(
                        "expects 'key: value', got {}",
                        arg.kind.describe()
                    ))),
                    None => Ok(()),
                }
            }
            Self::AliasDefinition => {
                let Some((name, pragmas)) = args.split_first() else {
                    return Err(ArgShapeMismatch("expects a name for the new pragma".into()));
                };

                if name.as_ident().is_none() {
                    return Err(ArgShapeMismatch(format!(
                        "expects an identifier as the new pragma's name, got {}",
                        name.kind.describe()
                    )));
                }

                match pragmas.iter().find(|arg| arg.to_invocation().is_none()) {
                    Some(arg) => Err(ArgShapeMismatch(format!(
                        "expects pragmas after the name, got {}",
                        arg.kind.describe()
                    ))),
                    None => Ok(()),
                }
            }
        }
    }
}

fn expect_kind(kinds: &[ArgKind], arg: &PragmaArg) -> Result<(), ArgShapeMismatch> {
    if kinds.iter().any(|kind| kind.matches(arg)) {
        Ok(())
    } else {
        Err(ArgShapeMismatch(format!(
            "expects {}, got {}",
            kinds.iter().format(" or "),
            arg.kind.describe()
        )))
    }
}
