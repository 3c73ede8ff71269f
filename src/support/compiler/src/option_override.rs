use crate::{CallingConvention, CheckKind, CompileOptions, Optimization};
use pragma_ast::{PragmaArg, names_match};
use std::fmt::Display;

/// A single change to the effective compile options
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptionOverride {
    Checks(bool),
    Check(CheckKind, bool),
    Optimization(Optimization),
    CallingConvention(CallingConvention),
    LineDir(bool),
    LineTrace(bool),
    StackTrace(bool),
    DeadCodeElim(bool),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OptionKey {
    Checks,
    Check(CheckKind),
    Optimization,
    CallingConvention,
    LineDir,
    LineTrace,
    StackTrace,
    DeadCodeElim,
}

const OPTION_KEYS: &[(&str, OptionKey)] = &[
    ("checks", OptionKey::Checks),
    ("boundChecks", OptionKey::Check(CheckKind::Bound)),
    ("overflowChecks", OptionKey::Check(CheckKind::Overflow)),
    ("nilChecks", OptionKey::Check(CheckKind::Nil)),
    ("rangeChecks", OptionKey::Check(CheckKind::Range)),
    ("fieldChecks", OptionKey::Check(CheckKind::Field)),
    ("objChecks", OptionKey::Check(CheckKind::Object)),
    ("assertions", OptionKey::Check(CheckKind::Assertions)),
    ("optimization", OptionKey::Optimization),
    ("callconv", OptionKey::CallingConvention),
    ("lineDir", OptionKey::LineDir),
    ("lineTrace", OptionKey::LineTrace),
    ("stackTrace", OptionKey::StackTrace),
    ("deadCodeElim", OptionKey::DeadCodeElim),
];

impl OptionKey {
    fn from_name(name: &str) -> Option<Self> {
        OPTION_KEYS
            .iter()
            .find(|(key, _)| names_match(key, name))
            .map(|(_, key)| *key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionOverrideError {
    UnknownOption(String),
    InvalidValue {
        option: String,
        value: String,
        expected: &'static str,
    },
}

impl Display for OptionOverrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption(name) => write!(f, "Unknown option '{}'", name),
            Self::InvalidValue {
                option,
                value,
                expected,
            } => write!(
                f,
                "Invalid value '{}' for option '{}', expected {}",
                value, option, expected
            ),
        }
    }
}

impl OptionOverride {
    pub fn names() -> impl Iterator<Item = &'static str> {
        OPTION_KEYS.iter().map(|(name, _)| *name)
    }

    pub fn parse(name: &str, value: &str) -> Result<Self, OptionOverrideError> {
        let Some(key) = OptionKey::from_name(name) else {
            return Err(OptionOverrideError::UnknownOption(name.into()));
        };

        let invalid = |expected| OptionOverrideError::InvalidValue {
            option: name.into(),
            value: value.into(),
            expected,
        };

        let switch = || match value {
            "on" | "true" => Ok(true),
            "off" | "false" => Ok(false),
            _ => Err(invalid("'on' or 'off'")),
        };

        Ok(match key {
            OptionKey::Checks => Self::Checks(switch()?),
            OptionKey::Check(kind) => Self::Check(kind, switch()?),
            OptionKey::Optimization => Self::Optimization(
                value
                    .parse()
                    .map_err(|_| invalid("'none', 'speed' or 'size'"))?,
            ),
            OptionKey::CallingConvention => Self::CallingConvention(
                value
                    .parse()
                    .map_err(|_| invalid("a calling convention"))?,
            ),
            OptionKey::LineDir => Self::LineDir(switch()?),
            OptionKey::LineTrace => Self::LineTrace(switch()?),
            OptionKey::StackTrace => Self::StackTrace(switch()?),
            OptionKey::DeadCodeElim => Self::DeadCodeElim(switch()?),
        })
    }

    pub fn from_arg(name: &str, arg: &PragmaArg) -> Result<Self, OptionOverrideError> {
        match arg.as_word() {
            Some(value) => Self::parse(name, value),
            None => Err(OptionOverrideError::InvalidValue {
                option: name.into(),
                value: arg.to_string(),
                expected: "an identifier",
            }),
        }
    }

    pub fn apply(&self, options: &mut CompileOptions) {
        match *self {
            Self::Checks(enabled) => {
                options.checks = crate::Checks::all(enabled);
            }
            Self::Check(kind, enabled) => options.checks.set(kind, enabled),
            Self::Optimization(optimization) => options.optimization = optimization,
            Self::CallingConvention(convention) => options.calling_convention = convention,
            Self::LineDir(enabled) => options.line_info.line_dir = enabled,
            Self::LineTrace(enabled) => options.line_info.line_trace = enabled,
            Self::StackTrace(enabled) => options.line_info.stack_trace = enabled,
            Self::DeadCodeElim(enabled) => options.dead_code_elim = enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_names_are_style_insensitive() {
        assert_eq!(
            OptionOverride::parse("bound_checks", "off"),
            Ok(OptionOverride::Check(CheckKind::Bound, false))
        );
        assert_eq!(
            OptionOverride::parse("boundchecks", "on"),
            Ok(OptionOverride::Check(CheckKind::Bound, true))
        );
    }

    #[test]
    fn checks_toggles_every_check() {
        let mut options = CompileOptions::default();
        OptionOverride::parse("checks", "off")
            .unwrap()
            .apply(&mut options);

        for kind in [CheckKind::Bound, CheckKind::Nil, CheckKind::Assertions] {
            assert!(!options.checks.get(kind));
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            OptionOverride::parse("optimization", "fast"),
            Err(OptionOverrideError::InvalidValue { .. })
        ));
        assert_eq!(
            OptionOverride::parse("gc", "arc"),
            Err(OptionOverrideError::UnknownOption("gc".into()))
        );
    }
}
