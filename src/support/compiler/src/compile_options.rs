use derive_more::IsVariant;
use std::{fmt::Display, str::FromStr};

/// Compiler behavior switches that can be overridden by `push`/`pop`
/// and by option pragmas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub checks: Checks,
    pub optimization: Optimization,
    pub calling_convention: CallingConvention,
    pub line_info: LineInfo,
    pub dead_code_elim: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            checks: Checks::default(),
            optimization: Optimization::default(),
            calling_convention: CallingConvention::default(),
            line_info: LineInfo::default(),
            dead_code_elim: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Checks {
    pub bound: bool,
    pub overflow: bool,
    pub nil: bool,
    pub range: bool,
    pub field: bool,
    pub object: bool,
    pub assertions: bool,
}

impl Default for Checks {
    fn default() -> Self {
        Self::all(true)
    }
}

impl Checks {
    pub fn all(enabled: bool) -> Self {
        Self {
            bound: enabled,
            overflow: enabled,
            nil: enabled,
            range: enabled,
            field: enabled,
            object: enabled,
            assertions: enabled,
        }
    }

    pub fn set(&mut self, kind: CheckKind, enabled: bool) {
        *self.get_mut(kind) = enabled;
    }

    pub fn get(&self, kind: CheckKind) -> bool {
        match kind {
            CheckKind::Bound => self.bound,
            CheckKind::Overflow => self.overflow,
            CheckKind::Nil => self.nil,
            CheckKind::Range => self.range,
            CheckKind::Field => self.field,
            CheckKind::Object => self.object,
            CheckKind::Assertions => self.assertions,
        }
    }

    fn get_mut(&mut self, kind: CheckKind) -> &mut bool {
        match kind {
            CheckKind::Bound => &mut self.bound,
            CheckKind::Overflow => &mut self.overflow,
            CheckKind::Nil => &mut self.nil,
            CheckKind::Range => &mut self.range,
            CheckKind::Field => &mut self.field,
            CheckKind::Object => &mut self.object,
            CheckKind::Assertions => &mut self.assertions,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Bound,
    Overflow,
    Nil,
    Range,
    Field,
    Object,
    Assertions,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, IsVariant)]
pub enum Optimization {
    #[default]
    None,
    Speed,
    Size,
}

impl FromStr for Optimization {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "speed" => Ok(Self::Speed),
            "size" => Ok(Self::Size),
            _ => Err(()),
        }
    }
}

impl Display for Optimization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Speed => "speed",
            Self::Size => "size",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    #[default]
    Native,
    Closure,
    Cdecl,
    Stdcall,
    Fastcall,
    Safecall,
    Thiscall,
    Syscall,
    Noconv,
}

impl CallingConvention {
    pub const ALL: &'static [CallingConvention] = &[
        Self::Native,
        Self::Closure,
        Self::Cdecl,
        Self::Stdcall,
        Self::Fastcall,
        Self::Safecall,
        Self::Thiscall,
        Self::Syscall,
        Self::Noconv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Closure => "closure",
            Self::Cdecl => "cdecl",
            Self::Stdcall => "stdcall",
            Self::Fastcall => "fastcall",
            Self::Safecall => "safecall",
            Self::Thiscall => "thiscall",
            Self::Syscall => "syscall",
            Self::Noconv => "noconv",
        }
    }
}

impl FromStr for CallingConvention {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|convention| convention.name() == s)
            .ok_or(())
    }
}

impl Display for CallingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineInfo {
    pub line_dir: bool,
    pub line_trace: bool,
    pub stack_trace: bool,
}

impl Default for LineInfo {
    fn default() -> Self {
        Self {
            line_dir: false,
            line_trace: true,
            stack_trace: true,
        }
    }
}
