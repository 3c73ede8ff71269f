use attributes::{Attribute, ForeignLanguage};
use compiler::CallingConvention;
use diagnostics::DiagnosticKind;

/// Effect applied by a pragma once its arguments and target are validated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PragmaHandler {
    /// Adds an attribute that takes no arguments
    Flag(Attribute),
    /// Symbol deprecation, or renames when used as a statement
    Deprecated,
    /// Immediate error as a statement, deferred to use sites on a symbol
    Error,
    Fatal,
    /// User message, or enabling/disabling a diagnostic with `[Id]`
    Message(DiagnosticKind),
    /// Enables or disables every diagnostic of a kind
    ToggleAll(DiagnosticKind),
    Bits(BitsKind),
    Text(TextKind),
    Import(ForeignLanguage),
    Export,
    CallConv(CallingConvention),
    Push,
    Pop,
    /// Option pragma used directly, modifying the current option frame
    OptionSwitch,
    DefineAlias,
    Emit,
    Experimental,
    BuildDirective(BuildDirectiveKind),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitsKind {
    Bitsize,
    Align,
    Size,
}

impl BitsKind {
    pub fn attribute(&self, value: u32) -> Attribute {
        match self {
            Self::Bitsize => Attribute::Bitsize(value),
            Self::Align => Attribute::Align(value),
            Self::Size => Attribute::Size(value),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextKind {
    Header,
    DynLib,
    CodegenDecl,
}

impl TextKind {
    pub fn attribute(&self, text: String) -> Attribute {
        match self {
            Self::Header => Attribute::Header(text),
            Self::DynLib => Attribute::DynLib(text),
            Self::CodegenDecl => Attribute::CodegenDecl(text),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuildDirectiveKind {
    PassC,
    PassL,
    Link,
    Compile,
}

impl BuildDirectiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PassC => "passc",
            Self::PassL => "passl",
            Self::Link => "link",
            Self::Compile => "compile",
        }
    }
}
