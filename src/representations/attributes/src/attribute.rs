use crate::ForeignLanguage;
use compiler::CallingConvention;
use std::fmt::Display;

/// Effect of a pragma on a symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    Deprecated(Option<String>),
    Error(String),
    NoSideEffect,
    CompileTime,
    NoReturn,
    Used,
    Inline,
    NoInline,
    Acyclic,
    Final,
    Inheritable,
    Pure,
    Shallow,
    ByCopy,
    ByRef,
    Packed,
    Union,
    IncompleteStruct,
    Bitsize(u32),
    Align(u32),
    Size(u32),
    Volatile,
    Register,
    Global,
    ThreadVar,
    NoInit,
    RequiresInit,
    NoDecl,
    Header(String),
    Import {
        language: ForeignLanguage,
        pattern: String,
    },
    Export(String),
    DynLib(String),
    CodegenDecl(String),
    CallConv(CallingConvention),
}

/// Identity of an attribute, ignoring its payload
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Deprecated,
    Error,
    NoSideEffect,
    CompileTime,
    NoReturn,
    Used,
    Inline,
    NoInline,
    Acyclic,
    Final,
    Inheritable,
    Pure,
    Shallow,
    ByCopy,
    ByRef,
    Packed,
    Union,
    IncompleteStruct,
    Bitsize,
    Align,
    Size,
    Volatile,
    Register,
    Global,
    ThreadVar,
    NoInit,
    RequiresInit,
    NoDecl,
    Header,
    Import,
    Export,
    DynLib,
    CodegenDecl,
    CallConv,
}

impl AttributeKey {
    /// Attribute keys that cannot be combined with this one
    pub fn conflicts_with(&self) -> &'static [AttributeKey] {
        match self {
            Self::Inline => &[Self::NoInline],
            Self::NoInline => &[Self::Inline],
            Self::ByCopy => &[Self::ByRef],
            Self::ByRef => &[Self::ByCopy],
            Self::Final => &[Self::Inheritable],
            Self::Inheritable => &[Self::Final],
            Self::NoInit => &[Self::RequiresInit],
            Self::RequiresInit => &[Self::NoInit],
            Self::Packed => &[Self::Union],
            Self::Union => &[Self::Packed],
            _ => &[],
        }
    }
}

impl Attribute {
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Deprecated(_) => AttributeKey::Deprecated,
            Self::Error(_) => AttributeKey::Error,
            Self::NoSideEffect => AttributeKey::NoSideEffect,
            Self::CompileTime => AttributeKey::CompileTime,
            Self::NoReturn => AttributeKey::NoReturn,
            Self::Used => AttributeKey::Used,
            Self::Inline => AttributeKey::Inline,
            Self::NoInline => AttributeKey::NoInline,
            Self::Acyclic => AttributeKey::Acyclic,
            Self::Final => AttributeKey::Final,
            Self::Inheritable => AttributeKey::Inheritable,
            Self::Pure => AttributeKey::Pure,
            Self::Shallow => AttributeKey::Shallow,
            Self::ByCopy => AttributeKey::ByCopy,
            Self::ByRef => AttributeKey::ByRef,
            Self::Packed => AttributeKey::Packed,
            Self::Union => AttributeKey::Union,
            Self::IncompleteStruct => AttributeKey::IncompleteStruct,
            Self::Bitsize(_) => AttributeKey::Bitsize,
            Self::Align(_) => AttributeKey::Align,
            Self::Size(_) => AttributeKey::Size,
            Self::Volatile => AttributeKey::Volatile,
            Self::Register => AttributeKey::Register,
            Self::Global => AttributeKey::Global,
            Self::ThreadVar => AttributeKey::ThreadVar,
            Self::NoInit => AttributeKey::NoInit,
            Self::RequiresInit => AttributeKey::RequiresInit,
            Self::NoDecl => AttributeKey::NoDecl,
            Self::Header(_) => AttributeKey::Header,
            Self::Import { .. } => AttributeKey::Import,
            Self::Export(_) => AttributeKey::Export,
            Self::DynLib(_) => AttributeKey::DynLib,
            Self::CodegenDecl(_) => AttributeKey::CodegenDecl,
            Self::CallConv(_) => AttributeKey::CallConv,
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deprecated(None) => f.write_str("deprecated"),
            Self::Deprecated(Some(message)) => write!(f, "deprecated: {:?}", message),
            Self::Error(message) => write!(f, "error: {:?}", message),
            Self::NoSideEffect => f.write_str("noSideEffect"),
            Self::CompileTime => f.write_str("compileTime"),
            Self::NoReturn => f.write_str("noReturn"),
            Self::Used => f.write_str("used"),
            Self::Inline => f.write_str("inline"),
            Self::NoInline => f.write_str("noinline"),
            Self::Acyclic => f.write_str("acyclic"),
            Self::Final => f.write_str("final"),
            Self::Inheritable => f.write_str("inheritable"),
            Self::Pure => f.write_str("pure"),
            Self::Shallow => f.write_str("shallow"),
            Self::ByCopy => f.write_str("bycopy"),
            Self::ByRef => f.write_str("byref"),
            Self::Packed => f.write_str("packed"),
            Self::Union => f.write_str("union"),
            Self::IncompleteStruct => f.write_str("incompleteStruct"),
            Self::Bitsize(bits) => write!(f, "bitsize: {}", bits),
            Self::Align(alignment) => write!(f, "align: {}", alignment),
            Self::Size(size) => write!(f, "size: {}", size),
            Self::Volatile => f.write_str("volatile"),
            Self::Register => f.write_str("register"),
            Self::Global => f.write_str("global"),
            Self::ThreadVar => f.write_str("threadvar"),
            Self::NoInit => f.write_str("noinit"),
            Self::RequiresInit => f.write_str("requiresInit"),
            Self::NoDecl => f.write_str("nodecl"),
            Self::Header(header) => write!(f, "header: {:?}", header),
            Self::Import { language, pattern } => {
                write!(f, "{}: {:?}", language.import_pragma(), pattern)
            }
            Self::Export(name) => write!(f, "exportc: {:?}", name),
            Self::DynLib(library) => write!(f, "dynlib: {:?}", library),
            Self::CodegenDecl(format) => write!(f, "codegenDecl: {:?}", format),
            Self::CallConv(convention) => f.write_str(convention.name()),
        }
    }
}
