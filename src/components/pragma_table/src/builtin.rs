use crate::{
    ArgKind, ArgShape, BitsKind, BuildDirectiveKind, DuplicatePragma, PragmaHandler, PragmaTable,
    TextKind,
};
use attributes::{Attribute, ForeignLanguage};
use compiler::{CallingConvention, OptionOverride};
use diagnostics::DiagnosticKind;
use pragma_ast::TargetKind::{self, *};

const PROC: &[TargetKind] = &[Proc];
const TYPE: &[TargetKind] = &[Type];
const VARIABLE: &[TargetKind] = &[Variable];
const FIELD: &[TargetKind] = &[Field];
const PROC_OR_VARIABLE: &[TargetKind] = &[Proc, Variable];
const VARIABLE_OR_TYPE: &[TargetKind] = &[Variable, Type];
const DECLARATION: &[TargetKind] = &[Proc, Variable, Type];
const LAYOUT: &[TargetKind] = &[Variable, Field, Type];
const DEPRECATABLE: &[TargetKind] = &[Proc, Variable, Field, Type, Statement];
const ERROR_TARGETS: &[TargetKind] = &[Proc, Variable, Type, Statement];
const STATEMENT: &[TargetKind] = &[Statement];
const STATEMENT_OR_MODULE: &[TargetKind] = &[Statement, Module];

const STR: &[ArgKind] = &[ArgKind::Str];
const INT: &[ArgKind] = &[ArgKind::Int];
const SWITCH: &[ArgKind] = &[ArgKind::Switch];
const WORD: &[ArgKind] = &[ArgKind::Word];

pub fn register_builtins(table: &mut PragmaTable) -> Result<(), DuplicatePragma> {
    table.register(
        "deprecated",
        DEPRECATABLE,
        ArgShape::Optional(&[ArgKind::Str, ArgKind::RenameList]),
        PragmaHandler::Deprecated,
    )?;
    table.register("error", ERROR_TARGETS, ArgShape::One(STR), PragmaHandler::Error)?;
    table.register("fatal", STATEMENT, ArgShape::One(STR), PragmaHandler::Fatal)?;

    for (name, kind) in [
        ("warning", DiagnosticKind::Warning),
        ("hint", DiagnosticKind::Hint),
    ] {
        table.register(
            name,
            STATEMENT,
            ArgShape::Selectable {
                plain: ArgKind::Str,
                selected: ArgKind::Switch,
            },
            PragmaHandler::Message(kind),
        )?;
    }

    for (name, kind) in [
        ("warnings", DiagnosticKind::Warning),
        ("hints", DiagnosticKind::Hint),
    ] {
        table.register(
            name,
            STATEMENT_OR_MODULE,
            ArgShape::One(SWITCH),
            PragmaHandler::ToggleAll(kind),
        )?;
    }

    let flags: [(&str, &'static [TargetKind], Attribute); 23] = [
        ("noSideEffect", PROC, Attribute::NoSideEffect),
        ("noReturn", PROC, Attribute::NoReturn),
        ("compileTime", PROC_OR_VARIABLE, Attribute::CompileTime),
        ("inline", PROC, Attribute::Inline),
        ("noinline", PROC, Attribute::NoInline),
        ("used", DECLARATION, Attribute::Used),
        ("acyclic", TYPE, Attribute::Acyclic),
        ("final", TYPE, Attribute::Final),
        ("inheritable", TYPE, Attribute::Inheritable),
        ("pure", TYPE, Attribute::Pure),
        ("shallow", TYPE, Attribute::Shallow),
        ("bycopy", TYPE, Attribute::ByCopy),
        ("byref", TYPE, Attribute::ByRef),
        ("packed", TYPE, Attribute::Packed),
        ("union", TYPE, Attribute::Union),
        ("incompleteStruct", TYPE, Attribute::IncompleteStruct),
        ("volatile", VARIABLE, Attribute::Volatile),
        ("register", VARIABLE, Attribute::Register),
        ("global", VARIABLE, Attribute::Global),
        ("threadvar", VARIABLE, Attribute::ThreadVar),
        ("noinit", VARIABLE_OR_TYPE, Attribute::NoInit),
        ("requiresInit", VARIABLE_OR_TYPE, Attribute::RequiresInit),
        ("nodecl", DECLARATION, Attribute::NoDecl),
    ];

    for (name, targets, attribute) in flags {
        table.register(name, targets, ArgShape::None, PragmaHandler::Flag(attribute))?;
    }

    for (name, targets, kind) in [
        ("bitsize", FIELD, BitsKind::Bitsize),
        ("align", LAYOUT, BitsKind::Align),
        ("size", TYPE, BitsKind::Size),
    ] {
        table.register(name, targets, ArgShape::One(INT), PragmaHandler::Bits(kind))?;
    }

    for (name, targets, kind) in [
        ("header", DECLARATION, TextKind::Header),
        ("dynlib", PROC_OR_VARIABLE, TextKind::DynLib),
        ("codegenDecl", PROC_OR_VARIABLE, TextKind::CodegenDecl),
    ] {
        table.register(name, targets, ArgShape::One(STR), PragmaHandler::Text(kind))?;
    }

    for language in [ForeignLanguage::C, ForeignLanguage::Cpp, ForeignLanguage::ObjC] {
        table.register(
            language.import_pragma(),
            DECLARATION,
            ArgShape::Optional(STR),
            PragmaHandler::Import(language),
        )?;
    }
    table.register(
        "exportc",
        DECLARATION,
        ArgShape::Optional(STR),
        PragmaHandler::Export,
    )?;

    for convention in CallingConvention::ALL {
        table.register(
            convention.name(),
            PROC,
            ArgShape::None,
            PragmaHandler::CallConv(*convention),
        )?;
    }

    table.register("push", STATEMENT, ArgShape::OptionList, PragmaHandler::Push)?;
    table.register("pop", STATEMENT, ArgShape::None, PragmaHandler::Pop)?;

    for name in OptionOverride::names() {
        table.register(
            name,
            STATEMENT_OR_MODULE,
            ArgShape::One(WORD),
            PragmaHandler::OptionSwitch,
        )?;
    }

    table.register(
        "pragma",
        STATEMENT,
        ArgShape::AliasDefinition,
        PragmaHandler::DefineAlias,
    )?;
    table.register("emit", STATEMENT, ArgShape::One(STR), PragmaHandler::Emit)?;
    table.register(
        "experimental",
        STATEMENT_OR_MODULE,
        ArgShape::One(STR),
        PragmaHandler::Experimental,
    )?;

    for kind in [
        BuildDirectiveKind::PassC,
        BuildDirectiveKind::PassL,
        BuildDirectiveKind::Link,
        BuildDirectiveKind::Compile,
    ] {
        table.register(
            kind.name(),
            STATEMENT_OR_MODULE,
            ArgShape::One(STR),
            PragmaHandler::BuildDirective(kind),
        )?;
    }

    Ok(())
}
