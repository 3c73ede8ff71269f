use crate::{ModuleCtx, PragmaCtx, PragmaError, PragmaErrorKind, PragmaTarget, alias::define_alias};
use attributes::{Attribute, AttributeConflict};
use compiler::OptionOverride;
use diagnostics::{DiagnosticId, DiagnosticRecord};
use pragma_ast::{PragmaArg, PragmaArgKind, PragmaInvocation};
use pragma_table::{BitsKind, PragmaHandler, PragmaSpec, TextKind};
use source_files::Source;
use symbols::Rename;

/// Validates a single pragma invocation and applies its effect to `target`.
///
/// Invalid invocations leave the target untouched and are returned as errors
/// for the caller to report. Conflicting attributes are not errors: they are
/// reported as warnings here and the incoming attribute is dropped.
pub fn apply_pragma(
    ctx: &mut PragmaCtx,
    module: &mut ModuleCtx,
    invocation: &PragmaInvocation,
    target: PragmaTarget,
) -> Result<(), PragmaError> {
    let table = ctx.table;

    let Some(spec) = table.lookup(&invocation.name) else {
        return apply_alias(ctx, module, invocation, target);
    };

    let target_kind = target.kind(&ctx.symbols);

    if !spec.allows(target_kind) {
        return Err(PragmaErrorKind::PragmaTargetMismatch {
            name: invocation.name.clone(),
            target: target_kind.to_string(),
        }
        .at(invocation.source));
    }

    spec.shape.check(invocation).map_err(|mismatch| {
        PragmaErrorKind::invalid_arguments(&invocation.name, mismatch).at(invocation.source)
    })?;

    dispatch(ctx, module, spec, invocation, target)
}

fn apply_alias(
    ctx: &mut PragmaCtx,
    module: &mut ModuleCtx,
    invocation: &PragmaInvocation,
    target: PragmaTarget,
) -> Result<(), PragmaError> {
    let Some(alias) = module.aliases.get(&invocation.normalized_name()) else {
        return Err(PragmaErrorKind::UnknownPragma(invocation.name.clone()).at(invocation.source));
    };

    if !invocation.args.is_empty() || invocation.selector.is_some() {
        return Err(PragmaErrorKind::invalid_arguments(
            &invocation.name,
            "is a user pragma and takes no arguments",
        )
        .at(invocation.source));
    }

    for pragma in alias.pragmas.clone() {
        if ctx.is_halted() {
            break;
        }

        let expanded = PragmaInvocation {
            source: invocation.source,
            ..pragma
        };

        if let Err(error) = apply_pragma(ctx, module, &expanded, target) {
            ctx.report(error);
        }
    }

    Ok(())
}

fn dispatch(
    ctx: &mut PragmaCtx,
    module: &mut ModuleCtx,
    spec: &PragmaSpec,
    invocation: &PragmaInvocation,
    target: PragmaTarget,
) -> Result<(), PragmaError> {
    let source = invocation.source;
    let first_arg = invocation.args.first();

    let invalid = |reason: &str| {
        PragmaErrorKind::invalid_arguments(&invocation.name, reason).at(source)
    };

    let string_arg = || first_arg.and_then(PragmaArg::as_str).map(str::to_string);

    match &spec.handler {
        PragmaHandler::Flag(attribute) => {
            add_attribute(ctx, target, attribute.clone(), source);
        }
        PragmaHandler::Deprecated => match target {
            PragmaTarget::Symbol(_) => {
                if first_arg.is_some_and(|arg| arg.as_str().is_none()) {
                    return Err(invalid("expects a message when applied to a declaration"));
                }
                add_attribute(ctx, target, Attribute::Deprecated(string_arg()), source);
            }
            PragmaTarget::Statement | PragmaTarget::Module => {
                let Some(renames) = first_arg.and_then(PragmaArg::as_rename_list) else {
                    return Err(invalid("expects a list of 'Old: New' renames as a statement"));
                };

                for (old_name, new_name, source) in renames {
                    module.renames.insert(
                        old_name,
                        Rename {
                            new_name: new_name.into(),
                            source,
                        },
                    );
                }
            }
        },
        PragmaHandler::Error => {
            let message = string_arg().unwrap_or_default();

            match target {
                PragmaTarget::Symbol(_) => {
                    add_attribute(ctx, target, Attribute::Error(message), source);
                }
                PragmaTarget::Statement | PragmaTarget::Module => {
                    return Err(PragmaErrorKind::UserError(message).at(source));
                }
            }
        }
        PragmaHandler::Fatal => {
            return Err(PragmaErrorKind::UserFatal(string_arg().unwrap_or_default()).at(source));
        }
        PragmaHandler::Message(kind) => match &invocation.selector {
            Some(selector) => {
                let id = selector
                    .parse::<DiagnosticId>()
                    .map_err(|unknown| invalid(&unknown.to_string()))?;
                let enabled = first_arg
                    .and_then(PragmaArg::as_switch)
                    .ok_or_else(|| invalid("expects 'on' or 'off'"))?;

                ctx.compiler
                    .diagnostics
                    .suppression_mut()
                    .set(*kind, id, enabled);
            }
            None => {
                ctx.report(DiagnosticRecord::new(
                    *kind,
                    DiagnosticId::user_message(*kind),
                    string_arg().unwrap_or_default(),
                    Some(source),
                ));
            }
        },
        PragmaHandler::ToggleAll(kind) => {
            let enabled = first_arg
                .and_then(PragmaArg::as_switch)
                .ok_or_else(|| invalid("expects 'on' or 'off'"))?;

            ctx.compiler
                .diagnostics
                .suppression_mut()
                .set_all(*kind, enabled);
        }
        PragmaHandler::Bits(kind) => {
            let value = first_arg
                .and_then(PragmaArg::as_int)
                .ok_or_else(|| invalid("expects an integer"))?;
            let value = validate_bits(*kind, value).map_err(|reason| invalid(reason))?;
            add_attribute(ctx, target, kind.attribute(value), source);
        }
        PragmaHandler::Text(kind) => {
            let text = string_arg().ok_or_else(|| invalid("expects a string"))?;

            if *kind == TextKind::CodegenDecl {
                interop_pattern::validate_codegen_decl(&text)
                    .map_err(|error| invalid(&error.to_string()))?;
            }

            add_attribute(ctx, target, kind.attribute(text), source);
        }
        PragmaHandler::Import(language) => {
            let pattern = string_arg().unwrap_or_else(|| symbol_name(ctx, target));

            add_attribute(
                ctx,
                target,
                Attribute::Import {
                    language: *language,
                    pattern,
                },
                source,
            );
        }
        PragmaHandler::Export => {
            let name = string_arg().unwrap_or_else(|| symbol_name(ctx, target));
            add_attribute(ctx, target, Attribute::Export(name), source);
        }
        PragmaHandler::CallConv(convention) => {
            add_attribute(ctx, target, Attribute::CallConv(*convention), source);
        }
        PragmaHandler::Push => {
            let overrides = invocation
                .args
                .iter()
                .map(|arg| match &arg.kind {
                    PragmaArgKind::KeyValue { key, value, .. } => {
                        OptionOverride::from_arg(key, value).map_err(|error| {
                            PragmaErrorKind::invalid_arguments(&invocation.name, error)
                                .at(arg.source)
                        })
                    }
                    _ => Err(invalid("expects 'key: value' pairs")),
                })
                .collect::<Result<Vec<_>, _>>()?;

            module.options.push(overrides.iter());
            module.open_pushes.push(source);
        }
        PragmaHandler::Pop => {
            module
                .options
                .pop()
                .map_err(|_| PragmaErrorKind::UnbalancedPop.at(source))?;
            module.open_pushes.pop();
        }
        PragmaHandler::OptionSwitch => {
            let value = first_arg.ok_or_else(|| invalid("expects a value"))?;
            let option_override = OptionOverride::from_arg(&invocation.name, value)
                .map_err(|error| invalid(&error.to_string()))?;

            option_override.apply(module.options.current_mut());
        }
        PragmaHandler::DefineAlias => define_alias(ctx, module, invocation)?,
        PragmaHandler::Emit => {
            let code = string_arg().ok_or_else(|| invalid("expects a string"))?;
            module.directives.emitted.push(code);
        }
        PragmaHandler::Experimental => {
            let feature = string_arg().ok_or_else(|| invalid("expects a string"))?;
            module.directives.experimental.insert(feature);
        }
        PragmaHandler::BuildDirective(kind) => {
            let value = string_arg().ok_or_else(|| invalid("expects a string"))?;
            module.directives.entries.push((*kind, value));
        }
    }

    Ok(())
}

/// Adds an attribute to the symbol being annotated.
///
/// A conflict leaves the symbol as it was and produces a warning.
fn add_attribute(ctx: &mut PragmaCtx, target: PragmaTarget, attribute: Attribute, source: Source) {
    let PragmaTarget::Symbol(id) = target else {
        return;
    };

    let symbol = ctx.symbols.get_mut(id);

    if let Err(AttributeConflict { existing, incoming }) = symbol.attributes.insert(attribute) {
        let message = format!(
            "'{}' conflicts with '{}' on '{}' and is ignored",
            incoming, existing, symbol.name
        );

        ctx.report(DiagnosticRecord::warning(
            DiagnosticId::ConflictingPragmas,
            message,
            source,
        ));
    }
}

fn symbol_name(ctx: &PragmaCtx, target: PragmaTarget) -> String {
    match target {
        PragmaTarget::Symbol(id) => ctx.symbols.get(id).name.clone(),
        PragmaTarget::Statement | PragmaTarget::Module => String::new(),
    }
}

fn validate_bits(kind: BitsKind, value: i64) -> Result<u32, &'static str> {
    let value = u32::try_from(value).map_err(|_| "expects a non-negative integer")?;

    match kind {
        BitsKind::Bitsize if (1..=64).contains(&value) => Ok(value),
        BitsKind::Bitsize => Err("expects a bit width between 1 and 64"),
        BitsKind::Align if value.is_power_of_two() => Ok(value),
        BitsKind::Align => Err("expects a power of two"),
        BitsKind::Size if matches!(value, 1 | 2 | 4 | 8) => Ok(value),
        BitsKind::Size => Err("expects a size of 1, 2, 4 or 8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler::{BuildOptions, CallingConvention, CheckKind, Compiler};
    use diagnostics::{DiagnosticFlags, DiagnosticKind};
    use pragma_ast::{DeclKind, TargetKind};
    use pragma_table::{ArgKind, ArgShape, PragmaTable};
    use source_files::SourceFiles;
    use symbols::{Symbol, SymbolId};

    fn build_options() -> BuildOptions {
        BuildOptions {
            diagnostic_flags: DiagnosticFlags::collecting(),
            ..Default::default()
        }
    }

    fn pragma(name: &str, args: Vec<PragmaArgKind>) -> PragmaInvocation {
        PragmaInvocation::new(name, Source::internal()).with_args(
            args.into_iter()
                .map(|kind| kind.at(Source::internal()))
                .collect(),
        )
    }

    fn ident(name: &str) -> PragmaArgKind {
        PragmaArgKind::Ident(name.into())
    }

    fn key_value(key: &str, value: PragmaArgKind) -> PragmaArgKind {
        PragmaArgKind::KeyValue {
            key: key.into(),
            selector: None,
            value: Box::new(value.at(Source::internal())),
        }
    }

    fn declare(ctx: &mut PragmaCtx, module: &mut ModuleCtx, kind: DeclKind, name: &str) -> SymbolId {
        let symbol = Symbol::new(
            name,
            kind,
            &module.name,
            module.options.current().clone(),
            Source::internal(),
        );
        let id = ctx.symbols.add(symbol);
        module.scope.declare(name, id);
        id
    }

    fn sample_arg(kind: ArgKind) -> PragmaArgKind {
        match kind {
            ArgKind::Str | ArgKind::Word => PragmaArgKind::Str("sample".into()),
            ArgKind::Int => PragmaArgKind::Int(8),
            ArgKind::Ident => ident("sample"),
            ArgKind::Switch => ident("on"),
            ArgKind::RenameList => {
                PragmaArgKind::List(vec![key_value("Old", ident("New")).at(Source::internal())])
            }
        }
    }

    fn well_formed_args(shape: ArgShape) -> Vec<PragmaArgKind> {
        match shape {
            ArgShape::None => vec![],
            ArgShape::Optional(kinds) | ArgShape::One(kinds) => vec![sample_arg(kinds[0])],
            ArgShape::Selectable { plain, .. } => vec![sample_arg(plain)],
            ArgShape::OptionList => vec![key_value("checks", ident("off"))],
            ArgShape::AliasDefinition => vec![ident("sampleAlias"), ident("inline")],
        }
    }

    #[test]
    fn target_mismatch_leaves_symbol_unchanged() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Proc, "run");

        for spec in table.iter().filter(|spec| !spec.allows(TargetKind::Proc)) {
            let invocation = pragma(&spec.name, well_formed_args(spec.shape));
            assert_eq!(spec.shape.check(&invocation), Ok(()), "{}", spec.name);

            let error = apply_pragma(&mut ctx, &mut module, &invocation, PragmaTarget::Symbol(id))
                .unwrap_err();

            assert_eq!(
                error.kind,
                PragmaErrorKind::PragmaTargetMismatch {
                    name: spec.name.clone(),
                    target: "procedure".into(),
                }
            );
            assert!(ctx.symbols.get(id).attributes.is_empty());
        }
    }

    #[test]
    fn target_is_checked_before_arguments() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Proc, "run");

        for name in ["emit", "bitsize", "fatal"] {
            let error = apply_pragma(
                &mut ctx,
                &mut module,
                &pragma(name, vec![]),
                PragmaTarget::Symbol(id),
            )
            .unwrap_err();

            assert!(
                matches!(error.kind, PragmaErrorKind::PragmaTargetMismatch { .. }),
                "{name}: {}",
                error.kind
            );
        }
    }

    #[test]
    fn target_mismatch_is_reported_for_valid_arguments() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Proc, "run");

        let error = apply_pragma(
            &mut ctx,
            &mut module,
            &pragma("bitsize", vec![PragmaArgKind::Int(3)]),
            PragmaTarget::Symbol(id),
        )
        .unwrap_err();

        assert_eq!(
            error.kind,
            PragmaErrorKind::PragmaTargetMismatch {
                name: "bitsize".into(),
                target: "procedure".into()
            }
        );
    }

    #[test]
    fn push_and_pop_restore_options() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let baseline = module.options.current().clone();

        let push = pragma(
            "push",
            vec![
                key_value("checks", ident("off")),
                key_value("callconv", ident("cdecl")),
            ],
        );
        apply_pragma(&mut ctx, &mut module, &push, PragmaTarget::Statement).unwrap();

        assert!(!module.options.current().checks.get(CheckKind::Bound));
        assert_eq!(
            module.options.current().calling_convention,
            CallingConvention::Cdecl
        );

        let pop = pragma("pop", vec![]);
        apply_pragma(&mut ctx, &mut module, &pop, PragmaTarget::Statement).unwrap();
        assert_eq!(module.options.current(), &baseline);

        let error = apply_pragma(&mut ctx, &mut module, &pop, PragmaTarget::Statement).unwrap_err();
        assert_eq!(error.kind, PragmaErrorKind::UnbalancedPop);
    }

    #[test]
    fn push_rejects_unknown_option() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());

        let push = pragma("push", vec![key_value("gc", ident("arc"))]);
        let error = apply_pragma(&mut ctx, &mut module, &push, PragmaTarget::Statement).unwrap_err();

        assert!(matches!(
            error.kind,
            PragmaErrorKind::InvalidPragmaArguments { .. }
        ));
        assert_eq!(module.options.depth(), 0);
    }

    #[test]
    fn conflicting_attributes_warn_and_keep_first() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Proc, "run");

        for name in ["inline", "noinline", "inline"] {
            apply_pragma(&mut ctx, &mut module, &pragma(name, vec![]), PragmaTarget::Symbol(id))
                .unwrap();
        }

        let attributes = &ctx.symbols.get(id).attributes;
        assert!(attributes.contains(attributes::AttributeKey::Inline));
        assert!(!attributes.contains(attributes::AttributeKey::NoInline));

        let records = ctx.compiler.diagnostics.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, DiagnosticId::ConflictingPragmas);
        assert_eq!(records[0].kind, DiagnosticKind::Warning);
    }

    #[test]
    fn validates_layout_values() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Type, "Header");

        let bad = pragma("align", vec![PragmaArgKind::Int(3)]);
        assert!(apply_pragma(&mut ctx, &mut module, &bad, PragmaTarget::Symbol(id)).is_err());

        let good = pragma("align", vec![PragmaArgKind::Int(16)]);
        apply_pragma(&mut ctx, &mut module, &good, PragmaTarget::Symbol(id)).unwrap();
        assert_eq!(
            ctx.symbols.get(id).attributes.get(attributes::AttributeKey::Align),
            Some(&Attribute::Align(16))
        );
    }

    #[test]
    fn import_defaults_to_symbol_name() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());
        let id = declare(&mut ctx, &mut module, DeclKind::Proc, "printf");

        apply_pragma(&mut ctx, &mut module, &pragma("importc", vec![]), PragmaTarget::Symbol(id))
            .unwrap();

        assert_eq!(
            ctx.symbols.get(id).attributes.get(attributes::AttributeKey::Import),
            Some(&Attribute::Import {
                language: attributes::ForeignLanguage::C,
                pattern: "printf".into()
            })
        );
        assert!(ctx.symbols.get(id).ownership().is_reference());
    }

    #[test]
    fn suppression_by_selector() {
        let table = PragmaTable::builtin();
        let source_files = SourceFiles::new();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(build_options(), &source_files));
        let mut module = ModuleCtx::new("main", Default::default());

        let disable = pragma("warning", vec![ident("off")])
            .with_selector(Some("Deprecated".into()));
        apply_pragma(&mut ctx, &mut module, &disable, PragmaTarget::Statement).unwrap();
        let suppression = ctx.compiler.diagnostics.suppression();
        assert!(!suppression.allows(DiagnosticKind::Warning, DiagnosticId::Deprecated));
        assert!(suppression.allows(DiagnosticKind::Hint, DiagnosticId::Deprecated));

        let unknown = pragma("hint", vec![ident("off")]).with_selector(Some("Nope".into()));
        assert!(apply_pragma(&mut ctx, &mut module, &unknown, PragmaTarget::Statement).is_err());
    }
}
