use crate::{ModuleCtx, PragmaCtx};
use attributes::Attribute;
use diagnostics::{DiagnosticId, DiagnosticRecord};
use pragma_ast::Reference;
use symbols::SymbolId;

/// Resolves a use site, following deprecated renames.
///
/// Marks the symbol as referenced and reports any `error` or `deprecated`
/// pragma it was declared with. Each reference site produces at most one
/// deprecation warning.
pub fn resolve_reference(
    ctx: &mut PragmaCtx,
    module: &ModuleCtx,
    reference: &Reference,
) -> Option<SymbolId> {
    let source = reference.source;
    let mut warned_deprecated = false;

    let name = match module.renames.get(&reference.name) {
        Some(rename) => {
            ctx.report(DiagnosticRecord::warning(
                DiagnosticId::Deprecated,
                format!(
                    "'{}' is deprecated, use '{}' instead",
                    reference.name, rename.new_name
                ),
                source,
            ));
            warned_deprecated = true;
            rename.new_name.as_str()
        }
        None => reference.name.as_str(),
    };

    let Some(id) = module.scope.lookup(name) else {
        ctx.report(DiagnosticRecord::error(
            DiagnosticId::UndeclaredIdentifier,
            format!("Undeclared identifier '{}'", name),
            source,
        ));
        return None;
    };

    let symbol = ctx.symbols.get_mut(id);
    symbol.referenced = true;

    let mut deferred = Vec::new();

    for attribute in symbol.attributes.iter() {
        match attribute {
            Attribute::Error(message) => deferred.push(DiagnosticRecord::error(
                DiagnosticId::User,
                format!("'{}' cannot be used: {}", symbol.name, message),
                source,
            )),
            Attribute::Deprecated(message) if !warned_deprecated => {
                let message = match message {
                    Some(message) => format!("'{}' is deprecated: {}", symbol.name, message),
                    None => format!("'{}' is deprecated", symbol.name),
                };

                deferred.push(DiagnosticRecord::warning(
                    DiagnosticId::Deprecated,
                    message,
                    source,
                ));
            }
            _ => (),
        }
    }

    for record in deferred {
        ctx.report(record);
    }

    Some(id)
}
