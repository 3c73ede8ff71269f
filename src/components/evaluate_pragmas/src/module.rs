use crate::{
    BuildDirectives, ModuleCtx, PragmaCtx, PragmaTarget, apply::apply_pragma,
    reference::resolve_reference,
};
use attributes::{AttributeKey, SymbolOwnership};
use compiler::CompileOptions;
use diagnostics::{DiagnosticId, DiagnosticRecord};
use pragma_ast::{DeclKind, Declaration, Item, Module, PragmaInvocation};
use symbols::{Symbol, SymbolId};

/// What remains of a module once its pragmas have been evaluated
#[derive(Clone, Debug)]
pub struct ModuleSummary {
    pub name: String,
    pub symbols: Vec<SymbolId>,
    pub directives: BuildDirectives,
    /// Options in effect at the end of the module
    pub final_options: CompileOptions,
}

/// Processes modules in order, stopping at the first fatal diagnostic
pub fn process_modules<'m>(
    ctx: &mut PragmaCtx,
    modules: impl IntoIterator<Item = &'m Module>,
) -> Vec<ModuleSummary> {
    let mut summaries = Vec::new();

    for module in modules {
        if ctx.is_halted() {
            break;
        }

        summaries.push(process_module(ctx, module));
    }

    summaries
}

pub fn process_module(ctx: &mut PragmaCtx, module: &Module) -> ModuleSummary {
    let mut module_ctx = ModuleCtx::new(&module.name, ctx.compiler.baseline().clone());

    apply_all(ctx, &mut module_ctx, &module.pragmas, PragmaTarget::Module);

    for item in module.items.iter() {
        if ctx.is_halted() {
            break;
        }

        match item {
            Item::Declaration(declaration) => declare(ctx, &mut module_ctx, declaration),
            Item::PragmaStmt(stmt) => {
                apply_all(ctx, &mut module_ctx, &stmt.pragmas, PragmaTarget::Statement)
            }
            Item::Reference(reference) => {
                resolve_reference(ctx, &module_ctx, reference);
            }
        }
    }

    if !ctx.is_halted() {
        finish_module(ctx, &module_ctx);
    }

    ModuleSummary {
        final_options: module_ctx.options.current().clone(),
        name: module_ctx.name,
        symbols: module_ctx.declared,
        directives: module_ctx.directives,
    }
}

fn apply_all(
    ctx: &mut PragmaCtx,
    module: &mut ModuleCtx,
    pragmas: &[PragmaInvocation],
    target: PragmaTarget,
) {
    for invocation in pragmas {
        if ctx.is_halted() {
            return;
        }

        if let Err(error) = apply_pragma(ctx, module, invocation, target) {
            ctx.report(error);
        }
    }
}

fn declare(ctx: &mut PragmaCtx, module: &mut ModuleCtx, declaration: &Declaration) {
    let symbol = Symbol::new(
        &declaration.name,
        declaration.kind,
        &module.name,
        module.options.current().clone(),
        declaration.source,
    );

    let id = ctx.symbols.add(symbol);
    module.scope.declare(&declaration.name, id);
    module.declared.push(id);

    apply_all(ctx, module, &declaration.pragmas, PragmaTarget::Symbol(id));
}

fn finish_module(ctx: &mut PragmaCtx, module: &ModuleCtx) {
    for push in module.open_pushes.iter() {
        ctx.report(DiagnosticRecord::warning(
            DiagnosticId::UnbalancedPush,
            format!("'push' in module '{}' is never popped", module.name),
            *push,
        ));
    }

    let unused = module
        .declared
        .iter()
        .map(|id| ctx.symbols.get(*id))
        .filter(|symbol| is_unused(symbol))
        .map(|symbol| {
            DiagnosticRecord::hint(
                DiagnosticId::XDeclaredButNotUsed,
                format!("'{}' is declared but not used", symbol.name),
                symbol.source,
            )
        })
        .collect::<Vec<_>>();

    for record in unused {
        ctx.report(record);
    }
}

fn is_unused(symbol: &Symbol) -> bool {
    !symbol.referenced
        && symbol.kind != DeclKind::Field
        && !symbol.attributes.contains(AttributeKey::Used)
        && symbol.ownership() == SymbolOwnership::default()
}
