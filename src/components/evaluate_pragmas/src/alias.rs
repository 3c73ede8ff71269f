use crate::{ModuleCtx, PragmaCtx, PragmaError, PragmaErrorKind};
use pragma_ast::{PragmaInvocation, normalize_name};

/// Module-local pragma defined with `{.pragma: name, ...}`.
///
/// The stored pragmas are already expanded, so they only ever name builtins.
#[derive(Clone, Debug)]
pub struct UserPragmaAlias {
    pub pragmas: Vec<PragmaInvocation>,
}

pub fn define_alias(
    ctx: &PragmaCtx,
    module: &mut ModuleCtx,
    invocation: &PragmaInvocation,
) -> Result<(), PragmaError> {
    let Some((name_arg, rest)) = invocation.args.split_first() else {
        return Err(PragmaErrorKind::invalid_arguments(
            &invocation.name,
            "expects a name for the new pragma",
        )
        .at(invocation.source));
    };

    let Some(name) = name_arg.as_ident() else {
        return Err(PragmaErrorKind::invalid_arguments(
            &invocation.name,
            "expects an identifier as the new pragma's name",
        )
        .at(name_arg.source));
    };

    let key = normalize_name(name);

    if ctx.table.contains(name) || module.aliases.contains_key(&key) {
        return Err(PragmaErrorKind::DuplicateUserPragmaAlias(name.into()).at(name_arg.source));
    }

    let mut pragmas = Vec::with_capacity(rest.len());

    for arg in rest {
        let Some(inner) = arg.to_invocation() else {
            return Err(PragmaErrorKind::invalid_arguments(
                &invocation.name,
                format!("expects pragmas after the name, got {}", arg.kind.describe()),
            )
            .at(arg.source));
        };

        if let Some(existing) = module.aliases.get(&inner.normalized_name()) {
            if !inner.args.is_empty() {
                return Err(PragmaErrorKind::invalid_arguments(
                    &inner.name,
                    "is a user pragma and takes no arguments",
                )
                .at(inner.source));
            }

            pragmas.extend(existing.pragmas.iter().cloned());
        } else if ctx.table.contains(&inner.name) {
            pragmas.push(inner);
        } else {
            return Err(PragmaErrorKind::UnknownPragma(inner.name).at(inner.source));
        }
    }

    module.aliases.insert(
        key,
        UserPragmaAlias { pragmas },
    );
    Ok(())
}
