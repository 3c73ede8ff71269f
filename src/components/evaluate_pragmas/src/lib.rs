/*
    ================  components/evaluate_pragmas/src/lib.rs  =================
    Evaluates the pragmas of parsed modules.

    Declarations become symbols carrying attributes, statement pragmas update
    module-scoped state (option stack, aliases, renames, build directives),
    and every problem is reported through the compiler's diagnostics.
    ---------------------------------------------------------------------------
*/

mod alias;
mod apply;
mod ctx;
mod directives;
mod error;
mod module;
mod reference;
mod target;

pub use alias::UserPragmaAlias;
pub use apply::apply_pragma;
pub use ctx::{ModuleCtx, PragmaCtx};
pub use directives::BuildDirectives;
pub use error::{PragmaError, PragmaErrorKind};
pub use module::{ModuleSummary, process_module, process_modules};
pub use reference::resolve_reference;
pub use target::PragmaTarget;
