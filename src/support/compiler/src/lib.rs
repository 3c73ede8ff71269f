mod compile_options;
mod compiler;
mod option_override;
mod option_stack;
mod options;

pub use compile_options::{CallingConvention, CheckKind, Checks, CompileOptions, LineInfo, Optimization};
pub use compiler::Compiler;
pub use option_override::{OptionOverride, OptionOverrideError};
pub use option_stack::{OptionStack, UnbalancedPop};
pub use options::BuildOptions;
