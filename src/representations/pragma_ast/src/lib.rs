mod arg;
mod invocation;
mod module;
mod name;
mod target;

pub use arg::*;
pub use invocation::PragmaInvocation;
pub use module::*;
pub use name::{names_match, normalize_name};
pub use target::TargetKind;
