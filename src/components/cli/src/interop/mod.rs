use interop_pattern::{ForeignType, InteropExpr};
mod invoke;
mod parse;

#[derive(Clone, Debug)]
pub struct InteropCommand {
    pub pattern: String,
    pub receiver: Option<InteropExpr>,
    pub args: Vec<InteropExpr>,
    pub types: Vec<ForeignType>,
}
