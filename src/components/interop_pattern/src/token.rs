#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    /// `#`
    NextArg,
    /// `#.`
    ThisArg,
    /// `#@`
    FusedCall,
    /// `#+`
    CalleeCall,
    /// `@`
    RemainingArgs,
    /// `'N`, `'*N`, `'**N`, ...
    TypeSlot { index: usize, stars: usize },
}
