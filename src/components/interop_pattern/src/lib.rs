mod codegen_decl;
mod error;
mod expr;
mod parse;
mod resolve;
mod token;

pub use codegen_decl::{render_codegen_decl, validate_codegen_decl};
pub use error::InteropError;
pub use expr::{ForeignType, InteropExpr};
pub use token::PatternToken;

use attributes::{Attribute, AttributeKey, AttributeSet, ForeignLanguage};

/// Compiled form of an import pattern such as `#.push_back(@)`.
///
/// Patterns are parsed once and can then be rendered for any number of call sites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteropPattern {
    tokens: Vec<PatternToken>,
    member_name: Option<String>,
}

impl InteropPattern {
    pub fn parse(pattern: &str) -> Self {
        parse::parse_pattern(pattern)
    }

    /// Pattern for a symbol imported from `language`
    pub fn for_import(language: ForeignLanguage, pattern: &str) -> Self {
        match language {
            ForeignLanguage::C => Self {
                tokens: vec![
                    PatternToken::Literal(format!("{pattern}(")),
                    PatternToken::RemainingArgs,
                    PatternToken::Literal(")".into()),
                ],
                member_name: None,
            },
            ForeignLanguage::Cpp | ForeignLanguage::ObjC => Self::parse(pattern),
        }
    }

    pub fn for_attributes(attributes: &AttributeSet) -> Option<Self> {
        match attributes.get(AttributeKey::Import)? {
            Attribute::Import { language, pattern } => Some(Self::for_import(*language, pattern)),
            _ => None,
        }
    }

    /// Whether the pattern had no special characters and was read as a member name
    pub fn is_member_shorthand(&self) -> bool {
        self.member_name.is_some()
    }

    pub fn resolve(
        &self,
        receiver: Option<&InteropExpr>,
        args: &[InteropExpr],
        types: &[ForeignType],
    ) -> Result<String, InteropError> {
        resolve::resolve_tokens(self, receiver, args, types)
    }
}

/// Parses `pattern` and renders it for a single call site
pub fn resolve(
    pattern: &str,
    receiver: Option<&InteropExpr>,
    args: &[InteropExpr],
    types: &[ForeignType],
) -> Result<String, InteropError> {
    InteropPattern::parse(pattern).resolve(receiver, args, types)
}
