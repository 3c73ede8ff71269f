use crate::{Attribute, AttributeSet};
use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, IsVariant)]
pub enum Exposure {
    #[default]
    Hidden,
    Exposed,
}

/// Whether a symbol is defined by this program or only referenced from foreign code
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum SymbolOwnership {
    Reference,
    Owned(Exposure),
}

impl SymbolOwnership {
    pub fn from_foreign_and_exposed(is_foreign: bool, is_exposed: bool) -> Self {
        if is_exposed {
            Self::Owned(Exposure::Exposed)
        } else if is_foreign {
            Self::Reference
        } else {
            Self::Owned(Exposure::Hidden)
        }
    }

    pub fn of(attributes: &AttributeSet) -> Self {
        let is_foreign = attributes
            .iter()
            .any(|attribute| matches!(attribute, Attribute::Import { .. } | Attribute::NoDecl));
        let is_exposed = attributes
            .iter()
            .any(|attribute| matches!(attribute, Attribute::Export(_)));

        Self::from_foreign_and_exposed(is_foreign, is_exposed)
    }
}

impl Default for SymbolOwnership {
    fn default() -> Self {
        Self::Owned(Exposure::Hidden)
    }
}
