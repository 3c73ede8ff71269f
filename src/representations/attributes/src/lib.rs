mod attribute;
mod exposure;
mod foreign_language;
mod set;

pub use attribute::{Attribute, AttributeKey};
pub use exposure::{Exposure, SymbolOwnership};
pub use foreign_language::ForeignLanguage;
pub use set::{AttributeConflict, AttributeSet, Inserted};
