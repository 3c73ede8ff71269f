use derive_more::IsVariant;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum ForeignLanguage {
    C,
    Cpp,
    ObjC,
}

impl ForeignLanguage {
    pub fn import_pragma(&self) -> &'static str {
        match self {
            Self::C => "importc",
            Self::Cpp => "importcpp",
            Self::ObjC => "importobjc",
        }
    }
}

impl Display for ForeignLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::ObjC => "Objective-C",
        })
    }
}
