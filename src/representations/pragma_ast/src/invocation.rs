use crate::{PragmaArg, normalize_name};
use itertools::Itertools;
use source_files::Source;
use std::fmt::Display;

/// A single pragma applied to a declaration, statement, or module
#[derive(Clone, Debug)]
pub struct PragmaInvocation {
    pub name: String,
    pub selector: Option<String>,
    pub args: Vec<PragmaArg>,
    pub source: Source,
}

impl PragmaInvocation {
    pub fn new(name: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            selector: None,
            args: vec![],
            source,
        }
    }

    pub fn with_selector(mut self, selector: Option<String>) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_args(mut self, args: Vec<PragmaArg>) -> Self {
        self.args = args;
        self
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

impl Display for PragmaInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;

        if let Some(selector) = &self.selector {
            write!(f, "[{}]", selector)?;
        }

        if !self.args.is_empty() {
            write!(f, ": {}", self.args.iter().format(", "))?;
        }

        Ok(())
    }
}
