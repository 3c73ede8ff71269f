use crate::{CompileOptions, OptionOverride};

/// Stack of compile option frames for one module.
///
/// The bottom frame is the module-entry baseline and can never be popped.
#[derive(Clone, Debug)]
pub struct OptionStack {
    frames: Vec<CompileOptions>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnbalancedPop;

impl OptionStack {
    pub fn new(baseline: CompileOptions) -> Self {
        Self {
            frames: vec![baseline],
        }
    }

    pub fn reset(&mut self, baseline: CompileOptions) {
        self.frames.clear();
        self.frames.push(baseline);
    }

    pub fn current(&self) -> &CompileOptions {
        self.frames.last().expect("option stack always has a baseline")
    }

    pub fn current_mut(&mut self) -> &mut CompileOptions {
        self.frames
            .last_mut()
            .expect("option stack always has a baseline")
    }

    pub fn push<'a>(&mut self, overrides: impl IntoIterator<Item = &'a OptionOverride>) {
        let mut frame = self.current().clone();

        for option_override in overrides {
            option_override.apply(&mut frame);
        }

        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Result<CompileOptions, UnbalancedPop> {
        if self.frames.len() <= 1 {
            return Err(UnbalancedPop);
        }

        Ok(self.frames.pop().expect("checked length"))
    }

    /// Number of pushes not yet matched by a pop
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}
