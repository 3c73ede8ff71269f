use crate::{DiagnosticId, DiagnosticKind};
use indexmap::IndexMap;

/// Which hints and warnings are allowed to be emitted.
///
/// Errors and fatal errors are never affected by this table.
#[derive(Clone, Debug)]
pub struct SuppressionTable {
    hint_overrides: IndexMap<DiagnosticId, bool>,
    warning_overrides: IndexMap<DiagnosticId, bool>,
    hints_enabled: bool,
    warnings_enabled: bool,
}

impl Default for SuppressionTable {
    fn default() -> Self {
        Self {
            hint_overrides: IndexMap::new(),
            warning_overrides: IndexMap::new(),
            hints_enabled: true,
            warnings_enabled: true,
        }
    }
}

impl SuppressionTable {
    pub fn set(&mut self, kind: DiagnosticKind, id: DiagnosticId, enabled: bool) {
        if let Some(overrides) = self.overrides_mut(kind) {
            overrides.insert(id, enabled);
        }
    }

    /// Switches a whole severity on or off.
    ///
    /// Earlier per-id toggles of that severity are forgotten, so the most
    /// recent toggle always decides.
    pub fn set_all(&mut self, kind: DiagnosticKind, enabled: bool) {
        match kind {
            DiagnosticKind::Hint => self.hints_enabled = enabled,
            DiagnosticKind::Warning => self.warnings_enabled = enabled,
            DiagnosticKind::Error | DiagnosticKind::Fatal => return,
        }

        if let Some(overrides) = self.overrides_mut(kind) {
            overrides.clear();
        }
    }

    pub fn allows(&self, kind: DiagnosticKind, id: DiagnosticId) -> bool {
        let (overrides, enabled) = match kind {
            DiagnosticKind::Hint => (&self.hint_overrides, self.hints_enabled),
            DiagnosticKind::Warning => (&self.warning_overrides, self.warnings_enabled),
            DiagnosticKind::Error | DiagnosticKind::Fatal => return true,
        };

        overrides.get(&id).copied().unwrap_or(enabled)
    }

    fn overrides_mut(&mut self, kind: DiagnosticKind) -> Option<&mut IndexMap<DiagnosticId, bool>> {
        match kind {
            DiagnosticKind::Hint => Some(&mut self.hint_overrides),
            DiagnosticKind::Warning => Some(&mut self.warning_overrides),
            DiagnosticKind::Error | DiagnosticKind::Fatal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARNING: DiagnosticKind = DiagnosticKind::Warning;
    const HINT: DiagnosticKind = DiagnosticKind::Hint;

    #[test]
    fn disabling_twice_is_same_as_once() {
        let mut once = SuppressionTable::default();
        once.set(WARNING, DiagnosticId::Deprecated, false);

        let mut twice = SuppressionTable::default();
        twice.set(WARNING, DiagnosticId::Deprecated, false);
        twice.set(WARNING, DiagnosticId::Deprecated, false);

        for kind in [HINT, WARNING] {
            assert_eq!(
                once.allows(kind, DiagnosticId::Deprecated),
                twice.allows(kind, DiagnosticId::Deprecated)
            );
        }
        assert!(!twice.allows(WARNING, DiagnosticId::Deprecated));

        twice.set(WARNING, DiagnosticId::Deprecated, true);
        assert!(twice.allows(WARNING, DiagnosticId::Deprecated));
    }

    #[test]
    fn errors_ignore_suppression() {
        let mut table = SuppressionTable::default();
        table.set(WARNING, DiagnosticId::UserWarning, false);
        table.set_all(WARNING, false);
        table.set_all(DiagnosticKind::Error, false);

        assert!(!table.allows(WARNING, DiagnosticId::UserWarning));
        assert!(table.allows(DiagnosticKind::Error, DiagnosticId::User));
        assert!(table.allows(DiagnosticKind::Fatal, DiagnosticId::User));
    }

    #[test]
    fn global_switch_overrides_individual_enable() {
        let mut table = SuppressionTable::default();
        table.set(HINT, DiagnosticId::XDeclaredButNotUsed, true);
        table.set_all(HINT, false);
        assert!(!table.allows(HINT, DiagnosticId::XDeclaredButNotUsed));
        assert!(table.allows(WARNING, DiagnosticId::XDeclaredButNotUsed));
    }

    #[test]
    fn individual_enable_after_global_switch_restores_emission() {
        let mut table = SuppressionTable::default();
        table.set_all(WARNING, false);
        table.set(WARNING, DiagnosticId::Deprecated, true);

        assert!(table.allows(WARNING, DiagnosticId::Deprecated));
        assert!(!table.allows(WARNING, DiagnosticId::ConflictingPragmas));

        table.set_all(WARNING, true);
        table.set(WARNING, DiagnosticId::Deprecated, false);
        assert!(!table.allows(WARNING, DiagnosticId::Deprecated));
        assert!(table.allows(WARNING, DiagnosticId::ConflictingPragmas));
    }

    #[test]
    fn hint_and_warning_toggles_are_independent() {
        let mut table = SuppressionTable::default();
        table.set(HINT, DiagnosticId::Deprecated, false);
        assert!(!table.allows(HINT, DiagnosticId::Deprecated));
        assert!(table.allows(WARNING, DiagnosticId::Deprecated));
    }
}
