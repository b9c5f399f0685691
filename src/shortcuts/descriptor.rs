//! Shortcut descriptors and declaration-set diagnostics.

use super::keys::is_modifier;
use super::matcher::matches_pressed;

/// Binds a key combination to an action.
///
/// Descriptors are rebuilt from screen state on every render, so `enabled`
/// always reflects the current state.
#[derive(Debug, Clone)]
pub struct Shortcut<A> {
    /// Key symbols, modifiers first (see [`super::keys`])
    pub keys: &'static [&'static str],
    /// Action to invoke
    pub action: A,
    /// Disabled descriptors are skipped during dispatch
    pub enabled: bool,
    /// Mark the event consumed so the focused widget never sees it
    pub suppress_default: bool,
    /// Brief description for help and footer
    pub description: &'static str,
    /// Whether this is shown in the footer
    pub primary: bool,
}

impl<A> Shortcut<A> {
    /// Create an enabled shortcut that consumes its event.
    pub const fn new(keys: &'static [&'static str], action: A) -> Self {
        Self {
            keys,
            action,
            enabled: true,
            suppress_default: true,
            description: "",
            primary: false,
        }
    }

    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Show in the footer.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Enable only when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }

    /// Invoke the action but let the event reach the focused widget too.
    #[must_use]
    pub fn passthrough(mut self) -> Self {
        self.suppress_default = false;
        self
    }

    /// Display label, e.g. `Ctrl+S`.
    #[must_use]
    pub fn label(&self) -> String {
        self.keys.join("+")
    }

    /// Whether this descriptor's combination equals the pressed list.
    #[must_use]
    pub fn matches(&self, pressed: &[String]) -> bool {
        matches_pressed(pressed, self.keys)
    }

    /// Exactly one non-modifier key and no repeated symbols.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let main_keys = self.keys.iter().filter(|k| !is_modifier(k)).count();
        let mut seen: Vec<String> = Vec::with_capacity(self.keys.len());
        for key in self.keys {
            let upper = key.to_uppercase();
            if seen.contains(&upper) {
                return false;
            }
            seen.push(upper);
        }
        main_keys == 1
    }

    fn normalized_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().map(|k| k.to_uppercase()).collect();
        keys.sort();
        keys
    }
}

/// A problem found in a declaration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutIssue {
    /// Descriptor at this index has no main key, several, or duplicates
    Malformed { index: usize, label: String },
    /// Two simultaneously enabled descriptors share a combination. Only
    /// the first one can ever fire.
    Shadowed {
        first: usize,
        shadowed: usize,
        label: String,
    },
}

/// Report malformed and shadowed descriptors.
///
/// First-match-wins is the dispatch rule, so overlaps are legal; this is a
/// diagnostic for callers that want to log them.
#[must_use]
pub fn find_conflicts<A>(shortcuts: &[Shortcut<A>]) -> Vec<ShortcutIssue> {
    let mut issues = Vec::new();
    let normalized: Vec<Vec<String>> = shortcuts.iter().map(Shortcut::normalized_keys).collect();

    for (index, shortcut) in shortcuts.iter().enumerate() {
        if !shortcut.is_well_formed() {
            issues.push(ShortcutIssue::Malformed {
                index,
                label: shortcut.label(),
            });
        }
    }

    for (i, a) in shortcuts.iter().enumerate() {
        if !a.enabled {
            continue;
        }
        for (j, b) in shortcuts.iter().enumerate().skip(i + 1) {
            if b.enabled && normalized[i] == normalized[j] {
                issues.push(ShortcutIssue::Shadowed {
                    first: i,
                    shadowed: j,
                    label: b.label(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::keys::{CONTROL, SHIFT};

    #[test]
    fn test_builder_defaults() {
        let s = Shortcut::new(&[CONTROL, "S"], 1).describe("Save");
        assert!(s.enabled);
        assert!(s.suppress_default);
        assert!(!s.primary);
        assert_eq!(s.label(), "Ctrl+S");
        let s = s.when(false).passthrough().primary();
        assert!(!s.enabled);
        assert!(!s.suppress_default);
        assert!(s.primary);
    }

    #[test]
    fn test_well_formed() {
        assert!(Shortcut::new(&[SHIFT, "A"], ()).is_well_formed());
        assert!(!Shortcut::new(&[SHIFT], ()).is_well_formed());
        assert!(!Shortcut::new(&["A", "B"], ()).is_well_formed());
        assert!(!Shortcut::new(&["A", "a"], ()).is_well_formed());
    }

    #[test]
    fn test_shadowed_only_when_both_enabled() {
        let set = vec![
            Shortcut::new(&["E"], 0),
            Shortcut::new(&["e"], 1),
            Shortcut::new(&["E"], 2).when(false),
        ];
        let issues = find_conflicts(&set);
        assert_eq!(
            issues,
            vec![ShortcutIssue::Shadowed {
                first: 0,
                shadowed: 1,
                label: "e".to_string()
            }]
        );
    }

    #[test]
    fn test_order_insensitive_overlap() {
        let set = vec![
            Shortcut::new(&[CONTROL, "S"], 0),
            Shortcut::new(&["S", CONTROL], 1),
        ];
        assert_eq!(find_conflicts(&set).len(), 1);
    }
}
