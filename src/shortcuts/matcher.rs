//! Key-combination matching.

use super::keys::pressed_keys;
use crossterm::event::KeyEvent;

/// Whether `event` presses exactly the combination `target`.
///
/// The pressed list must have the same length as the target (so `A` does
/// not match `⌘ A`) and contain every target symbol, compared
/// case-insensitively.
#[must_use]
pub fn matches<S: AsRef<str>>(event: &KeyEvent, target: &[S]) -> bool {
    matches_pressed(&pressed_keys(event), target)
}

/// [`matches`] against an already-built pressed list.
#[must_use]
pub fn matches_pressed<S: AsRef<str>>(pressed: &[String], target: &[S]) -> bool {
    if pressed.len() != target.len() {
        return false;
    }
    target.iter().all(|symbol| {
        let symbol = symbol.as_ref();
        let upper = symbol.to_uppercase();
        pressed
            .iter()
            .any(|p| p == symbol || *p == upper || p.to_uppercase() == upper)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::keys::{CONTROL, ESC, META, SHIFT};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), modifiers)
    }

    #[test]
    fn test_single_key() {
        assert!(matches(&key('a', KeyModifiers::NONE), &["A"]));
        assert!(matches(&key('a', KeyModifiers::NONE), &["a"]));
        assert!(!matches(&key('b', KeyModifiers::NONE), &["A"]));
    }

    #[test]
    fn test_length_guard_rejects_extra_modifier() {
        assert!(!matches(&key('a', KeyModifiers::SUPER), &["A"]));
        assert!(matches(&key('a', KeyModifiers::SUPER), &[META, "A"]));
    }

    #[test]
    fn test_target_order_does_not_matter() {
        assert!(matches(&key('s', KeyModifiers::CONTROL), &["S", CONTROL]));
    }

    #[test]
    fn test_missing_modifier_rejected() {
        assert!(!matches(&key('s', KeyModifiers::NONE), &[CONTROL, "S"]));
        assert!(!matches(&key('s', KeyModifiers::ALT), &[CONTROL, "S"]));
    }

    #[test]
    fn test_named_key_case_insensitive() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches(&esc, &[ESC]));
        assert!(matches(&esc, &["esc"]));
        assert!(matches(&esc, &["ESC"]));
    }

    #[test]
    fn test_shifted_letter() {
        assert!(matches(&key('A', KeyModifiers::SHIFT), &[SHIFT, "A"]));
        assert!(!matches(&key('A', KeyModifiers::SHIFT), &["A"]));
    }

    #[test]
    fn test_empty_target_never_matches_real_key() {
        let empty: [&str; 0] = [];
        assert!(!matches(&key('a', KeyModifiers::NONE), &empty));
    }
}
