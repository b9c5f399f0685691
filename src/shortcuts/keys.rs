//! Key-symbol normalization.
//!
//! A key event becomes an ordered list of symbols: held modifiers in the
//! fixed order meta, control, alt, shift, followed by the main key. Named
//! keys go through [`KEY_SYMBOLS`]; everything else is upper-cased.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const META: &str = "⌘";
pub const CONTROL: &str = "Ctrl";
pub const ALT: &str = "⌥";
pub const SHIFT: &str = "⇧";

pub const ESC: &str = "Esc";
pub const ENTER: &str = "↵";
pub const UP: &str = "↑";
pub const DOWN: &str = "↓";
pub const LEFT: &str = "←";
pub const RIGHT: &str = "→";
pub const SPACE: &str = "␣";
pub const TAB: &str = "⇥";
pub const BACKSPACE: &str = "⌫";
pub const DELETE: &str = "⌦";

/// Modifier symbols in pressed-key order.
pub const MODIFIERS: [&str; 4] = [META, CONTROL, ALT, SHIFT];

/// Named keys with a dedicated symbol.
const KEY_SYMBOLS: &[(KeyCode, &str)] = &[
    (KeyCode::Esc, ESC),
    (KeyCode::Enter, ENTER),
    (KeyCode::Up, UP),
    (KeyCode::Down, DOWN),
    (KeyCode::Left, LEFT),
    (KeyCode::Right, RIGHT),
    (KeyCode::Char(' '), SPACE),
    (KeyCode::Tab, TAB),
    (KeyCode::BackTab, TAB),
    (KeyCode::Backspace, BACKSPACE),
    (KeyCode::Delete, DELETE),
];

/// Whether a symbol names a modifier.
#[must_use]
pub fn is_modifier(symbol: &str) -> bool {
    MODIFIERS.iter().any(|m| m.eq_ignore_ascii_case(symbol))
}

/// Raw name of a key without a dedicated symbol. `None` for keys that
/// cannot be the main key of a combination.
fn raw_key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Menu => "Menu".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::PrintScreen => "PrintScreen".to_string(),
        _ => return None,
    };
    Some(name)
}

/// Symbol for the main (non-modifier) key of an event.
#[must_use]
pub fn main_key_symbol(code: KeyCode) -> Option<String> {
    KEY_SYMBOLS
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, symbol)| (*symbol).to_string())
        .or_else(|| raw_key_name(code).map(|name| name.to_uppercase()))
}

/// Whether shift is effectively held: either reported, or implied by the
/// key itself (back-tab, an upper-case letter).
fn shift_held(event: &KeyEvent) -> bool {
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        return true;
    }
    match event.code {
        KeyCode::BackTab => true,
        KeyCode::Char(c) => c.is_alphabetic() && c.is_uppercase(),
        _ => false,
    }
}

/// Build the pressed-keys list for an event.
#[must_use]
pub fn pressed_keys(event: &KeyEvent) -> Vec<String> {
    let mods = event.modifiers;
    let mut pressed = Vec::with_capacity(5);
    if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        pressed.push(META.to_string());
    }
    if mods.contains(KeyModifiers::CONTROL) {
        pressed.push(CONTROL.to_string());
    }
    if mods.contains(KeyModifiers::ALT) {
        pressed.push(ALT.to_string());
    }
    if shift_held(event) {
        pressed.push(SHIFT.to_string());
    }
    if let Some(symbol) = main_key_symbol(event.code) {
        pressed.push(symbol);
    }
    pressed
}

/// Whether a command modifier (meta, control, alt) is held. Shift alone
/// is part of ordinary typing and does not count.
#[must_use]
pub fn command_modifier_held(event: &KeyEvent) -> bool {
    event
        .modifiers
        .intersects(KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_named_keys_use_table() {
        assert_eq!(pressed_keys(&key(KeyCode::Esc, KeyModifiers::NONE)), vec![ESC]);
        assert_eq!(pressed_keys(&key(KeyCode::Up, KeyModifiers::NONE)), vec![UP]);
        assert_eq!(
            pressed_keys(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            vec![SPACE]
        );
    }

    #[test]
    fn test_fallback_upper_cases() {
        assert_eq!(pressed_keys(&key(KeyCode::Char('e'), KeyModifiers::NONE)), vec!["E"]);
        assert_eq!(pressed_keys(&key(KeyCode::Home, KeyModifiers::NONE)), vec!["HOME"]);
        assert_eq!(pressed_keys(&key(KeyCode::F(5), KeyModifiers::NONE)), vec!["F5"]);
        assert_eq!(pressed_keys(&key(KeyCode::Char('['), KeyModifiers::NONE)), vec!["["]);
    }

    #[test]
    fn test_modifier_order_is_fixed() {
        let all = KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::SUPER;
        assert_eq!(
            pressed_keys(&key(KeyCode::Char('k'), all)),
            vec![META, CONTROL, ALT, SHIFT, "K"]
        );
    }

    #[test]
    fn test_uppercase_letter_implies_shift() {
        assert_eq!(
            pressed_keys(&key(KeyCode::Char('A'), KeyModifiers::NONE)),
            vec![SHIFT, "A"]
        );
        assert_eq!(
            pressed_keys(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            vec![SHIFT, "A"]
        );
        assert_eq!(
            pressed_keys(&key(KeyCode::BackTab, KeyModifiers::NONE)),
            vec![SHIFT, TAB]
        );
    }

    #[test]
    fn test_bare_modifier_has_no_main_key() {
        assert!(pressed_keys(&key(KeyCode::CapsLock, KeyModifiers::NONE)).is_empty());
        assert_eq!(
            pressed_keys(&key(KeyCode::Null, KeyModifiers::CONTROL)),
            vec![CONTROL]
        );
    }

    #[test]
    fn test_command_modifier_excludes_shift() {
        assert!(!command_modifier_held(&key(KeyCode::Char('E'), KeyModifiers::SHIFT)));
        assert!(command_modifier_held(&key(KeyCode::Char('e'), KeyModifiers::SUPER)));
        assert!(command_modifier_held(&key(KeyCode::Char('e'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_is_modifier() {
        assert!(is_modifier(SHIFT));
        assert!(is_modifier("ctrl"));
        assert!(!is_modifier("A"));
    }
}
