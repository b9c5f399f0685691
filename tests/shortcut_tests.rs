//! Integration tests for key matching and dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use qgen_review::shortcuts::keys::{ALT, CONTROL, ENTER, ESC, META, SHIFT, SPACE};
use qgen_review::shortcuts::{
    find_conflicts, matches, pressed_keys, Dispatch, Focus, InputKind, ListenerRegistry,
    Shortcut, ShortcutDispatcher, ShortcutIssue,
};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

// ============================================================================
// Matching
// ============================================================================

mod matching {
    use super::*;

    #[test]
    fn test_modifier_order_is_fixed() {
        let event = key(
            KeyCode::Char('k'),
            KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::SUPER,
        );
        assert_eq!(pressed_keys(&event), vec![META, CONTROL, ALT, SHIFT, "K"]);
    }

    #[test]
    fn test_declaration_order_does_not_matter() {
        let event = key(KeyCode::Char('s'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(matches(&event, &[SHIFT, CONTROL, "s"]));
        assert!(matches(&event, &["s", CONTROL, SHIFT]));
    }

    #[test]
    fn test_extra_or_missing_modifier_rejects() {
        let plain = key(KeyCode::Char('a'), KeyModifiers::NONE);
        let with_meta = key(KeyCode::Char('a'), KeyModifiers::SUPER);
        assert!(!matches(&plain, &[META, "A"]));
        assert!(!matches(&with_meta, &["A"]));
        assert!(matches(&with_meta, &[META, "A"]));
    }

    #[test]
    fn test_named_keys_use_symbols() {
        assert!(matches(&key(KeyCode::Esc, KeyModifiers::NONE), &[ESC]));
        assert!(matches(&key(KeyCode::Enter, KeyModifiers::CONTROL), &[CONTROL, ENTER]));
        assert!(matches(&key(KeyCode::Char(' '), KeyModifiers::NONE), &[SPACE]));
        assert!(matches(&key(KeyCode::F(5), KeyModifiers::NONE), &["f5"]));
    }

    #[test]
    fn test_uppercase_char_implies_shift() {
        let event = key(KeyCode::Char('G'), KeyModifiers::NONE);
        assert!(matches(&event, &[SHIFT, "G"]));
        assert!(!matches(&event, &["G"]));
    }
}

// ============================================================================
// Dispatch
// ============================================================================

mod dispatch {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Save,
        Approve,
        ApproveAlt,
        Peek,
    }

    fn declarations(can_approve: bool) -> Vec<Shortcut<Action>> {
        vec![
            Shortcut::new(&[CONTROL, "S"], Action::Save),
            Shortcut::new(&["Y"], Action::Approve).when(can_approve),
            Shortcut::new(&["Y"], Action::ApproveAlt),
            Shortcut::new(&["P"], Action::Peek).passthrough(),
        ]
    }

    fn run(
        dispatcher: &ShortcutDispatcher,
        event: KeyEvent,
        focus: Focus,
        set: &[Shortcut<Action>],
    ) -> (Dispatch, Vec<Action>) {
        let mut invoked = Vec::new();
        let outcome = dispatcher.dispatch(&event, focus, set, |a| invoked.push(*a));
        (outcome, invoked)
    }

    #[test]
    fn test_first_enabled_match_wins() {
        let registry = ListenerRegistry::new();
        let dispatcher = ShortcutDispatcher::active(&registry, "test");
        let y = key(KeyCode::Char('y'), KeyModifiers::NONE);

        let (_, invoked) = run(&dispatcher, y, Focus::None, &declarations(true));
        assert_eq!(invoked, vec![Action::Approve]);

        let (_, invoked) = run(&dispatcher, y, Focus::None, &declarations(false));
        assert_eq!(invoked, vec![Action::ApproveAlt]);
    }

    #[test]
    fn test_text_focus_suppresses_plain_keys_only() {
        let registry = ListenerRegistry::new();
        let dispatcher = ShortcutDispatcher::active(&registry, "test");
        let set = declarations(true);
        let focus = Focus::Input(InputKind::Text);

        let (outcome, invoked) = run(&dispatcher, key(KeyCode::Char('y'), KeyModifiers::NONE), focus, &set);
        assert_eq!(outcome, Dispatch::Suppressed);
        assert!(invoked.is_empty());

        let (outcome, _) = run(&dispatcher, key(KeyCode::Char('Y'), KeyModifiers::SHIFT), focus, &set);
        assert_eq!(outcome, Dispatch::Suppressed);

        let (outcome, invoked) = run(
            &dispatcher,
            key(KeyCode::Char('s'), KeyModifiers::CONTROL),
            focus,
            &set,
        );
        assert_eq!(outcome, Dispatch::Invoked { consumed: true });
        assert_eq!(invoked, vec![Action::Save]);
    }

    #[test]
    fn test_non_text_focus_does_not_suppress() {
        let registry = ListenerRegistry::new();
        let dispatcher = ShortcutDispatcher::active(&registry, "test");
        let y = key(KeyCode::Char('y'), KeyModifiers::NONE);
        for focus in [Focus::Button, Focus::Select, Focus::Input(InputKind::Checkbox)] {
            let (outcome, _) = run(&dispatcher, y, focus, &declarations(true));
            assert!(outcome.invoked(), "{focus:?} should not suppress");
        }
    }

    #[test]
    fn test_passthrough_invokes_without_consuming() {
        let registry = ListenerRegistry::new();
        let dispatcher = ShortcutDispatcher::active(&registry, "test");
        let (outcome, invoked) = run(
            &dispatcher,
            key(KeyCode::Char('p'), KeyModifiers::NONE),
            Focus::None,
            &declarations(true),
        );
        assert_eq!(outcome, Dispatch::Invoked { consumed: false });
        assert_eq!(invoked, vec![Action::Peek]);
    }

    #[test]
    fn test_release_and_inactive_do_nothing() {
        let registry = ListenerRegistry::new();
        let mut dispatcher = ShortcutDispatcher::active(&registry, "test");
        let mut release = key(KeyCode::Char('y'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        let (outcome, invoked) = run(&dispatcher, release, Focus::None, &declarations(true));
        assert_eq!(outcome, Dispatch::Unmatched);
        assert!(invoked.is_empty());

        dispatcher.set_enabled(false);
        let (outcome, _) = run(
            &dispatcher,
            key(KeyCode::Char('y'), KeyModifiers::NONE),
            Focus::None,
            &declarations(true),
        );
        assert_eq!(outcome, Dispatch::Inactive);
    }

    #[test]
    fn test_listeners_released_on_drop() {
        let registry = ListenerRegistry::new();
        {
            let _a = ShortcutDispatcher::active(&registry, "a");
            let mut b = ShortcutDispatcher::active(&registry, "b");
            assert_eq!(registry.len(), 2);
            b.set_enabled(false);
            b.set_enabled(true);
            b.set_enabled(true);
            assert_eq!(registry.len(), 2);
        }
        assert!(registry.is_empty());
    }
}

// ============================================================================
// Declaration-set diagnostics
// ============================================================================

#[test]
fn test_conflicts_only_between_enabled_descriptors() {
    let set = vec![
        Shortcut::new(&["Y"], 1),
        Shortcut::new(&["y"], 2).when(false),
        Shortcut::new(&["Y"], 3),
    ];
    assert_eq!(
        find_conflicts(&set),
        vec![ShortcutIssue::Shadowed {
            first: 0,
            shadowed: 2,
            label: "Y".to_string(),
        }]
    );
}
