//! What currently holds keyboard focus in a screen.

/// Kind of single-line input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Search,
    Url,
    Number,
    Checkbox,
    Radio,
}

impl InputKind {
    /// Whether typing into this input produces text.
    #[must_use]
    pub const fn is_free_text(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Password | Self::Search | Self::Url | Self::Number
        )
    }
}

/// The focused element of the active screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Nothing focused; the screen body has the keyboard
    #[default]
    None,
    Input(InputKind),
    /// Multi-line text area
    TextArea,
    /// Free-form editable region
    Editable,
    Button,
    Select,
}

impl Focus {
    /// Whether the focused element consumes plain keystrokes as text.
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        match self {
            Self::Input(kind) => kind.is_free_text(),
            Self::TextArea | Self::Editable => true,
            Self::None | Self::Button | Self::Select => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_focus() {
        for kind in [
            InputKind::Text,
            InputKind::Email,
            InputKind::Password,
            InputKind::Search,
            InputKind::Url,
            InputKind::Number,
        ] {
            assert!(Focus::Input(kind).accepts_text(), "{kind:?}");
        }
        assert!(Focus::TextArea.accepts_text());
        assert!(Focus::Editable.accepts_text());
    }

    #[test]
    fn test_controls_do_not_take_text() {
        assert!(!Focus::Input(InputKind::Checkbox).accepts_text());
        assert!(!Focus::Input(InputKind::Radio).accepts_text());
        assert!(!Focus::Button.accepts_text());
        assert!(!Focus::Select.accepts_text());
        assert!(!Focus::None.accepts_text());
    }
}
