//! Loading flag for network actions.

use std::cell::Cell;
use std::rc::Rc;

/// Whether a backend request is in flight for a screen.
///
/// [`LoadingFlag::begin`] sets the flag and returns a guard that clears it
/// when dropped, so an early return or `?` cannot leave a screen stuck in
/// the loading state.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    active: Rc<Cell<bool>>,
}

impl LoadingFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.active.get()
    }

    /// Mark a request as started.
    #[must_use]
    pub fn begin(&self) -> LoadingGuard {
        self.active.set(true);
        LoadingGuard {
            active: Rc::clone(&self.active),
        }
    }
}

/// Clears the loading flag on drop.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Rc<Cell<bool>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_on_drop() {
        let flag = LoadingFlag::new();
        {
            let _guard = flag.begin();
            assert!(flag.is_loading());
        }
        assert!(!flag.is_loading());
    }

    #[test]
    fn test_guard_clears_on_error_path() {
        fn failing(flag: &LoadingFlag) -> Result<(), String> {
            let _guard = flag.begin();
            Err("network".to_string())?;
            Ok(())
        }
        let flag = LoadingFlag::new();
        assert!(failing(&flag).is_err());
        assert!(!flag.is_loading());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = LoadingFlag::new();
        let observer = flag.clone();
        let guard = flag.begin();
        assert!(observer.is_loading());
        drop(guard);
        assert!(!observer.is_loading());
    }
}
