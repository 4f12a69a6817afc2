//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Destination for copied passwords.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the OS, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    /// Open the clipboard now so a missing clipboard is reported up front.
    pub fn open() -> Result<Self, ClipboardError> {
        let mut clipboard = Self::default();
        clipboard.context()?;
        Ok(clipboard)
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialised".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Read back so the provider's copy is materialised, then wipe ours
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("wrote {} chars to clipboard", text.len());
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// In-memory clipboard. Clones share contents, so a test can keep a
    /// handle after moving one into the form.
    #[derive(Clone, Default)]
    pub struct MemoryClipboard(Rc<RefCell<Option<String>>>);

    impl MemoryClipboard {
        pub fn contents(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl Clipboard for MemoryClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if text.is_empty() {
                return Err(ClipboardError::Empty);
            }
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    /// Clipboard that rejects every write.
    pub struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("permission denied".to_string()))
        }
    }
}
