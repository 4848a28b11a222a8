use std::fmt;

use parking_lot::Mutex;

/// The platform refused or was unable to perform a clipboard operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    reason: String,
}

impl ClipboardError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(value: arboard::Error) -> Self {
        Self::new(value.to_string())
    }
}

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    fn get_text(&self) -> Option<String>;
}

/// The desktop clipboard.
///
/// The connection to the platform clipboard is opened on first use, so creating this never fails
/// on headless machines.
pub struct SystemClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(None),
        }
    }

    fn with<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, ClipboardError> {
        let mut clipboard = self.clipboard.lock();
        if clipboard.is_none() {
            *clipboard = Some(arboard::Clipboard::new()?);
        }

        match clipboard.as_mut() {
            Some(clipboard) => Ok(f(clipboard)?),
            None => Err(ClipboardError::new("clipboard unavailable")),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.with(|clipboard| clipboard.set_text(text))
    }

    fn get_text(&self) -> Option<String> {
        self.with(|clipboard| clipboard.get_text()).ok()
    }
}

/// A process local clipboard
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }

    fn get_text(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text(), None);

        clipboard.set_text("#3498DB").unwrap();
        assert_eq!(clipboard.get_text().as_deref(), Some("#3498DB"));
    }

    #[test]
    fn arboard_errors_keep_reason() {
        let err = ClipboardError::from(arboard::Error::ClipboardNotSupported);
        assert_eq!(err.reason(), arboard::Error::ClipboardNotSupported.to_string());
    }
}
