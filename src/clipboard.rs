//! System clipboard access for the share text
//!
//! The text is piped into the first clipboard helper found on the system.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard helper available")]
    Unavailable,
    #[error("clipboard helper {program} failed: {reason}")]
    Failed { program: &'static str, reason: String },
}

pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    /// Returns `ClipboardError` if nothing could take the text.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Helpers tried in order: Wayland, X11, macOS, Windows/WSL
const HELPERS: [(&str, &[&str]); 5] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip.exe", &[]),
];

/// Clipboard backed by external helper programs
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe(program: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
        let failed = |reason: String| ClipboardError::Failed { program, reason };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| failed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| failed(e.to_string()))?;
        }

        let status = child.wait().map_err(|e| failed(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(failed(status.to_string()))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::Unavailable;
        for (program, args) in HELPERS {
            match Self::pipe(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

/// Clipboard that keeps the copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.copy("WordMint Daily 3/6").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("WordMint Daily 3/6"));
    }

    #[test]
    fn failing_clipboard_reports_unavailable() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        assert!(matches!(
            clipboard.copy("text"),
            Err(ClipboardError::Unavailable)
        ));
        assert_eq!(clipboard.contents, None);
    }
}
