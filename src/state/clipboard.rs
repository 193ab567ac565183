//! Clipboard access for copying addresses and explorer links.
//!
//! On Linux the external tools `wl-copy`, `xclip` and `xsel` are tried
//! first so the copied text outlives the process; `arboard` is the fallback
//! and the only backend elsewhere.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Cross-platform clipboard manager.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard backend accepts the text.
    pub fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            tracing::debug!("Copied {} bytes with an external tool", text.len());
            return Ok(());
        }

        let mut clipboard = arboard::Clipboard::new().map_err(|err| {
            tracing::warn!("Clipboard unavailable: {err}");
            ClipboardError::NotAvailable
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];
        TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().is_ok_and(|status| status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ClipboardError::NotAvailable.to_string(), "Clipboard not available");
        assert_eq!(
            ClipboardError::CopyFailed("denied".to_string()).to_string(),
            "Failed to copy: denied"
        );
    }

    #[test]
    fn test_default_prefers_external_tools() {
        assert!(ClipboardManager::default().prefer_external_tools);
    }
}
