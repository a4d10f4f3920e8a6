use std::fmt;

/// A failed clipboard export.
///
/// Never fatal: the editor logs it and leaves the copy notice hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened.
    Unavailable(String),
    /// The clipboard was opened but rejected the text.
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Write(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let e = ClipboardError::Write("busy".into());
        assert_eq!(e.to_string(), "clipboard write failed: busy");
        let e = ClipboardError::Unavailable("no display".into());
        assert_eq!(e.to_string(), "clipboard unavailable: no display");
    }
}
