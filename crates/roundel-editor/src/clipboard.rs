//! Copying the value string to the system clipboard.

use std::time::{Duration, Instant};

use crate::error::ClipboardError;
use crate::radii::BorderRadius;

/// Default time the "Copied to Clipboard" acknowledgment stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Destination for exported text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard via `arboard`.
///
/// The handle is opened on first use and kept, since on some platforms the
/// owning process serves the clipboard contents. If opening fails it is
/// retried on the next write.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".into()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Transient copy acknowledgment.
///
/// Visible for `duration` after the last successful copy; a newer copy
/// restarts the window.
#[derive(Debug, Clone)]
pub struct CopyNotice {
    duration: Duration,
    shown_at: Option<Instant>,
}

impl CopyNotice {
    pub fn new(duration: Duration) -> Self {
        Self { duration, shown_at: None }
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|end| now < end)
    }

    /// Instant at which the notice hides, if it was ever shown.
    pub fn expires_at(&self) -> Option<Instant> {
        self.shown_at.map(|t| t + self.duration)
    }
}

impl Default for CopyNotice {
    fn default() -> Self {
        Self::new(NOTICE_DURATION)
    }
}

/// Writes the value string of `radius` to `writer`.
///
/// On success the notice is (re)shown at `now`. On failure the error is
/// logged and the notice is left as it was.
pub fn export(
    writer: &mut dyn ClipboardWriter,
    radius: &BorderRadius,
    notice: &mut CopyNotice,
    now: Instant,
) -> Result<(), ClipboardError> {
    let value = radius.to_string();
    match writer.write_text(&value) {
        Ok(()) => {
            log::info!("copied border-radius: {value}");
            notice.show(now);
            Ok(())
        }
        Err(e) => {
            log::error!("failed to copy border-radius: {e}");
            Err(e)
        }
    }
}
