use std::io;
use std::sync::{Arc, Mutex};
use std::thread;

use arboard::Clipboard;

use crate::app::infrastructure::error::ClipboardError;

/// The two clipboard operations the app needs.
///
/// Implementations are called from worker threads, never from the UI thread.
pub trait ClipboardBackend: Send + Sync {
    /// Current text on the clipboard. An empty or non-text clipboard is `Ok("")`.
    fn read_text(&self) -> Result<String, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError::new(e.to_string())
    }
}

/// The system clipboard, through arboard.
///
/// The arboard handle is opened on first use and then kept for the life of
/// the process: on X11 the copied text is served by whoever owns the handle,
/// so dropping it right after a write would lose the selection.
pub struct SystemClipboard {
    inner: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, ClipboardError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClipboardError::new("clipboard handle poisoned"))?;
        if guard.is_none() {
            *guard = Some(Clipboard::new()?);
        }
        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError::new("clipboard handle missing"));
        };
        f(clipboard).map_err(ClipboardError::from)
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.with_clipboard(|clipboard| match clipboard.get_text() {
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            other => other,
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.with_clipboard(|clipboard| clipboard.set_text(text))
    }
}

/// Read the clipboard on a worker thread and hand the result to `on_done`.
///
/// Returns an error only if the thread could not be started, in which case
/// `on_done` is never called.
pub fn spawn_read<F>(backend: Arc<dyn ClipboardBackend>, on_done: F) -> io::Result<()>
where
    F: FnOnce(Result<String, ClipboardError>) + Send + 'static,
{
    thread::Builder::new()
        .name("clipboard-read".to_string())
        .spawn(move || on_done(backend.read_text()))?;
    Ok(())
}

/// Write `text` to the clipboard on a worker thread.
pub fn spawn_write<F>(backend: Arc<dyn ClipboardBackend>, text: String, on_done: F) -> io::Result<()>
where
    F: FnOnce(Result<(), ClipboardError>) + Send + 'static,
{
    thread::Builder::new()
        .name("clipboard-write".to_string())
        .spawn(move || on_done(backend.write_text(&text)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Mutex<String>,
        fail: bool,
        reads: AtomicUsize,
        writes: AtomicUsize,
    }

    impl ClipboardBackend for FakeClipboard {
        fn read_text(&self) -> Result<String, ClipboardError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClipboardError::new("denied"));
            }
            Ok(self.contents.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClipboardError::new("denied"));
            }
            *self.contents.lock().unwrap() = text.to_string();
            Ok(())
        }
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_spawn_read_delivers_contents() {
        let fake = Arc::new(FakeClipboard {
            contents: Mutex::new("chorus".to_string()),
            ..Default::default()
        });
        let (tx, rx) = mpsc::channel();
        spawn_read(fake.clone(), move |result| tx.send(result).unwrap()).unwrap();

        assert_eq!(rx.recv_timeout(WAIT).unwrap(), Ok("chorus".to_string()));
        assert_eq!(fake.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_spawn_write_then_read_back() {
        let fake = Arc::new(FakeClipboard::default());
        let (tx, rx) = mpsc::channel();
        spawn_write(fake.clone(), "Hello".to_string(), move |result| {
            tx.send(result).unwrap()
        })
        .unwrap();

        assert_eq!(rx.recv_timeout(WAIT).unwrap(), Ok(()));
        assert_eq!(fake.writes.load(Ordering::SeqCst), 1);
        assert_eq!(fake.read_text().unwrap(), "Hello");
    }

    #[test]
    fn test_failures_are_delivered_not_raised() {
        let fake = Arc::new(FakeClipboard {
            fail: true,
            ..Default::default()
        });
        let (read_tx, read_rx) = mpsc::channel();
        spawn_read(fake.clone(), move |result| read_tx.send(result).unwrap()).unwrap();
        let (write_tx, write_rx) = mpsc::channel();
        spawn_write(fake.clone(), "x".to_string(), move |result| {
            write_tx.send(result).unwrap()
        })
        .unwrap();

        assert_eq!(read_rx.recv_timeout(WAIT).unwrap(), Err(ClipboardError::new("denied")));
        assert_eq!(write_rx.recv_timeout(WAIT).unwrap(), Err(ClipboardError::new("denied")));
    }

    #[test]
    fn test_arboard_error_conversion() {
        let err: ClipboardError = arboard::Error::ClipboardNotSupported.into();
        assert!(!err.0.is_empty());
    }
}
