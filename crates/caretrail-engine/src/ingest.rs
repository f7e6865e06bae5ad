//! Asynchronous file ingestion.
//!
//! Reads are spawned as tokio tasks and report back over a channel, tagged
//! with the [`LoadTicket`] issued when the read was requested. Whether a
//! result is still wanted is decided by the controller, not here.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::controller::LoadTicket;

/// Errors that can occur while reading a timeline file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, so a binary file yields
/// garbage text instead of an error.
pub async fn read_timeline_text(path: &Path) -> Result<String, IngestError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A finished read.
#[derive(Debug)]
pub struct IngestEvent {
    /// Ticket issued for this read.
    pub ticket: LoadTicket,
    /// File that was read.
    pub path: PathBuf,
    /// File contents or the read error.
    pub result: Result<String, IngestError>,
}

/// Spawns file reads and collects their results.
pub struct Ingestor {
    tx: mpsc::UnboundedSender<IngestEvent>,
    rx: mpsc::UnboundedReceiver<IngestEvent>,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    /// Create an ingestor with an empty result queue.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Start reading `path` in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, ticket: LoadTicket, path: PathBuf) {
        let tx = self.tx.clone();
        debug!(%ticket, path = %path.display(), "starting read");
        tokio::spawn(async move {
            let result = read_timeline_text(&path).await;
            if let Err(e) = &result {
                warn!("{e}");
            }
            // Receiver gone means the UI has shut down.
            let _ = tx.send(IngestEvent {
                ticket,
                path,
                result,
            });
        });
    }

    /// Take one finished read, if any, without waiting.
    pub fn try_recv(&mut self) -> Option<IngestEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished read.
    pub async fn recv(&mut self) -> Option<IngestEvent> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TimelineController;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "header\n| Jan | a | b | c |").unwrap();

        let text = read_timeline_text(file.path()).await.unwrap();
        assert!(text.contains("Jan"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = read_timeline_text(&path).await.unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'h', b'i']).unwrap();

        let text = read_timeline_text(file.path()).await.unwrap();
        assert!(text.ends_with("hi"));
        assert!(text.contains('\u{fffd}'));
    }

    #[tokio::test]
    async fn test_ingestor_reports_ticket() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "header\n| Jan | a | b | c |").unwrap();

        let mut controller = TimelineController::new();
        let mut ingestor = Ingestor::new();
        let ticket = controller.begin_load();
        ingestor.spawn(ticket, file.path().to_path_buf());

        let event = ingestor.recv().await.unwrap();
        assert_eq!(event.ticket, ticket);
        assert_eq!(event.path, file.path());

        let text = event.result.unwrap();
        let report = controller.finish_load(event.ticket, &text).unwrap();
        assert_eq!(report.accepted, 1);
    }

    #[tokio::test]
    async fn test_stale_read_is_rejected_by_controller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "header\n| Jan | a | b | c |").unwrap();

        let mut controller = TimelineController::new();
        let mut ingestor = Ingestor::new();
        let ticket = controller.begin_load();
        ingestor.spawn(ticket, file.path().to_path_buf());
        controller.reset();

        let event = ingestor.recv().await.unwrap();
        let text = event.result.unwrap();
        assert!(controller.finish_load(event.ticket, &text).is_err());
        assert!(controller.is_empty());
    }

    #[test]
    fn test_try_recv_empty() {
        let mut ingestor = Ingestor::new();
        assert!(ingestor.try_recv().is_none());
    }
}
