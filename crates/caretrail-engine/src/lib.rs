//! caretrail-engine: Headless core for the caretrail health timeline viewer
//!
//! This crate provides everything below the presentation layer:
//! - Timeline record model and the pipe-delimited parser
//! - The controller that owns the collection and the selection
//! - Asynchronous file ingestion with stale-read detection
//! - The bundled sample file and configuration

pub mod config;
pub mod controller;
pub mod ingest;
pub mod parser;
pub mod record;
pub mod sample;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName, CONFIG_DIR};
pub use controller::{ControllerError, LoadReport, LoadTicket, TimelineController, TimelineStats};
pub use ingest::{read_timeline_text, IngestError, IngestEvent, Ingestor};
pub use parser::{parse_timeline, ParseOutcome, DELIMITER, MIN_FIELDS};
pub use record::TimelineRecord;
pub use sample::{write_sample, SampleError, SAMPLE_FILE_NAME, SAMPLE_TIMELINE};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
