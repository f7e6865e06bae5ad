//! Timeline collection and selection state.
//!
//! [`TimelineController`] owns the records from the most recent load and the
//! currently selected record. Loads can be tagged with a [`LoadTicket`] so
//! that a slow read finishing after a newer one (or after a reset) is
//! discarded instead of overwriting fresher state.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::parser::parse_timeline;
use crate::record::TimelineRecord;

/// Generation token for one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Summary of one applied load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records now in the collection.
    pub accepted: usize,
    /// Line numbers of rows dropped for having too few fields.
    pub skipped_lines: Vec<usize>,
    /// When the collection was replaced.
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    /// Whether the load produced no records.
    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }
}

/// Figures shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStats<'a> {
    /// Records in the collection.
    pub total: usize,
    /// 1-based position of the selection within the collection.
    pub position: usize,
    /// Month of the selected record.
    pub month: &'a str,
}

/// Errors returned by the controller.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The ticket was superseded by a newer load or a reset.
    #[error("stale load {ticket} (current generation is {current})")]
    StaleLoad { ticket: LoadTicket, current: u64 },
}

/// Owner of the timeline collection and selection.
#[derive(Debug, Default)]
pub struct TimelineController {
    records: Vec<TimelineRecord>,
    /// Index into `records`; always in bounds when set.
    selected: Option<usize>,
    /// Generation of the most recently issued ticket.
    generation: u64,
}

impl TimelineController {
    /// Create an empty controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records from the last load, in source order.
    pub fn records(&self) -> &[TimelineRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the selected record.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected record.
    pub fn selected(&self) -> Option<&TimelineRecord> {
        self.selected.and_then(|idx| self.records.get(idx))
    }

    /// Parse `text` and replace the collection with the result.
    ///
    /// The first record becomes selected. An empty result clears the
    /// selection along with the collection.
    pub fn load(&mut self, text: &str) -> LoadReport {
        let outcome = parse_timeline(text);
        self.records = outcome.records;
        self.selected = if self.records.is_empty() { None } else { Some(0) };

        let report = LoadReport {
            accepted: self.records.len(),
            skipped_lines: outcome.skipped_lines,
            loaded_at: Utc::now(),
        };
        info!(
            accepted = report.accepted,
            skipped = report.skipped_lines.len(),
            "timeline loaded"
        );
        report
    }

    /// Issue a ticket for a load that will complete later.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Whether `ticket` is still the most recent one.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the text of a ticketed load if the ticket is still current.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        text: &str,
    ) -> Result<LoadReport, ControllerError> {
        if !self.is_current(ticket) {
            debug!(%ticket, current = self.generation, "discarding stale load");
            return Err(ControllerError::StaleLoad {
                ticket,
                current: self.generation,
            });
        }
        Ok(self.load(text))
    }

    /// Select the record with the given id.
    ///
    /// Returns `false` and leaves the selection alone when no record has
    /// that id.
    pub fn select(&mut self, id: usize) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.selected = Some(idx);
                debug!(id, "record selected");
                true
            }
            None => false,
        }
    }

    /// Select by position in the collection. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Move selection one record later. Stops at the last record (no wrap).
    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    /// Move selection one record earlier. Stops at the first record (no wrap).
    pub fn select_prev(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    /// Drop the collection and selection.
    ///
    /// Also invalidates any ticketed load still in flight.
    pub fn reset(&mut self) {
        self.records.clear();
        self.selected = None;
        self.generation += 1;
        info!("timeline reset");
    }

    /// Stats for the current selection, if any.
    pub fn stats(&self) -> Option<TimelineStats<'_>> {
        let idx = self.selected?;
        let record = self.records.get(idx)?;
        Some(TimelineStats {
            total: self.records.len(),
            position: idx + 1,
            month: &record.month,
        })
    }
}
