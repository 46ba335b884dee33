//! CSV ingestion: parsing, row filtering, and the background-load channel.
//!
//! Input format: header-less CSV where column 0 is x, column 1 is y, and
//! column 2 is the category label. A row is kept iff both coordinate columns
//! parse as finite numbers; everything else is dropped, counted in the
//! [`ParseReport`], and logged.
//!
//! Loads run on a background thread and deliver an [`IngestEvent`] over an
//! `mpsc` channel. Each load carries a generation number so the UI can drop
//! results from a load that has since been superseded: last-initiated wins,
//! never last-completed.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use thiserror::Error;

use crate::data::point::{Dataset, PointRecord};

/// Error produced when a CSV file cannot be opened or read at all.
/// Row-level problems never surface here; they end up in the
/// [`ParseReport`] instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },
}

/// Outcome counters for one CSV load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Rows that produced a dataset point.
    pub loaded: usize,
    /// Rows dropped because a coordinate column failed to parse as a
    /// finite number (or the row could not be read).
    pub skipped: usize,
}

/// Message delivered to the UI thread when a background load finishes.
#[derive(Debug)]
pub struct IngestEvent {
    /// Generation of the load request that produced this event.
    pub generation: u64,
    /// Path the load was started for.
    pub source: PathBuf,
    pub outcome: Result<(Dataset, ParseReport), IngestError>,
}

/// Parse a CSV file into a dataset, synchronously.
///
/// Points are indexed in file order. Blank lines are skipped by the reader;
/// a missing label column yields an empty label rather than dropping the
/// row.
pub fn load_csv(path: &Path) -> Result<(Dataset, ParseReport), IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut points = Vec::new();
    let mut report = ParseReport::default();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                report.skipped += 1;
                log::warn!("skipping unreadable CSV row: {e}");
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());
        match parse_row(&record) {
            Some((x, y, label)) => {
                points.push(PointRecord {
                    index: points.len(),
                    x,
                    y,
                    label,
                });
                report.loaded += 1;
            }
            None => {
                report.skipped += 1;
                log::warn!("skipping CSV line {line}: non-numeric coordinates");
            }
        }
    }
    Ok((Dataset::new(points), report))
}

/// Extract `(x, y, label)` from one record, or `None` if either coordinate
/// is absent or not a finite number.
fn parse_row(record: &csv::StringRecord) -> Option<(f64, f64, String)> {
    let x = parse_finite(record.get(0)?)?;
    let y = parse_finite(record.get(1)?)?;
    let label = record.get(2).unwrap_or("").to_string();
    Some((x, y, label))
}

fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Start a background load of `path` tagged with `generation`.
///
/// The result is sent over `tx` as an [`IngestEvent`]; a send failure means
/// the receiving UI is gone and is silently ignored.
pub fn spawn_load(path: PathBuf, generation: u64, tx: Sender<IngestEvent>) {
    std::thread::spawn(move || {
        let outcome = load_csv(&path);
        let _ = tx.send(IngestEvent {
            generation,
            source: path,
            outcome,
        });
    });
}
