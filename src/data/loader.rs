use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use thiserror::Error;

use super::model::EvaluationRecord;

/// Rating used when a cell is empty or does not start with a digit.
pub const DEFAULT_RATING: u8 = 3;

/// Positional layout of the survey export.
const COL_TIMESTAMP: usize = 0;
const COL_EMAIL: usize = 1;
const COL_PANELIST: usize = 2;
const COL_STUDENT: usize = 3;
const COL_FIRST_RATING: usize = 4;
const COL_OVERALL: usize = 10;
const COL_FEEDBACK: usize = 11;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The dataset could not be read at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("loader thread for {} exited without a result", path.display())]
    Disconnected { path: PathBuf },
}

/// Result delivered by a background load.
pub type LoadOutcome = Result<Vec<EvaluationRecord>, LoadError>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse an evaluation export from disk.
///
/// Non-UTF-8 content is reported as a read failure; everything after that
/// is best-effort and never fails.
pub fn load_file(path: &Path) -> Result<Vec<EvaluationRecord>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text);
    log::info!("Parsed {} evaluations from {}", records.len(), path.display());
    Ok(records)
}

/// Load `path` on a worker thread.
///
/// Exactly one outcome is sent on the returned channel.
pub fn spawn_load(path: PathBuf) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("csv-loader".into())
        .spawn({
            let path = path.clone();
            let tx = tx.clone();
            move || {
                // The receiver may already be gone if another file was opened.
                let _ = tx.send(load_file(&path));
            }
        });

    if let Err(source) = spawned {
        log::error!("Could not start loader thread: {source}");
        let _ = tx.send(Err(LoadError::Read { path, source }));
    }
    rx
}

/// Parse the full text of an export into records.
///
/// The first line is a header and is skipped, as are blank lines.
pub fn parse_records(text: &str) -> Vec<EvaluationRecord> {
    text.trim()
        .lines()
        .skip(1)
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(row, line)| parse_row(row + 1, line))
        .collect()
}

// ---------------------------------------------------------------------------
// Row / field parsing
// ---------------------------------------------------------------------------

fn parse_row(row: usize, line: &str) -> EvaluationRecord {
    log::trace!("Row {row}: {line}");
    let fields = split_fields(line);
    let text = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
    let rating = |offset: usize| {
        parse_rating(fields.get(COL_FIRST_RATING + offset).map(String::as_str))
    };

    EvaluationRecord {
        timestamp: text(COL_TIMESTAMP),
        email: text(COL_EMAIL),
        panelist_name: text(COL_PANELIST),
        student_name: text(COL_STUDENT),
        communication: rating(0),
        body_language: rating(1),
        domain_knowledge: rating(2),
        analytical_thinking: rating(3),
        leadership: rating(4),
        cultural_fit: rating(5),
        overall: text(COL_OVERALL),
        feedback: text(COL_FEEDBACK),
    }
}

/// Split one line into cleaned fields.
///
/// A quoted field runs to the next `"` and may contain commas; anything
/// between its closing quote and the next comma is dropped. Doubled quotes
/// are not treated as escapes. Empty cells keep their position.
pub fn split_fields(line: &str) -> Vec<String> {
    let line = line.trim_end_matches('\r');
    let mut fields = Vec::new();
    let mut rest = line;

    loop {
        let start = rest.trim_start();
        let (raw, remainder) = if let Some(quoted) = start.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    let after = &quoted[end + 1..];
                    let next = after.find(',').map(|comma| &after[comma..]);
                    (&quoted[..end], next)
                }
                None => (quoted, None),
            }
        } else {
            match start.find(',') {
                Some(comma) => (&start[..comma], Some(&start[comma..])),
                None => (start, None),
            }
        };

        fields.push(clean_field(raw));

        match remainder {
            Some(next) => rest = &next[1..],
            None => break,
        }
    }
    fields
}

fn clean_field(raw: &str) -> String {
    let raw = raw.strip_prefix('"').unwrap_or(raw);
    let raw = raw.strip_suffix('"').unwrap_or(raw);
    raw.trim().to_string()
}

/// Coerce a raw rating cell to its leading digit, defaulting to
/// [`DEFAULT_RATING`].
pub fn parse_rating(raw: Option<&str>) -> u8 {
    leading_digit(raw).unwrap_or_else(|| {
        log::debug!("Rating {raw:?} defaulted to {DEFAULT_RATING}");
        DEFAULT_RATING
    })
}

/// The leading decimal digit of a rating cell, if it has one.
fn leading_digit(raw: Option<&str>) -> Option<u8> {
    raw.map(str::trim)
        .and_then(|s| s.chars().next())
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
}
