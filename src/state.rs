use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::data::filter::matching_indices;
use crate::data::loader::{self, LoadError, LoadOutcome};
use crate::data::model::EvaluationRecord;

// ---------------------------------------------------------------------------
// Load phase
// ---------------------------------------------------------------------------

/// Where the session is in its data lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Loaded,
    /// Load failed; the session carries on with zero records.
    LoadFailed,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub phase: LoadPhase,

    /// File the current records came from (or are being read from).
    pub source: Option<PathBuf>,

    /// Loaded evaluations, in file order. Empty unless `Loaded`.
    pub records: Vec<EvaluationRecord>,

    /// Text in the search box.
    pub search_term: String,

    /// Indices of records matching `search_term` (cached).
    pub matches: Vec<usize>,

    /// Index of the record shown in the detail view.
    pub selection: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    pending: Option<Receiver<LoadOutcome>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Uninitialized,
            source: None,
            records: Vec::new(),
            search_term: String::new(),
            matches: Vec::new(),
            selection: None,
            status_message: None,
            pending: None,
        }
    }
}

impl AppState {
    /// Whether a load is in flight.
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Enter `Loading`, dropping whatever was shown before.
    pub fn start_load(&mut self, path: PathBuf) {
        self.phase = LoadPhase::Loading;
        self.source = Some(path);
        self.records.clear();
        self.search_term.clear();
        self.matches.clear();
        self.selection = None;
        self.status_message = None;
    }

    /// Start a background read of `path` and track it until it completes.
    pub fn begin_load(&mut self, path: PathBuf) {
        log::info!("Loading evaluations from {}", path.display());
        self.start_load(path.clone());
        self.pending = Some(loader::spawn_load(path));
    }

    /// Re-read the current source file, if any.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.begin_load(path);
        }
    }

    /// Check the background load. Returns `true` when it just finished.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected {
                path: self.source.clone().unwrap_or_default(),
            }),
        };
        self.pending = None;
        match outcome {
            Ok(records) => self.load_succeeded(records),
            Err(e) => self.load_failed(&e),
        }
        true
    }

    /// Ingest a newly loaded dataset.
    pub fn load_succeeded(&mut self, records: Vec<EvaluationRecord>) {
        log::info!("Loaded {} evaluations", records.len());
        self.records = records;
        self.phase = LoadPhase::Loaded;
        self.status_message = None;
        self.refilter();
    }

    /// Degrade to an empty dataset; the error only reaches the status bar.
    pub fn load_failed(&mut self, error: &LoadError) {
        log::error!("Failed to load evaluations: {error}");
        self.records.clear();
        self.matches.clear();
        self.selection = None;
        self.phase = LoadPhase::LoadFailed;
        self.status_message = Some(format!("No data loaded ({error})"));
    }

    /// Update the search box text and recompute matches.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    /// Recompute `matches` after a search or dataset change.
    pub fn refilter(&mut self) {
        self.matches = matching_indices(&self.records, &self.search_term);
    }

    /// Make `index` the active record and collapse the result list.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.records.len() {
            return;
        }
        self.selection = Some(index);
        self.set_search_term(String::new());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The record shown in the detail view.
    pub fn selected(&self) -> Option<&EvaluationRecord> {
        self.selection.and_then(|i| self.records.get(i))
    }

    /// Records matching the current search, in file order.
    pub fn matched_records(&self) -> impl Iterator<Item = (usize, &EvaluationRecord)> + '_ {
        self.matches.iter().map(|&i| (i, &self.records[i]))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::data::model::sample_record;

    fn loaded(names: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.start_load(PathBuf::from("data.csv"));
        state.load_succeeded(names.iter().map(|n| sample_record(n, [4; 6])).collect());
        state
    }

    fn wait_for_load(state: &mut AppState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !state.poll_load() {
            assert!(Instant::now() < deadline, "load did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn starts_uninitialized() {
        let state = AppState::default();
        assert_eq!(state.phase, LoadPhase::Uninitialized);
        assert!(!state.loading());
        assert!(state.records.is_empty());
    }

    #[test]
    fn load_transitions() {
        let mut state = AppState::default();
        state.start_load(PathBuf::from("data.csv"));
        assert!(state.loading());
        state.load_succeeded(vec![sample_record("Anaya", [5; 6])]);
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert!(!state.loading());
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn failed_load_is_empty_and_complete() {
        let mut state = AppState::default();
        state.start_load(PathBuf::from("missing.csv"));
        let error = LoadError::Disconnected {
            path: PathBuf::from("missing.csv"),
        };
        state.load_failed(&error);
        assert_eq!(state.phase, LoadPhase::LoadFailed);
        assert!(!state.loading());
        assert!(state.records.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn search_updates_matches() {
        let mut state = loaded(&["Anaya", "Susan", "Bob"]);
        assert!(state.matches.is_empty());
        state.set_search_term("AN");
        assert_eq!(state.matches, vec![0, 1]);
        state.set_search_term("");
        assert!(state.matches.is_empty());
    }

    #[test]
    fn select_clears_search() {
        let mut state = loaded(&["Anaya", "Susan"]);
        state.set_search_term("su");
        state.select(1);
        assert_eq!(state.selected().map(|r| r.student_name.as_str()), Some("Susan"));
        assert!(state.search_term.is_empty());
        assert!(state.matches.is_empty());
    }

    #[test]
    fn single_selection_replaced_and_cleared() {
        let mut state = loaded(&["Anaya", "Susan"]);
        state.select(0);
        state.select(1);
        assert_eq!(state.selection, Some(1));
        state.select(7);
        assert_eq!(state.selection, Some(1));
        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn background_load_of_missing_file_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.begin_load(dir.path().join("data.csv"));
        assert!(state.loading());
        wait_for_load(&mut state);
        assert_eq!(state.phase, LoadPhase::LoadFailed);
        assert!(state.records.is_empty());
        assert!(!state.poll_load());
    }

    #[test]
    fn background_load_then_reload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header\nt,e,p,Anaya,5,5,5,5,5,5,o,f").unwrap();
        let mut state = AppState::default();
        state.begin_load(file.path().to_path_buf());
        wait_for_load(&mut state);
        assert_eq!(state.phase, LoadPhase::Loaded);
        state.select(0);

        state.reload();
        assert!(state.selected().is_none());
        wait_for_load(&mut state);
        assert_eq!(state.records.len(), 1);
    }
}
