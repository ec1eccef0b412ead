pub mod autosave;
pub mod persistence;

pub use autosave::SaveDebounce;

use std::path::PathBuf;
use std::time::Instant;

use callsheet_types::{CallSheet, SheetDefaults};

use crate::config::Config;
use persistence::SqliteStore;

/// Generation counters for ignoring stale async results.
#[derive(Debug, Clone, Default)]
pub struct IoGeneration {
    pub save: u64,
    pub export: u64,
}

impl IoGeneration {
    pub fn next_save(&mut self) -> u64 {
        self.save = self.save.wrapping_add(1);
        self.save
    }

    pub fn next_export(&mut self) -> u64 {
        self.export = self.export.wrapping_add(1);
        self.export
    }
}

/// A save that has been handed to a background thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSave {
    pub id: u64,
    /// Edit revision captured when the save started
    pub revision: u64,
    /// Started from an explicit save command (toasts on success)
    pub manual: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IoState {
    pub generation: IoGeneration,
    pub pending_save: Option<PendingSave>,
    /// Explicit save requested while another save was in flight
    pub manual_save_queued: bool,
    pub export_in_progress: bool,
    pub last_io_error: Option<String>,
}

/// Where the sheet lives and whether it has unsaved edits.
#[derive(Debug, Clone)]
pub struct ProjectMeta {
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
    pub dirty: bool,
    /// Bumped on every successful edit
    pub revision: u64,
    /// Values used when starting a new sheet
    pub defaults: SheetDefaults,
}

impl ProjectMeta {
    pub fn new(store_path: PathBuf, export_dir: PathBuf, defaults: SheetDefaults) -> Self {
        Self { store_path, export_dir, dirty: false, revision: 0, defaults }
    }
}

/// Top-level application state, owned by the dispatcher and read by panes.
pub struct AppState {
    pub sheet: CallSheet,
    pub io: IoState,
    pub project: ProjectMeta,
    pub autosave: SaveDebounce,
}

impl AppState {
    pub fn new(sheet: CallSheet, project: ProjectMeta, autosave: SaveDebounce) -> Self {
        Self { sheet, io: IoState::default(), project, autosave }
    }

    /// Load the stored sheet named by `config`, or start from defaults.
    pub fn open(config: &Config) -> Self {
        let defaults = config.sheet_defaults();
        let project = ProjectMeta::new(config.store_path(), config.export_dir(), defaults.clone());
        let sheet = match SqliteStore::open(&project.store_path) {
            Ok(store) => persistence::load_or_default(&store, &defaults),
            Err(e) => {
                log::error!(target: "persistence", "could not open {}: {}", project.store_path.display(), e);
                fresh_sheet(&defaults)
            }
        };
        Self::new(sheet, project, SaveDebounce::new(config.debounce(), config.autosave_enabled()))
    }

    /// Record a successful edit.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.project.dirty = true;
        self.project.revision = self.project.revision.wrapping_add(1);
        self.autosave.touch(now);
    }

    /// Replace the sheet with a fresh one built from the configured defaults.
    pub fn reset_sheet(&mut self) {
        self.sheet = fresh_sheet(&self.project.defaults);
    }
}

/// A new sheet dated today.
pub fn fresh_sheet(defaults: &SheetDefaults) -> CallSheet {
    CallSheet::new(defaults, today_iso())
}

pub fn today_iso() -> String {
    chrono::Local::now()
        .date_naive()
        .format(callsheet_types::DATE_FORMAT)
        .to_string()
}
