//! Local persistence for the call sheet.
//!
//! The whole document is stored as one JSON snapshot under a fixed key in a
//! small key-value table. `SqliteStore` is the on-disk store; `MemoryStore`
//! backs tests.

pub mod schema;
pub mod store;
#[cfg(test)]
mod tests;

pub use store::{MemoryStore, SqliteStore};

use thiserror::Error;

use callsheet_types::{CallSheet, SheetDefaults};

/// Key the document snapshot is stored under.
pub const SHEET_KEY: &str = "callSheetData";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Write the full document snapshot.
pub fn save_sheet(store: &mut impl KeyValueStore, sheet: &CallSheet) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(sheet)?;
    store.set(SHEET_KEY, &json)
}

/// Read the document snapshot. `Ok(None)` when nothing has been saved yet.
pub fn load_sheet(store: &impl KeyValueStore) -> Result<Option<CallSheet>, PersistenceError> {
    let Some(json) = store.get(SHEET_KEY)? else {
        return Ok(None);
    };
    let mut sheet: CallSheet = serde_json::from_str(&json)?;
    sheet.reconcile_ids();
    sheet.ensure_crew_call();
    Ok(Some(sheet))
}

/// Load the stored sheet, falling back to a fresh one when absent or unreadable.
pub fn load_or_default(store: &impl KeyValueStore, defaults: &SheetDefaults) -> CallSheet {
    match load_sheet(store) {
        Ok(Some(sheet)) => {
            log::info!(target: "persistence", "loaded sheet '{}'", sheet.title);
            sheet
        }
        Ok(None) => super::fresh_sheet(defaults),
        Err(e) => {
            log::error!(target: "persistence", "error loading saved data: {}", e);
            super::fresh_sheet(defaults)
        }
    }
}
