//! # callsheet-core
//!
//! Backend library for the call sheet editor. Owns application state, action
//! dispatch, local persistence, the save debounce, print rendering and logo
//! import. Nothing here depends on a UI framework.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use callsheet_core::action::{Action, IoFeedback};
//! use callsheet_core::config::Config;
//! use callsheet_core::dispatch::dispatch_action;
//! use callsheet_core::state::AppState;
//!
//! let config = Config::load();
//! let mut state = AppState::open(&config);
//! let (io_tx, io_rx) = std::sync::mpsc::channel::<IoFeedback>();
//!
//! // Edits mark the sheet dirty and arm the save debounce.
//! let result = dispatch_action(&action, &mut state, &io_tx);
//!
//! // Each loop turn: flush a due autosave, then drain completions.
//! callsheet_core::dispatch::flush_due_save(&mut state, &io_tx, std::time::Instant::now());
//! while let Ok(feedback) = io_rx.try_recv() {
//!     let result = callsheet_core::dispatch::apply_io_feedback(feedback, &mut state, &io_tx);
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`state`]: `AppState`, save debounce, SQLite key-value persistence
//! - [`action`]: action re-exports plus `IoFeedback`
//! - [`dispatch`]: `dispatch_action()`, the single entry point for state mutation
//! - [`config`]: TOML configuration (embedded defaults + user override)
//! - [`print`]: HTML export and plain-text print preview
//! - [`logo`]: image file to data URI

pub mod action;
pub mod config;
pub mod dispatch;
pub mod logo;
pub mod paths;
pub mod print;
pub mod state;
