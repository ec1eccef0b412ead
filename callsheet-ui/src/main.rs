// Re-export core crate modules so crate::state, crate::dispatch, etc. resolve throughout the binary
pub use callsheet_core::action;
pub use callsheet_core::config;
pub use callsheet_core::dispatch;
pub use callsheet_core::print;
pub use callsheet_core::state;

mod global_actions;
mod panes;
mod runtime;
mod ui;

use std::collections::HashMap;
use std::fs::File;

use panes::{
    AdvancePane, CallTimesPane, ConfirmPane, CrewPane, HeaderPane, HelpPane, LocationsPane, LogoPane, NotesPane,
    PreviewPane, RadioPane, SchedulePane, TalentPane,
};
use state::AppState;
use ui::{Keymap, PaneManager, RatatuiBackend};

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = callsheet_core::paths::log_path();
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path) {
        Ok(file) => file,
        Err(_) => match File::create(std::env::temp_dir().join("callsheet.log")) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("callsheet: logging disabled: {}", e);
                return;
            }
        },
    };

    if WriteLogger::init(log_level, Config::default(), log_file).is_err() {
        eprintln!("callsheet: logger already initialized");
        return;
    }

    log::info!("callsheet starting (log level: {:?})", log_level);
}

/// Keymap for a binding layer. Several panes share a layer, so this clones.
pub(crate) fn pane_keymap(keymaps: &HashMap<String, Keymap>, layer: &str) -> Keymap {
    keymaps.get(layer).cloned().unwrap_or_else(Keymap::new)
}

pub(crate) fn register_all_panes(keymaps: &HashMap<String, Keymap>) -> PaneManager {
    let mut panes = PaneManager::new(Box::new(HeaderPane::new(pane_keymap(keymaps, "header"))));
    panes.add_pane(Box::new(CrewPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(CallTimesPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(SchedulePane::new(pane_keymap(keymaps, "schedule"))));
    panes.add_pane(Box::new(TalentPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(LocationsPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(NotesPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(AdvancePane::new(pane_keymap(keymaps, "ordered_list"))));
    panes.add_pane(Box::new(RadioPane::new(pane_keymap(keymaps, "list"))));
    panes.add_pane(Box::new(PreviewPane::new(pane_keymap(keymaps, "preview"))));
    panes.add_pane(Box::new(HelpPane::new(pane_keymap(keymaps, "help"))));
    panes.add_pane(Box::new(ConfirmPane::new(pane_keymap(keymaps, "confirm"))));
    panes.add_pane(Box::new(LogoPane::new(pane_keymap(keymaps, "logo"))));
    panes
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let config = config::Config::load();
    let state = AppState::open(&config);
    log::info!("sheet store: {}", state.project.store_path.display());

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;
    let result = runtime::run(&mut backend, state);
    backend.stop()?;
    result
}
