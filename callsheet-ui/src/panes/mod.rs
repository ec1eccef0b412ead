pub mod cell_editor;
mod confirm_pane;
mod header_pane;
mod help_pane;
mod logo_pane;
mod preview_pane;
pub mod table_pane;

pub use confirm_pane::{ConfirmPane, PendingAction};
pub use header_pane::HeaderPane;
pub use help_pane::HelpPane;
pub use logo_pane::LogoPane;
pub use preview_pane::PreviewPane;
pub use table_pane::sections::{
    AdvancePane, CallTimesPane, CrewPane, LocationsPane, NotesPane, RadioPane, SchedulePane, TalentPane,
};
