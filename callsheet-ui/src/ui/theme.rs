//! Style bridge for rat-widget components.
//!
//! rat-widget builders take `ratatui::style::Style`; these map the palette in
//! `style.rs` onto them so every input and dialog looks the same.

use ratatui::style::{Color as RatatuiColor, Style as RatatuiStyle};

use super::style::{Color, Style};

pub struct SheetTheme;

impl SheetTheme {
    // Text input

    pub fn text_input_style() -> RatatuiStyle {
        RatatuiStyle::default()
            .fg(RatatuiColor::from(Color::WHITE))
            .bg(RatatuiColor::from(Color::EDIT_BG))
    }

    pub fn text_input_focus_style() -> RatatuiStyle {
        Self::text_input_style()
    }

    pub fn text_input_select_style() -> RatatuiStyle {
        RatatuiStyle::default()
            .fg(RatatuiColor::from(Color::WHITE))
            .bg(RatatuiColor::from(Color::SELECTION_BG))
    }

    pub fn text_input_cursor_style() -> RatatuiStyle {
        RatatuiStyle::default()
            .fg(RatatuiColor::from(Color::BLACK))
            .bg(RatatuiColor::from(Color::WHITE))
    }

    // Dialogs

    pub fn dialog_border() -> Style {
        Style::new().fg(Color::CYAN)
    }

    pub fn warning_border() -> Style {
        Style::new().fg(Color::WARN_COLOR)
    }

    // General

    pub fn label() -> Style {
        Style::new().fg(Color::GRAY)
    }

    pub fn muted_text() -> Style {
        Style::new().fg(Color::DARK_GRAY)
    }

    pub fn help_text() -> Style {
        Style::new().fg(Color::DARK_GRAY)
    }

    pub fn error_text() -> Style {
        Style::new().fg(Color::ERROR_COLOR)
    }

    /// Cell or segment currently being edited
    pub fn editing() -> Style {
        Style::new().fg(Color::WHITE).bg(Color::EDIT_BG)
    }

    pub fn editing_focus() -> Style {
        Style::new().fg(Color::BLACK).bg(Color::GOLD).bold()
    }
}
