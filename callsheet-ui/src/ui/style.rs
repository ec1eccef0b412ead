use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

/// RGB color. Construct with `Color::new(r, g, b)` or use the named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(100, 100, 100);
    pub const GOLD: Color = Color::new(255, 215, 0);
    pub const SKY_BLUE: Color = Color::new(135, 206, 235);

    // Sheet rows
    pub const BANNER_COLOR: Color = Color::new(255, 200, 100); // Warm orange - banner rows
    pub const MOVE_COLOR: Color = Color::new(100, 180, 255); // Blue - company moves
    pub const CREW_CALL_COLOR: Color = Color::new(255, 220, 80); // Locked crew call row

    // Status
    pub const OK_COLOR: Color = Color::new(80, 220, 100);
    pub const WARN_COLOR: Color = Color::new(255, 220, 80);
    pub const ERROR_COLOR: Color = Color::new(255, 100, 100);

    pub const SELECTION_BG: Color = Color::new(60, 100, 180);
    pub const EDIT_BG: Color = Color::new(40, 40, 70);
}

/// List rows get the selection background when selected.
pub fn selected_style(is_selected: bool, fg: Color) -> Style {
    if is_selected {
        Style::new().fg(fg).bg(Color::SELECTION_BG)
    } else {
        Style::new().fg(fg)
    }
}

pub fn selected_style_bold(is_selected: bool, fg: Color) -> Style {
    selected_style(is_selected, fg).bold()
}

/// Text style: foreground, background, bold and underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self { fg: None, bg: None, bold: false, underline: false }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

impl From<Color> for RatatuiColor {
    fn from(c: Color) -> Self {
        RatatuiColor::Rgb(c.r, c.g, c.b)
    }
}

impl From<Style> for RatatuiStyle {
    fn from(s: Style) -> Self {
        let mut rs = RatatuiStyle::default();
        if let Some(fg) = s.fg {
            rs = rs.fg(RatatuiColor::from(fg));
        }
        if let Some(bg) = s.bg {
            rs = rs.bg(RatatuiColor::from(bg));
        }
        if s.bold {
            rs = rs.add_modifier(Modifier::BOLD);
        }
        if s.underline {
            rs = rs.add_modifier(Modifier::UNDERLINED);
        }
        rs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_adds_background() {
        assert_eq!(selected_style(false, Color::WHITE).bg, None);
        let s = selected_style_bold(true, Color::WHITE);
        assert_eq!(s.bg, Some(Color::SELECTION_BG));
        assert!(s.bold);
    }

    #[test]
    fn converts_to_ratatui() {
        let rs = RatatuiStyle::from(Style::new().fg(Color::GOLD).underline());
        assert_eq!(rs.fg, Some(RatatuiColor::Rgb(255, 215, 0)));
        assert!(rs.add_modifier.contains(Modifier::UNDERLINED));
    }
}
