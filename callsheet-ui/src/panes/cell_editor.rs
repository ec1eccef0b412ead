//! Inline editors for a single cell: free text, time of day, page length and
//! comma-separated text with suggestions.

use callsheet_types::fields::autocomplete::{apply_selection, current_segment, filter_options};
use callsheet_types::fields::MAX_EIGHTHS;
use callsheet_types::{CallSheet, PageCount, TimeField};

use crate::ui::theme::SheetTheme;
use crate::ui::widgets::TextInput;
use crate::ui::{Color, InputEvent, KeyCode, Rect, RenderBuf, Style};

/// Where an autocomplete cell takes its suggestions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestions {
    Cast,
    Locations,
    Departments,
}

impl Suggestions {
    pub fn options(self, sheet: &CallSheet) -> Vec<String> {
        match self {
            Suggestions::Cast => sheet.cast_options(),
            Suggestions::Locations => sheet.location_options(),
            Suggestions::Departments => callsheet_types::department_options(),
        }
    }
}

/// How a cell is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Time,
    Pages,
    /// Edit cycles through the options instead of opening an editor
    Choice(&'static [&'static str]),
    Autocomplete(Suggestions),
}

/// Option after `current`, wrapping. Unknown values restart at the first option.
pub fn next_choice(options: &'static [&'static str], current: &str) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let next = match options.iter().position(|o| *o == current) {
        Some(idx) => (idx + 1) % options.len(),
        None => 0,
    };
    Some(options[next])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeSegment {
    Hours,
    Minutes,
    Period,
}

/// Hours, minutes and AM/PM edited as separate segments.
pub struct TimeEditor {
    time: TimeField,
    segment: TimeSegment,
    /// Next digit replaces the segment instead of appending
    fresh: bool,
}

impl TimeEditor {
    pub fn new(value: &str) -> Self {
        Self { time: TimeField::parse(value), segment: TimeSegment::Hours, fresh: true }
    }

    fn step_segment(&mut self, forward: bool) {
        self.segment = match (self.segment, forward) {
            (TimeSegment::Hours, true) | (TimeSegment::Period, false) => TimeSegment::Minutes,
            (TimeSegment::Minutes, true) | (TimeSegment::Hours, false) => TimeSegment::Period,
            (TimeSegment::Period, true) | (TimeSegment::Minutes, false) => TimeSegment::Hours,
        };
        self.fresh = true;
    }

    fn segment_text(&self) -> &str {
        match self.segment {
            TimeSegment::Hours => self.time.hours(),
            TimeSegment::Minutes => self.time.minutes(),
            TimeSegment::Period => "",
        }
    }

    fn set_segment(&mut self, text: &str) {
        match self.segment {
            TimeSegment::Hours => self.time.set_hours(text),
            TimeSegment::Minutes => self.time.set_minutes(text),
            TimeSegment::Period => {}
        }
    }

    fn type_digit(&mut self, digit: char) {
        if self.segment == TimeSegment::Period {
            return;
        }
        let current = self.segment_text();
        let next = if self.fresh || current.len() >= 2 {
            digit.to_string()
        } else {
            format!("{}{}", current, digit)
        };
        self.set_segment(&next);
        self.fresh = false;
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event.key {
            KeyCode::Tab if event.modifiers.shift => self.step_segment(false),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char(':') => self.step_segment(true),
            KeyCode::Left => self.step_segment(false),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down if self.segment == TimeSegment::Period => {
                self.time.toggle_period()
            }
            KeyCode::Char(' ') => self.time.toggle_period(),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.time.period() != callsheet_types::Period::Am {
                    self.time.toggle_period();
                }
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if self.time.period() != callsheet_types::Period::Pm {
                    self.time.toggle_period();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_digit(c),
            KeyCode::Backspace | KeyCode::Delete => {
                let mut text = self.segment_text().to_string();
                text.pop();
                self.set_segment(&text);
                self.fresh = false;
            }
            _ => return false,
        }
        true
    }

    /// `None` for a half-filled time; the cell keeps its old value.
    pub fn commit(&self) -> Option<String> {
        self.time.compose()
    }

    fn render(&self, buf: &mut RenderBuf, x: u16, y: u16, width: u16) {
        let base = SheetTheme::editing();
        let focus = SheetTheme::editing_focus();
        buf.fill_row(x, y, width, base);
        let pick = |seg: TimeSegment| if seg == self.segment { focus } else { base };
        let hours = format!("{:>2}", self.time.hours());
        let minutes = format!("{:0>2}", self.time.minutes());
        let hours = if self.time.hours().is_empty() { "--".to_string() } else { hours };
        let minutes = if self.time.minutes().is_empty() { "--".to_string() } else { minutes };
        buf.draw_line(
            Rect::new(x, y, width, 1),
            &[
                (&hours, pick(TimeSegment::Hours)),
                (":", base),
                (&minutes, pick(TimeSegment::Minutes)),
                (" ", base),
                (self.time.period().as_str(), pick(TimeSegment::Period)),
            ],
        );
    }
}

/// Digits accepted for the whole-page part.
const MAX_WHOLE_DIGITS: usize = 3;

/// Whole pages typed as digits, eighths stepped with Up/Down.
pub struct PageEditor {
    pages: PageCount,
    whole_text: String,
    fresh: bool,
}

impl PageEditor {
    pub fn new(value: &str) -> Self {
        let pages = PageCount::parse(value).unwrap_or_default();
        let whole_text = if pages.whole() == 0 { String::new() } else { pages.whole().to_string() };
        Self { pages, whole_text, fresh: true }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event.key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.fresh {
                    self.whole_text.clear();
                }
                if self.whole_text.len() < MAX_WHOLE_DIGITS {
                    self.whole_text.push(c);
                    self.pages.set_whole_input(&self.whole_text);
                }
                self.fresh = false;
            }
            KeyCode::Backspace => {
                self.whole_text.pop();
                self.pages.set_whole_input(&self.whole_text);
                self.fresh = false;
            }
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Right => {
                self.pages.set_eighths((self.pages.eighths() + 1).min(MAX_EIGHTHS));
            }
            KeyCode::Down | KeyCode::Char('-') | KeyCode::Left => {
                self.pages.set_eighths(self.pages.eighths().saturating_sub(1));
            }
            _ => return false,
        }
        true
    }

    pub fn commit(&self) -> Option<String> {
        Some(self.pages.to_string())
    }

    fn render(&self, buf: &mut RenderBuf, x: u16, y: u16, width: u16) {
        let base = SheetTheme::editing();
        buf.fill_row(x, y, width, base);
        let whole = if self.whole_text.is_empty() { "0" } else { self.whole_text.as_str() };
        let eighths = format!("{}/8", self.pages.eighths());
        buf.draw_line(
            Rect::new(x, y, width, 1),
            &[(whole, SheetTheme::editing_focus()), (" ", base), (&eighths, base)],
        );
    }
}

/// Text input whose trailing comma-separated entry is matched against a list.
pub struct AutocompleteEditor {
    input: TextInput,
    options: Vec<String>,
    highlighted: usize,
}

/// Rows of suggestions drawn under the cell.
pub const MAX_SUGGESTIONS: usize = 5;

impl AutocompleteEditor {
    pub fn new(value: &str, options: Vec<String>) -> Self {
        let mut input = TextInput::new("");
        input.open(value);
        Self { input, options, highlighted: 0 }
    }

    /// Matches for the trailing entry. Nothing is offered until that entry
    /// has text.
    pub fn suggestions(&self) -> Vec<&str> {
        if current_segment(self.input.value()).is_empty() {
            return Vec::new();
        }
        filter_options(self.input.value(), &self.options)
    }

    /// Replace the trailing entry with the highlighted suggestion.
    fn apply_highlighted(&mut self) -> bool {
        let Some(option) = self.suggestions().get(self.highlighted).map(|s| s.to_string()) else {
            return false;
        };
        let value = apply_selection(self.input.value(), &option);
        self.input.set_value(&value);
        self.input.handle_input(&InputEvent::key(KeyCode::End));
        self.highlighted = 0;
        true
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event.key {
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                let count = self.suggestions().len().min(MAX_SUGGESTIONS);
                if self.highlighted + 1 < count {
                    self.highlighted += 1;
                }
                true
            }
            KeyCode::Tab => self.apply_highlighted(),
            _ => {
                let before = self.input.value().to_string();
                let used = self.input.handle_input(event);
                if self.input.value() != before {
                    self.highlighted = 0;
                }
                used
            }
        }
    }

    pub fn commit(&self) -> Option<String> {
        Some(self.input.value().to_string())
    }

    fn render(&mut self, buf: &mut RenderBuf, x: u16, y: u16, width: u16, bottom: u16) {
        self.input.render_buf(buf.raw_buf(), x, y, width);
        let list_width = width.max(24);
        let suggestions: Vec<String> = self.suggestions().into_iter().map(str::to_string).collect();
        for (i, option) in suggestions.iter().take(MAX_SUGGESTIONS).enumerate() {
            let row = y + 1 + i as u16;
            if row >= bottom {
                break;
            }
            let style = if i == self.highlighted {
                Style::new().fg(Color::BLACK).bg(Color::SKY_BLUE)
            } else {
                Style::new().fg(Color::WHITE).bg(Color::EDIT_BG)
            };
            buf.fill_row(x, row, list_width, style);
            buf.draw_str_max(x + 1, row, option, list_width.saturating_sub(1), style);
        }
    }
}

/// An open cell editor.
pub enum CellEditor {
    Text(TextInput),
    Time(TimeEditor),
    Pages(PageEditor),
    Autocomplete(AutocompleteEditor),
}

impl CellEditor {
    /// Editor for a cell of `kind`. Choice cells have none.
    pub fn open(kind: CellKind, value: &str, sheet: &CallSheet) -> Option<Self> {
        match kind {
            CellKind::Text => {
                let mut input = TextInput::new("");
                input.open(value);
                Some(CellEditor::Text(input))
            }
            CellKind::Time => Some(CellEditor::Time(TimeEditor::new(value))),
            CellKind::Pages => Some(CellEditor::Pages(PageEditor::new(value))),
            CellKind::Autocomplete(source) => {
                Some(CellEditor::Autocomplete(AutocompleteEditor::new(value, source.options(sheet))))
            }
            CellKind::Choice(_) => None,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self {
            CellEditor::Text(input) => input.handle_input(event),
            CellEditor::Time(editor) => editor.handle_input(event),
            CellEditor::Pages(editor) => editor.handle_input(event),
            CellEditor::Autocomplete(editor) => editor.handle_input(event),
        }
    }

    /// Value to store, or `None` to leave the cell unchanged.
    pub fn commit(&self) -> Option<String> {
        match self {
            CellEditor::Text(input) => Some(input.value().to_string()),
            CellEditor::Time(editor) => editor.commit(),
            CellEditor::Pages(editor) => editor.commit(),
            CellEditor::Autocomplete(editor) => editor.commit(),
        }
    }

    /// Draw over the cell at (x, y). Suggestion lists may extend down to `bottom`.
    pub fn render(&mut self, buf: &mut RenderBuf, x: u16, y: u16, width: u16, bottom: u16) {
        match self {
            CellEditor::Text(input) => {
                input.render_buf(buf.raw_buf(), x, y, width);
            }
            CellEditor::Time(editor) => editor.render(buf, x, y, width),
            CellEditor::Pages(editor) => editor.render(buf, x, y, width),
            CellEditor::Autocomplete(editor) => editor.render(buf, x, y, width, bottom),
        }
    }

    /// Key hint shown while this editor is open.
    pub fn hint(&self) -> &'static str {
        match self {
            CellEditor::Text(_) => "[Enter] Save  [Esc] Cancel",
            CellEditor::Time(_) => "[0-9] Digits  [Tab/Left/Right] Segment  [a/p/Space] AM-PM  [Enter] Save  [Esc] Cancel",
            CellEditor::Pages(_) => "[0-9] Pages  [Up/Down] Eighths  [Enter] Save  [Esc] Cancel",
            CellEditor::Autocomplete(_) => "[Up/Down] Suggestion  [Tab] Pick  [Enter] Save  [Esc] Cancel",
        }
    }
}
