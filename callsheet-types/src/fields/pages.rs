//! Script page length in whole pages plus eighths.

use std::sync::OnceLock;

use regex::Regex;

use crate::state::{ScheduleEntry, ScheduleItem};

/// Largest eighths value; an eighth count of 8 is a whole page.
pub const MAX_EIGHTHS: u8 = 7;

/// A page length such as `2 3/8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageCount {
    whole: u32,
    eighths: u8,
}

fn pages_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d+)?\s*(?:(\d+)/8)?$").ok())
        .as_ref()
}

impl PageCount {
    /// Eighths above 7 are clamped to 7.
    pub fn new(whole: u32, eighths: u8) -> Self {
        Self { whole, eighths: eighths.min(MAX_EIGHTHS) }
    }

    pub fn whole(self) -> u32 {
        self.whole
    }

    pub fn eighths(self) -> u8 {
        self.eighths
    }

    pub fn is_zero(self) -> bool {
        self.whole == 0 && self.eighths == 0
    }

    /// Parse `"2 3/8"`, `"2"`, `"3/8"` or `""`. Eighths above 7 clamp to 7.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Some(Self::default());
        }
        let caps = pages_pattern()?.captures(value)?;
        let whole = match caps.get(1) {
            Some(m) => m.as_str().parse::<u32>().ok()?,
            None => 0,
        };
        let eighths = match caps.get(2) {
            Some(m) => m.as_str().parse::<u64>().map_or(MAX_EIGHTHS, |n| n.min(MAX_EIGHTHS as u64) as u8),
            None => 0,
        };
        Some(Self::new(whole, eighths))
    }

    /// Decimal page count (`1 4/8` is `1.5`).
    pub fn as_pages(self) -> f64 {
        self.whole as f64 + self.eighths as f64 / 8.0
    }

    /// Replace the whole-page part from typed text; non-digits are dropped
    /// and values past `u32::MAX` saturate.
    pub fn set_whole_input(&mut self, input: &str) {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        self.whole = match digits.parse() {
            Ok(n) => n,
            Err(_) if digits.is_empty() => 0,
            Err(_) => u32::MAX,
        };
    }

    pub fn set_eighths(&mut self, eighths: u8) {
        self.eighths = eighths.min(MAX_EIGHTHS);
    }
}

impl std::fmt::Display for PageCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.whole, self.eighths) {
            (0, 0) => Ok(()),
            (whole, 0) => write!(f, "{}", whole),
            (whole, eighths) => write!(f, "{} {}/8", whole, eighths),
        }
    }
}

/// Sum the page lengths of scene entries. Banners, company moves and
/// unparseable page strings contribute nothing.
pub fn total_pages<'a>(items: impl IntoIterator<Item = &'a ScheduleItem>) -> f64 {
    items
        .into_iter()
        .filter_map(|item| match &item.entry {
            ScheduleEntry::Scene(scene) => PageCount::parse(&scene.pages),
            _ => None,
        })
        .map(PageCount::as_pages)
        .sum()
}

/// Two-decimal display of a page total.
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}
