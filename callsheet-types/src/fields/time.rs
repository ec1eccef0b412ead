//! Time-of-day input: hour, minute and an AM/PM toggle composed to `"H:MM AM"`.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Am,
    Pm,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn time_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").ok())
        .as_ref()
}

/// Editable parts of a stored time string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeField {
    hours: String,
    minutes: String,
    period: Period,
}

impl TimeField {
    /// Split a stored value into its parts. Anything that does not look like
    /// `H:MM AM` yields empty parts with period AM.
    pub fn parse(value: &str) -> Self {
        let Some(caps) = time_pattern().and_then(|re| re.captures(value)) else {
            return Self::default();
        };
        let period = if caps[3].eq_ignore_ascii_case("pm") {
            Period::Pm
        } else {
            Period::Am
        };
        Self {
            hours: caps[1].to_string(),
            minutes: caps[2].to_string(),
            period,
        }
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_hours(&mut self, input: &str) {
        self.hours = clamp_hours(input);
    }

    pub fn set_minutes(&mut self, input: &str) {
        self.minutes = clamp_minutes(input);
    }

    pub fn toggle_period(&mut self) {
        self.period = self.period.toggled();
    }

    /// The stored form of the current parts.
    ///
    /// Returns `None` for a partial entry (only one of hours/minutes set); the
    /// stored value should then be left as it was.
    pub fn compose(&self) -> Option<String> {
        match (self.hours.is_empty(), self.minutes.is_empty()) {
            (false, false) => Some(format!("{}:{:0>2} {}", self.hours, self.minutes, self.period)),
            (true, true) => Some(String::new()),
            _ => None,
        }
    }
}

fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Strip non-digits and clamp to 1..=12. Values too large to parse count as above 12.
pub fn clamp_hours(input: &str) -> String {
    let mut digits = digits_only(input);
    if digits.is_empty() {
        return digits;
    }
    match digits.parse::<u64>() {
        Ok(n) if n <= 12 => {
            if n < 1 && digits.len() > 1 {
                return "01".to_string();
            }
            digits.truncate(2);
            digits
        }
        _ => "12".to_string(),
    }
}

/// Strip non-digits, clamp to 0..=59, keep at most two digits.
pub fn clamp_minutes(input: &str) -> String {
    let mut digits = digits_only(input);
    if digits.is_empty() {
        return digits;
    }
    match digits.parse::<u64>() {
        Ok(n) if n <= 59 => {
            digits.truncate(2);
            digits
        }
        _ => "59".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stored_value() {
        let t = TimeField::parse("9:05 pm");
        assert_eq!(t.hours(), "9");
        assert_eq!(t.minutes(), "05");
        assert_eq!(t.period(), Period::Pm);
    }

    #[test]
    fn parse_garbage_is_empty() {
        assert_eq!(TimeField::parse("8:00"), TimeField::default());
        assert_eq!(TimeField::parse(""), TimeField::default());
    }

    #[test]
    fn hours_clamp_to_twelve() {
        assert_eq!(clamp_hours("13"), "12");
        assert_eq!(clamp_hours("99999999999999999999999"), "12");
        assert_eq!(clamp_hours("1a1"), "11");
        assert_eq!(clamp_hours("7"), "7");
    }

    #[test]
    fn hours_two_digit_zero_becomes_one() {
        assert_eq!(clamp_hours("00"), "01");
        assert_eq!(clamp_hours("0"), "0");
        assert_eq!(clamp_hours("x"), "");
    }

    #[test]
    fn minutes_clamp_to_fifty_nine() {
        assert_eq!(clamp_minutes("75"), "59");
        assert_eq!(clamp_minutes("30"), "30");
        assert_eq!(clamp_minutes("0"), "0");
        assert_eq!(clamp_minutes("--"), "");
    }

    #[test]
    fn compose_pads_minutes() {
        let mut t = TimeField::default();
        t.set_hours("8");
        t.set_minutes("5");
        assert_eq!(t.compose().as_deref(), Some("8:05 AM"));
        t.toggle_period();
        assert_eq!(t.compose().as_deref(), Some("8:05 PM"));
    }

    #[test]
    fn compose_empty_and_partial() {
        let mut t = TimeField::default();
        assert_eq!(t.compose().as_deref(), Some(""));
        t.set_hours("10");
        assert_eq!(t.compose(), None);
    }

    #[test]
    fn stored_value_survives_reparse() {
        let t = TimeField::parse("11:45 AM");
        assert_eq!(t.compose().as_deref(), Some("11:45 AM"));
    }
}
