//! Print output: a self-contained HTML document for export and a plain-text
//! rendering of the same layout for the in-app preview.

mod html;
mod text;

pub use html::render_html;
pub use text::render_text;

use std::path::{Path, PathBuf};

use callsheet_types::{CallSheet, ScheduleEntry, ScheduleItem};

/// Shoot date as month/day/year without padding (`3/1/2024`); the raw
/// string when it does not parse.
pub fn format_shoot_date(sheet: &CallSheet) -> String {
    match sheet.shoot_date_parsed() {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => sheet.shoot_date.clone(),
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
pub fn slug(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("callsheet");
    }
    out
}

/// `<slug(title)>-day-<shootDay>.html`
pub fn export_file_name(sheet: &CallSheet) -> String {
    let day = slug(&sheet.shoot_day);
    format!("{}-day-{}.html", slug(&sheet.title), day)
}

pub fn export_path(dir: &Path, sheet: &CallSheet) -> PathBuf {
    dir.join(export_file_name(sheet))
}

/// Render and write the HTML document, creating the directory if needed.
pub fn write_html(path: &Path, sheet: &CallSheet) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_html(sheet))
}

/// One-line text for a full-width schedule row, `None` for scenes.
pub(crate) fn schedule_row_caption(item: &ScheduleItem) -> Option<String> {
    match &item.entry {
        ScheduleEntry::Scene(_) => None,
        ScheduleEntry::Banner { time, banner_text } => Some(format!("{} - {}", time, banner_text)),
        ScheduleEntry::CompanyMove { time } => Some(format!("Company Move at {}", time)),
    }
}

/// Weather lines shown under the date, skipping unset values.
pub(crate) fn weather_lines(sheet: &CallSheet) -> Vec<String> {
    let unit = sheet.temp_unit.as_str();
    let mut lines = Vec::new();
    if let Some(t) = &sheet.max_temp {
        lines.push(format!("High: {}°{}", t, unit));
    }
    if let Some(t) = &sheet.min_temp {
        lines.push(format!("Low: {}°{}", t, unit));
    }
    if let Some(s) = &sheet.sunrise {
        lines.push(format!("Sunrise: {}", s));
    }
    if let Some(s) = &sheet.sunset {
        lines.push(format!("Sunset: {}", s));
    }
    lines
}

pub(crate) const SCENE_HEADERS: [&str; 7] = ["Time", "Scene", "Description", "D/N", "Cast", "Location", "Pages"];
pub(crate) const TALENT_HEADERS: [&str; 7] = ["ID", "Name", "Role", "Makeup", "Call Time", "Contact", "SWF"];
pub(crate) const LOCATION_HEADERS: [&str; 4] = ["No.", "Set Location", "Parking & Notes", "Nearest Hospital"];
pub(crate) const NOTE_HEADERS: [&str; 2] = ["Department", "Notes"];

#[cfg(test)]
mod tests {
    use super::*;
    use callsheet_types::{HeaderField, SheetDefaults};

    fn sheet() -> CallSheet {
        CallSheet::new(&SheetDefaults::default(), "2024-03-01")
    }

    #[test]
    fn date_is_month_day_year() {
        assert_eq!(format_shoot_date(&sheet()), "3/1/2024");
        let mut s = sheet();
        s.shoot_date = "someday".into();
        assert_eq!(format_shoot_date(&s), "someday");
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("YOUR MOVIE NAME"), "your-movie-name");
        assert_eq!(slug("  Night/Shoot!! 2 "), "night-shoot-2");
        assert_eq!(slug("***"), "callsheet");
    }

    #[test]
    fn export_name() {
        let mut s = sheet();
        s.set_header_field(HeaderField::ShootDay, "3");
        assert_eq!(export_file_name(&s), "your-movie-name-day-3.html");
    }

    #[test]
    fn weather_skips_unset() {
        let mut s = sheet();
        assert!(weather_lines(&s).is_empty());
        s.set_header_field(HeaderField::MaxTemp, "75");
        s.set_header_field(HeaderField::Sunset, "7:40 PM");
        assert_eq!(weather_lines(&s), vec!["High: 75°F".to_string(), "Sunset: 7:40 PM".to_string()]);
    }

    #[test]
    fn write_html_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("sheet.html");
        write_html(&path, &sheet()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
    }
}
