use callsheet_types::fields::{format_total, total_pages};
use callsheet_types::{CallSheet, SceneDetails, ScheduleEntry};

use super::{
    format_shoot_date, schedule_row_caption, weather_lines, LOCATION_HEADERS, NOTE_HEADERS, SCENE_HEADERS,
    TALENT_HEADERS,
};

const MIN_WIDTH: usize = 40;
const SCENE_WEIGHTS: [usize; 7] = [8, 6, 24, 6, 14, 14, 6];
const TALENT_WEIGHTS: [usize; 7] = [4, 14, 14, 8, 8, 14, 4];
const LOCATION_WEIGHTS: [usize; 4] = [3, 14, 14, 12];
const NOTE_WEIGHTS: [usize; 2] = [1, 4];

/// Plain-text rendering of the printed layout, one string per line, each at
/// most `width` characters.
pub fn render_text(sheet: &CallSheet, width: usize) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let mut lines = Vec::new();

    rule(&mut lines, '=', width);
    lines.push(center(&sheet.title, width));
    lines.push(center(&format!("Shoot Day: {}", sheet.shoot_day), width));
    lines.push(center(&format!("General Crew Call: {}", sheet.general_crew_call), width));
    if !sheet.production_notes.is_empty() {
        lines.push(center(&sheet.production_notes, width));
    }
    rule(&mut lines, '-', width);

    lines.push(fit(&format!("Date: {}", format_shoot_date(sheet)), width));
    let weather = weather_lines(sheet);
    if !weather.is_empty() {
        lines.push(fit(&format!("Weather: {}", weather.join("  ")), width));
    }
    for ct in &sheet.call_times {
        lines.push(fit(&format!("{}: {}", ct.name, ct.time), width));
    }
    if !sheet.production_logo.is_empty() {
        lines.push(fit("Logo: attached", width));
    }
    if !sheet.production_address.is_empty() {
        lines.push(fit(&sheet.production_address, width));
    }
    for c in &sheet.crew_contacts {
        lines.push(fit(&format!("{}: {} {}", c.position, c.name, c.phone), width));
    }

    if !sheet.schedule.is_empty() {
        section(&mut lines, "SCHEDULE", width);
        let cols = column_widths(&SCENE_WEIGHTS, width);
        lines.push(table_row(&SCENE_HEADERS.map(String::from), &cols));
        for item in &sheet.schedule {
            match &item.entry {
                ScheduleEntry::Scene(scene) => lines.push(table_row(&scene_cells(scene), &cols)),
                _ => {
                    let caption = schedule_row_caption(item).unwrap_or_default();
                    lines.push(fit(&format!("-- {} --", caption), width));
                }
            }
        }
        lines.push(fit(&format!("Total pages: {}", format_total(total_pages(&sheet.schedule))), width));
    }

    if !sheet.talent.is_empty() {
        section(&mut lines, "TALENT", width);
        let cols = column_widths(&TALENT_WEIGHTS, width);
        lines.push(table_row(&TALENT_HEADERS.map(String::from), &cols));
        for t in &sheet.talent {
            let cells = [
                t.cast_id.clone(),
                t.name.clone(),
                t.role.clone(),
                t.makeup.clone(),
                t.call_time.clone(),
                t.contact.clone(),
                t.swf.code().to_string(),
            ];
            lines.push(table_row(&cells, &cols));
        }
    }

    if !sheet.locations.is_empty() {
        section(&mut lines, "LOCATIONS", width);
        let cols = column_widths(&LOCATION_WEIGHTS, width);
        lines.push(table_row(&LOCATION_HEADERS.map(String::from), &cols));
        for l in &sheet.locations {
            let cells = [l.number.clone(), l.set_location.clone(), l.parking.clone(), l.nearest_hospital.clone()];
            lines.push(table_row(&cells, &cols));
        }
    }

    if !sheet.department_notes.is_empty() {
        section(&mut lines, "DEPARTMENT NOTES", width);
        let cols = column_widths(&NOTE_WEIGHTS, width);
        lines.push(table_row(&NOTE_HEADERS.map(String::from), &cols));
        for n in &sheet.department_notes {
            lines.push(table_row(&[n.department.clone(), n.notes.clone()], &cols));
        }
    }

    if !sheet.advance_schedule.is_empty() {
        section(&mut lines, "ADVANCE SCHEDULE", width);
        let cols = column_widths(&SCENE_WEIGHTS, width);
        lines.push(table_row(&SCENE_HEADERS.map(String::from), &cols));
        for item in &sheet.advance_schedule {
            lines.push(table_row(&scene_cells(&item.scene), &cols));
        }
    }

    if !sheet.radio_channels.is_empty() {
        section(&mut lines, "RADIO CHANNELS", width);
        let entries: Vec<String> = sheet
            .radio_channels
            .iter()
            .map(|ch| format!("{}: {}", ch.number, ch.department))
            .collect();
        let cols = [width / 4; 4];
        for chunk in entries.chunks(4) {
            lines.push(table_row(chunk, &cols[..chunk.len()]));
        }
    }

    rule(&mut lines, '=', width);
    lines
}

fn scene_cells(scene: &SceneDetails) -> [String; 7] {
    [
        scene.time.clone(),
        scene.scene_no.clone(),
        scene.description.clone(),
        scene.dn.label().to_string(),
        scene.cast.clone(),
        scene.location.clone(),
        scene.pages.clone(),
    ]
}

fn rule(lines: &mut Vec<String>, c: char, width: usize) {
    lines.push(std::iter::repeat(c).take(width).collect());
}

fn section(lines: &mut Vec<String>, title: &str, width: usize) {
    lines.push(String::new());
    lines.push(fit(title, width));
    rule(lines, '-', width);
}

/// Truncate to `width` characters.
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn center(text: &str, width: usize) -> String {
    let text = fit(text, width);
    let pad = (width - text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Split `width` by weight, leaving one column of gap between cells.
fn column_widths(weights: &[usize], width: usize) -> Vec<usize> {
    let total: usize = weights.iter().sum();
    let usable = width.saturating_sub(weights.len().saturating_sub(1));
    weights.iter().map(|w| (usable * w / total).max(1)).collect()
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let text = fit(cell, w);
        let pad = w - text.chars().count();
        line.push_str(&text);
        line.push_str(&" ".repeat(pad));
    }
    line.trim_end().to_string()
}
