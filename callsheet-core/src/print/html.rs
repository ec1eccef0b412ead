use callsheet_types::{CallSheet, SceneDetails, ScheduleEntry};

use super::{
    format_shoot_date, schedule_row_caption, weather_lines, LOCATION_HEADERS, NOTE_HEADERS, SCENE_HEADERS,
    TALENT_HEADERS,
};

const STYLE: &str = r#"
@page { size: letter; margin: 0.5in; }
html, body { margin: 0; padding: 0; }
body {
  font-family: Helvetica, Arial, sans-serif;
  color: black;
  background: white;
  -webkit-print-color-adjust: exact;
  print-color-adjust: exact;
}
.print-header {
  display: grid;
  grid-template-columns: 1fr 2fr 1fr;
  gap: 1rem;
  border: 2px solid black;
  padding: 0.5rem;
  margin-bottom: 1rem;
}
.print-box { border: 1px solid black; padding: 0.5rem; font-size: 10px; }
.print-box.center { text-align: center; }
.print-title { font-size: 24px; font-weight: bold; text-align: center; }
.shoot-day { font-size: 14px; margin: 0.5rem 0; }
.crew-call { font-size: 18px; font-weight: bold; }
.print-section { margin-top: 1rem; border: 1px solid black; }
.section-title { padding: 0.25rem; background: #f0f0f0; font-weight: bold; }
.print-table { width: 100%; border-collapse: collapse; }
.print-table th, .print-table td { border: 1px solid black; padding: 4px; font-size: 10px; }
.print-table th { background: #f0f0f0; font-weight: bold; }
td.banner { background: #e0e0e0; font-weight: bold; }
td.company-move { font-style: italic; }
.radio-grid { padding: 0.5rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; font-size: 10px; }
"#;

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the sheet as a standalone, letter-size HTML page.
pub fn render_html(sheet: &CallSheet) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} - Day {}</title>\n", escape(&sheet.title), escape(&sheet.shoot_day)));
    out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    render_header(&mut out, sheet);

    if !sheet.schedule.is_empty() {
        section_open(&mut out, "Schedule");
        table_head(&mut out, &SCENE_HEADERS);
        for item in &sheet.schedule {
            out.push_str("<tr>");
            let caption = escape(&schedule_row_caption(item).unwrap_or_default());
            match &item.entry {
                ScheduleEntry::Scene(scene) => scene_cells(&mut out, scene),
                ScheduleEntry::Banner { .. } => {
                    out.push_str(&format!("<td colspan=\"7\" class=\"banner\">{}</td>", caption));
                }
                ScheduleEntry::CompanyMove { .. } => {
                    out.push_str(&format!("<td colspan=\"7\" class=\"company-move\">{}</td>", caption));
                }
            }
            out.push_str("</tr>\n");
        }
        table_close(&mut out);
    }

    if !sheet.talent.is_empty() {
        section_open(&mut out, "Talent");
        table_head(&mut out, &TALENT_HEADERS);
        for t in &sheet.talent {
            row(&mut out, &[&t.cast_id, &t.name, &t.role, &t.makeup, &t.call_time, &t.contact, t.swf.code()]);
        }
        table_close(&mut out);
    }

    if !sheet.locations.is_empty() {
        section_open(&mut out, "Locations");
        table_head(&mut out, &LOCATION_HEADERS);
        for l in &sheet.locations {
            row(&mut out, &[&l.number, &l.set_location, &l.parking, &l.nearest_hospital]);
        }
        table_close(&mut out);
    }

    if !sheet.department_notes.is_empty() {
        section_open(&mut out, "Department Notes");
        table_head(&mut out, &NOTE_HEADERS);
        for n in &sheet.department_notes {
            row(&mut out, &[&n.department, &n.notes]);
        }
        table_close(&mut out);
    }

    if !sheet.advance_schedule.is_empty() {
        section_open(&mut out, "Advance Schedule");
        table_head(&mut out, &SCENE_HEADERS);
        for item in &sheet.advance_schedule {
            out.push_str("<tr>");
            scene_cells(&mut out, &item.scene);
            out.push_str("</tr>\n");
        }
        table_close(&mut out);
    }

    if !sheet.radio_channels.is_empty() {
        section_open(&mut out, "Radio Channels");
        out.push_str("<div class=\"radio-grid\">\n");
        for ch in &sheet.radio_channels {
            out.push_str(&format!(
                "<div><strong>{}:</strong> {}</div>\n",
                escape(&ch.number),
                escape(&ch.department)
            ));
        }
        out.push_str("</div>\n</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, sheet: &CallSheet) {
    out.push_str("<div class=\"print-header\">\n");

    // Left: logo, address, crew contacts
    out.push_str("<div class=\"print-box\">\n");
    if !sheet.production_logo.is_empty() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Production Logo\" style=\"width: 100px; margin-bottom: 0.5rem\">\n",
            escape(&sheet.production_logo)
        ));
    }
    if !sheet.production_address.is_empty() {
        out.push_str(&format!(
            "<div style=\"margin-bottom: 0.5rem\">{}</div>\n",
            escape(&sheet.production_address)
        ));
    }
    for c in &sheet.crew_contacts {
        out.push_str(&format!(
            "<div><strong>{}:</strong> {} {}</div>\n",
            escape(&c.position),
            escape(&c.name),
            escape(&c.phone)
        ));
    }
    out.push_str("</div>\n");

    // Middle: title, day, crew call, notes
    out.push_str("<div class=\"print-box center\">\n");
    out.push_str(&format!("<div class=\"print-title\">{}</div>\n", escape(&sheet.title)));
    out.push_str(&format!(
        "<div class=\"shoot-day\">Shoot Day: <strong>{}</strong></div>\n",
        escape(&sheet.shoot_day)
    ));
    out.push_str("<div style=\"font-size: 12px\">General Crew Call</div>\n");
    out.push_str(&format!("<div class=\"crew-call\">{}</div>\n", escape(&sheet.general_crew_call)));
    if !sheet.production_notes.is_empty() {
        out.push_str(&format!(
            "<div style=\"margin-top: 0.5rem\">{}</div>\n",
            escape(&sheet.production_notes)
        ));
    }
    out.push_str("</div>\n");

    // Right: date, weather, call times
    out.push_str("<div class=\"print-box\">\n");
    out.push_str(&format!(
        "<div style=\"margin-bottom: 0.5rem\"><strong>Date:</strong> {}</div>\n",
        escape(&format_shoot_date(sheet))
    ));
    out.push_str("<div style=\"margin-bottom: 0.5rem\"><strong>Weather</strong>\n");
    for line in weather_lines(sheet) {
        out.push_str(&format!("<div>{}</div>\n", escape(&line)));
    }
    out.push_str("</div>\n");
    for ct in &sheet.call_times {
        out.push_str(&format!("<div><strong>{}:</strong> {}</div>\n", escape(&ct.name), escape(&ct.time)));
    }
    out.push_str("</div>\n");

    out.push_str("</div>\n");
}

fn section_open(out: &mut String, title: &str) {
    out.push_str(&format!(
        "<div class=\"print-section\">\n<div class=\"section-title\">{}</div>\n",
        escape(title)
    ));
}

fn table_head(out: &mut String, headers: &[&str]) {
    out.push_str("<table class=\"print-table\">\n<thead><tr>");
    for h in headers {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
}

fn table_close(out: &mut String) {
    out.push_str("</tbody>\n</table>\n</div>\n");
}

fn row(out: &mut String, cells: &[&str]) {
    out.push_str("<tr>");
    for cell in cells {
        out.push_str(&format!("<td>{}</td>", escape(cell)));
    }
    out.push_str("</tr>\n");
}

fn scene_cells(out: &mut String, scene: &SceneDetails) {
    for cell in [
        scene.time.as_str(),
        &scene.scene_no,
        &scene.description,
        scene.dn.label(),
        &scene.cast,
        &scene.location,
        &scene.pages,
    ] {
        out.push_str(&format!("<td>{}</td>", escape(cell)));
    }
}
