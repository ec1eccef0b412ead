use std::time::Duration;

use ratatui::buffer::Buffer;
use tempfile::TempDir;

use super::input::EventOutcome;
use super::AppRuntime;
use crate::state::{fresh_sheet, AppState, ProjectMeta, SaveDebounce};
use crate::ui::action_id::PaneId;
use crate::ui::testing::screen_text;
use crate::ui::{AppEvent, InputEvent, KeyCode, Modifiers, Rect, RenderBuf};
use callsheet_types::SheetDefaults;

/// Runtime over a store in a temp dir. Autosave is off so only explicit
/// saves touch the disk.
fn runtime() -> (AppRuntime, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let defaults = SheetDefaults::default();
    let project = ProjectMeta::new(dir.path().join("sheet.sqlite"), dir.path().to_path_buf(), defaults.clone());
    let state = AppState::new(fresh_sheet(&defaults), project, SaveDebounce::new(Duration::from_secs(60), false));
    (AppRuntime::new(state), dir)
}

fn key(rt: &mut AppRuntime, code: KeyCode) -> EventOutcome {
    rt.handle_event(AppEvent::Key(InputEvent::key(code)))
}

fn ctrl(rt: &mut AppRuntime, ch: char) -> EventOutcome {
    rt.handle_event(AppEvent::Key(InputEvent::new(KeyCode::Char(ch), Modifiers::ctrl())))
}

fn type_str(rt: &mut AppRuntime, text: &str) {
    for ch in text.chars() {
        key(rt, KeyCode::Char(ch));
    }
}

/// Block until the background save or export reports back.
fn wait_for_io(rt: &mut AppRuntime) {
    let feedback = rt.io_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    rt.apply_io_feedback(feedback);
}

#[test]
fn starts_on_header() {
    let (rt, _dir) = runtime();
    assert_eq!(rt.panes.active().id(), "header");
    assert!(rt.layer_stack.has_layer("header"));
    assert_eq!(rt.app_frame.sheet_title, "YOUR MOVIE NAME");
}

#[test]
fn function_keys_switch_sections() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    assert_eq!(rt.panes.active().id(), "crew");
    assert!(rt.layer_stack.has_layer("list"));
    assert_eq!(rt.app_frame.section, PaneId::Crew);

    key(&mut rt, KeyCode::F(5));
    assert!(rt.layer_stack.has_layer("schedule"));
    assert!(!rt.layer_stack.has_layer("list"));
}

#[test]
fn tab_cycles_sections() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::Tab);
    assert_eq!(rt.panes.active().id(), "crew");
    rt.handle_event(AppEvent::Key(InputEvent::new(KeyCode::Tab, Modifiers::shift())));
    rt.handle_event(AppEvent::Key(InputEvent::new(KeyCode::Tab, Modifiers::shift())));
    assert_eq!(rt.panes.active().id(), "preview");
}

#[test]
fn clean_sheet_quits_immediately() {
    let (mut rt, _dir) = runtime();
    assert_eq!(ctrl(&mut rt, 'q'), EventOutcome::Quit);
}

#[test]
fn cell_edit_round_trip() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    key(&mut rt, KeyCode::Char('a'));
    assert_eq!(rt.dispatcher.state().sheet.crew_contacts.len(), 3);
    assert!(rt.dispatcher.state().project.dirty);

    key(&mut rt, KeyCode::Char('l'));
    key(&mut rt, KeyCode::Enter);
    assert!(rt.layer_stack.has_layer("text_edit"));

    // Keys that are global elsewhere are typed while editing
    type_str(&mut rt, "Dana");
    key(&mut rt, KeyCode::Tab);
    assert_eq!(rt.panes.active().id(), "crew");

    key(&mut rt, KeyCode::Enter);
    assert!(!rt.layer_stack.has_layer("text_edit"));
    let crew = rt.dispatcher.state().sheet.crew_contacts.as_slice();
    assert_eq!(crew.last().map(|c| c.name.as_str()), Some("Dana"));
}

#[test]
fn escape_abandons_edit() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    key(&mut rt, KeyCode::Char('l'));
    key(&mut rt, KeyCode::Enter);
    type_str(&mut rt, "Someone");
    key(&mut rt, KeyCode::Escape);
    assert!(!rt.layer_stack.has_layer("text_edit"));
    assert_eq!(rt.dispatcher.state().sheet.crew_contacts.as_slice()[0].name, "John Smith");
    assert!(!rt.dispatcher.state().project.dirty);
}

#[test]
fn help_lists_active_bindings() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(5));
    key(&mut rt, KeyCode::F(1));
    assert_eq!(rt.panes.active().id(), "help");
    assert!(rt.layer_stack.has_layer("help"));

    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    rt.draw(area, &mut RenderBuf::new(&mut buf));
    let text = screen_text(&buf);
    assert!(text.contains("Help: Shooting Schedule"));
    assert!(text.contains("Add banner"));

    key(&mut rt, KeyCode::Escape);
    assert_eq!(rt.panes.active().id(), "schedule");
    assert!(rt.layer_stack.has_layer("schedule"));
}

#[test]
fn new_sheet_needs_confirmation() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    key(&mut rt, KeyCode::Char('a'));

    ctrl(&mut rt, 'n');
    assert_eq!(rt.panes.active().id(), "confirm");
    // Global bindings are blocked while the dialog is up
    key(&mut rt, KeyCode::F(5));
    assert_eq!(rt.panes.active().id(), "confirm");

    key(&mut rt, KeyCode::Char('n'));
    assert_eq!(rt.panes.active().id(), "crew");
    assert_eq!(rt.dispatcher.state().sheet.crew_contacts.len(), 3);

    ctrl(&mut rt, 'n');
    key(&mut rt, KeyCode::Char('y'));
    assert_eq!(rt.panes.active().id(), "crew");
    assert_eq!(rt.dispatcher.state().sheet.crew_contacts.len(), 2);
}

#[test]
fn manual_save_reports_success() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    key(&mut rt, KeyCode::Char('a'));
    ctrl(&mut rt, 's');
    wait_for_io(&mut rt);

    assert!(!rt.dispatcher.state().project.dirty);
    let toast = rt.app_frame.status_bar.current().map(|m| m.text.clone());
    assert_eq!(toast.as_deref(), Some(crate::dispatch::SAVED_MESSAGE));
}

#[test]
fn dirty_quit_saves_first() {
    let (mut rt, dir) = runtime();
    key(&mut rt, KeyCode::F(3));
    key(&mut rt, KeyCode::Char('a'));

    assert_eq!(ctrl(&mut rt, 'q'), EventOutcome::Continue);
    assert_eq!(rt.panes.active().id(), "confirm");
    assert_eq!(key(&mut rt, KeyCode::Char('y')), EventOutcome::Continue);
    assert!(rt.quit_after_save);
    assert!(!rt.quit_ready());

    wait_for_io(&mut rt);
    assert!(rt.quit_ready());
    assert!(dir.path().join("sheet.sqlite").exists());
}

#[test]
fn email_and_link_show_placeholders() {
    let (mut rt, _dir) = runtime();
    ctrl(&mut rt, 'e');
    let toast = rt.app_frame.status_bar.current().map(|m| m.text.clone());
    assert_eq!(toast.as_deref(), Some(crate::dispatch::EMAIL_PLACEHOLDER));
    ctrl(&mut rt, 'l');
    let toast = rt.app_frame.status_bar.current().map(|m| m.text.clone());
    assert_eq!(toast.as_deref(), Some(crate::dispatch::SHARE_LINK_PLACEHOLDER));
}

#[test]
fn export_writes_html() {
    let (mut rt, dir) = runtime();
    ctrl(&mut rt, 'p');
    assert!(rt.dispatcher.state().io.export_in_progress);
    wait_for_io(&mut rt);
    assert!(!rt.dispatcher.state().io.export_in_progress);

    let exported = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.path().extension().is_some_and(|x| x == "html"));
    assert!(exported);
}

#[test]
fn small_terminal_shows_size_warning() {
    let (mut rt, _dir) = runtime();
    let area = Rect::new(0, 0, 60, 20);
    let mut buf = Buffer::empty(area);
    rt.draw(area, &mut RenderBuf::new(&mut buf));
    assert!(screen_text(&buf).contains("80x24 required"));
}

#[test]
fn footer_hints_follow_bindings() {
    let (mut rt, _dir) = runtime();
    key(&mut rt, KeyCode::F(5));
    let area = Rect::new(0, 0, 120, 30);
    let mut buf = Buffer::empty(area);
    rt.draw(area, &mut RenderBuf::new(&mut buf));
    let text = screen_text(&buf);
    assert!(text.contains("[a] Add"));
    assert!(text.contains("[b] Banner"));

    key(&mut rt, KeyCode::F(3));
    let mut buf = Buffer::empty(area);
    rt.draw(area, &mut RenderBuf::new(&mut buf));
    assert!(!screen_text(&buf).contains("Banner"));
}
