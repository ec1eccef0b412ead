//! End-to-end dispatch tests: edits, debounced and manual saves, export and
//! logo import against real files in a temp directory.

use std::path::Path;
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use callsheet_core::action::{Action, HeaderAction, IoFeedback, NavIntent, SessionAction, StatusLevel};
use callsheet_core::config::Config;
use callsheet_core::dispatch::{LocalDispatcher, EMAIL_PLACEHOLDER, SAVED_MESSAGE, SHARE_LINK_PLACEHOLDER};
use callsheet_core::state::persistence::{load_sheet, SqliteStore};
use callsheet_core::state::AppState;
use callsheet_types::{Dispatcher, HeaderField, TalentAction, TalentField};

const WAIT: Duration = Duration::from_secs(10);

fn config_in(dir: &Path) -> Config {
    let file = dir.join("config.toml");
    let contents = format!(
        "[autosave]\ndebounce_ms = 100\n[storage]\npath = {:?}\n[export]\ndir = {:?}\n",
        dir.join("store.sqlite").display().to_string(),
        dir.join("exports").display().to_string(),
    );
    std::fs::write(&file, contents).unwrap();
    let mut config = Config::embedded();
    config.merge_file(&file);
    config
}

fn setup(dir: &Path) -> (LocalDispatcher, Receiver<IoFeedback>) {
    let (tx, rx) = channel();
    let state = AppState::open(&config_in(dir));
    (LocalDispatcher::new(state, tx), rx)
}

fn set_title(d: &mut LocalDispatcher, title: &str) {
    d.dispatch(&Action::Header(HeaderAction::Set(HeaderField::Title, title.into())));
}

#[test]
fn manual_save_persists_and_toasts() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, rx) = setup(dir.path());
    set_title(&mut d, "Night Shoot");
    assert!(d.state().project.dirty);

    d.dispatch(&Action::Session(SessionAction::Save));
    let feedback = rx.recv_timeout(WAIT).unwrap();
    let result = d.apply_io_feedback(feedback);
    assert_eq!(result.status[0].message, SAVED_MESSAGE);
    assert!(!d.state().project.dirty);

    let store = SqliteStore::open(&dir.path().join("store.sqlite")).unwrap();
    let stored = load_sheet(&store).unwrap().unwrap();
    assert_eq!(stored.title, "Night Shoot");
}

#[test]
fn reopen_restores_saved_sheet() {
    let dir = tempfile::tempdir().unwrap();
    {
        let (mut d, rx) = setup(dir.path());
        let id = d.state().sheet.talent.get(0).unwrap().id;
        d.dispatch(&Action::Talent(TalentAction::Update(id, TalentField::Name, "Ada".into())));
        d.dispatch(&Action::Session(SessionAction::Save));
        d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    }
    let (d, _rx) = setup(dir.path());
    assert_eq!(d.state().sheet.talent.get(0).unwrap().name, "Ada");
    assert!(!d.state().project.dirty);
}

#[test]
fn autosave_fires_after_debounce_silently() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, rx) = setup(dir.path());
    set_title(&mut d, "Autosaved");

    let now = Instant::now();
    assert!(!d.flush_due_save(now));
    assert!(d.flush_due_save(now + Duration::from_millis(150)));
    // A second flush while the first is in flight does nothing
    assert!(!d.flush_due_save(now + Duration::from_millis(300)));

    let result = d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    assert!(result.status.is_empty());
    assert!(!d.state().project.dirty);

    let store = SqliteStore::open(&dir.path().join("store.sqlite")).unwrap();
    assert_eq!(load_sheet(&store).unwrap().unwrap().title, "Autosaved");
}

#[test]
fn explicit_save_waits_for_running_autosave() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, rx) = setup(dir.path());
    set_title(&mut d, "OLD");
    assert!(d.flush_due_save(Instant::now() + Duration::from_millis(150)));

    set_title(&mut d, "NEW");
    d.dispatch(&Action::Session(SessionAction::Save));
    assert!(d.state().io.manual_save_queued);

    // The autosave lands first and hands over to the explicit save
    let first = d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    assert!(first.status.is_empty());
    assert!(d.state().project.dirty);
    assert!(d.state().io.pending_save.is_some_and(|p| p.manual));
    assert!(!d.state().io.manual_save_queued);

    let second = d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    assert_eq!(second.status[0].message, SAVED_MESSAGE);
    assert!(!d.state().project.dirty);
    assert!(d.state().io.pending_save.is_none());

    let store = SqliteStore::open(&dir.path().join("store.sqlite")).unwrap();
    assert_eq!(load_sheet(&store).unwrap().unwrap().title, "NEW");
}

#[test]
fn quit_flush_waits_for_save() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, rx) = setup(dir.path());
    assert!(!d.flush_pending_save());

    set_title(&mut d, "Before Quit");
    assert!(d.flush_pending_save());
    d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    assert!(!d.flush_pending_save());
    assert!(!d.state().project.dirty);
}

#[test]
fn export_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, rx) = setup(dir.path());
    set_title(&mut d, "Export Me");
    d.dispatch(&Action::Header(HeaderAction::Set(HeaderField::ShootDay, "4".into())));

    d.dispatch(&Action::Session(SessionAction::Export));
    let result = d.apply_io_feedback(rx.recv_timeout(WAIT).unwrap());
    assert_eq!(result.status[0].level, StatusLevel::Info);

    let path = dir.path().join("exports").join("export-me-day-4.html");
    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains("Export Me"));
    assert!(!d.state().io.export_in_progress);
}

#[test]
fn placeholder_commands_toast() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, _rx) = setup(dir.path());
    let email = d.dispatch(&Action::Session(SessionAction::Email));
    assert_eq!(email.status[0].message, EMAIL_PLACEHOLDER);
    let link = d.dispatch(&Action::Session(SessionAction::ShareLink));
    assert_eq!(link.status[0].message, SHARE_LINK_PLACEHOLDER);
    assert!(!d.state().project.dirty);
}

#[test]
fn new_sheet_resets_document() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, _rx) = setup(dir.path());
    set_title(&mut d, "Old");
    d.dispatch(&Action::Talent(TalentAction::Add));

    let result = d.dispatch(&Action::Session(SessionAction::NewSheet));
    assert_eq!(result.nav, vec![NavIntent::ConditionalPop("confirm")]);
    assert_eq!(result.sheet_title.as_deref(), Some("YOUR MOVIE NAME"));
    assert_eq!(d.state().sheet.talent.len(), 1);
    assert!(d.state().project.dirty);
}

#[test]
fn logo_import() {
    let dir = tempfile::tempdir().unwrap();
    let (mut d, _rx) = setup(dir.path());
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, [0x89, b'P', b'N', b'G']).unwrap();

    let result = d.dispatch(&Action::Session(SessionAction::LoadLogo(logo)));
    assert_eq!(result.nav, vec![NavIntent::ConditionalPop("logo")]);
    assert!(d.state().sheet.production_logo.starts_with("data:image/png;base64,"));

    let missing = d.dispatch(&Action::Session(SessionAction::LoadLogo(dir.path().join("missing.png"))));
    assert_eq!(missing.status[0].level, StatusLevel::Error);
    assert!(missing.nav.is_empty());
}
