#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::config::{Config, DEFAULT_CATEGORIES};
use crate::ui::app::InputMode;

fn setup() -> (App, Session) {
    let config = Config {
        data_dir: std::path::PathBuf::from("."),
        categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        currency: "₹".into(),
    };
    let session = Tracker::open(Database::open_in_memory().unwrap()).unwrap();
    let mut app = App::new(config);
    app.refresh(&session);
    (app, session)
}

fn run(input: &str, app: &mut App, session: &mut Session) {
    handle_command(input, app, session).unwrap();
}

#[test]
fn test_set_and_add_update_summary() {
    let (mut app, mut session) = setup();
    run("set 5000 2000 500 Asha Rao", &mut app, &mut session);
    run("add 500 Food Lunch", &mut app, &mut session);
    run("add 1800 housing Rent partial", &mut app, &mut session);

    assert_eq!(app.settings.user_name, "Asha Rao");
    assert_eq!(app.summary.total_expenses, dec!(2300));
    assert_eq!(app.summary.balance, dec!(2700));
    assert!(app.summary.is_over_limit);
    assert_eq!(app.rows.len(), 2);
    assert_eq!(app.rows[1].category, "Housing");
    assert_eq!(app.rows[1].description, "Rent partial");
}

#[test]
fn test_add_rejects_bad_amount_and_category() {
    let (mut app, mut session) = setup();
    run("add -4 Food Snack", &mut app, &mut session);
    assert!(app.rows.is_empty());
    assert!(app.status_message.starts_with("Ignored"));

    run("add 4 Snacks chips", &mut app, &mut session);
    assert!(app.rows.is_empty());
    assert!(app.status_message.starts_with("Unknown category"));
}

#[test]
fn test_delete_selected_asks_for_confirmation() {
    let (mut app, mut session) = setup();
    run("add 20 Food Tea", &mut app, &mut session);
    run("delete", &mut app, &mut session);

    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteTransaction { .. })
    ));
    assert_eq!(app.rows.len(), 1);
}

#[test]
fn test_delete_by_id_twice() {
    let (mut app, mut session) = setup();
    run("add 20 Food Tea", &mut app, &mut session);
    let id = app.rows[0].id;

    run(&format!("delete {id}"), &mut app, &mut session);
    assert!(app.rows.is_empty());
    run(&format!("delete {id}"), &mut app, &mut session);
    assert!(app.status_message.starts_with("No transaction with id"));
}

#[test]
fn test_reset_month_after_confirmation() {
    let (mut app, mut session) = setup();
    run("set 3000 0 0", &mut app, &mut session);
    run("add 70 Bills Phone", &mut app, &mut session);
    run("reset-month", &mut app, &mut session);
    assert_eq!(app.pending_action, Some(PendingAction::ResetMonth));

    reset_month(&mut app, &mut session);
    assert!(app.rows.is_empty());
    assert_eq!(app.last_month_total, Some(dec!(70)));
    assert_eq!(app.settings.monthly_income, dec!(3000));
}

#[test]
fn test_export_writes_file() {
    let (mut app, mut session) = setup();
    run("add 9 Food Chai", &mut app, &mut session);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    run(&format!("export {}", path.display()), &mut app, &mut session);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(app.status_message.starts_with("Exported 1"));
}

#[test]
fn test_theme_toggle_leaves_money_alone() {
    let (mut app, mut session) = setup();
    run("add 9 Food Chai", &mut app, &mut session);
    let before = app.summary.clone();
    run("theme", &mut app, &mut session);
    assert_eq!(app.theme, crate::ui::theme::Theme::Light);
    assert_eq!(app.summary, before);
}

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut session) = setup();
    run("exprot", &mut app, &mut session);
    assert_eq!(
        app.status_message,
        "Unknown command: :exprot. Did you mean :export?"
    );
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("theme", "theme"), 0);
    assert_eq!(levenshtein("thme", "theme"), 1);
    assert_eq!(levenshtein("", "add"), 3);
}
