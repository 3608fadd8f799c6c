use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, PendingAction, Screen};
use super::util::{default_export_path, expand_home, format_amount, next_word};
use crate::db::Database;
use crate::ledger::Tracker;
use crate::models::{parse_id, MAX_AMOUNT};

pub(crate) type Session = Tracker<Database>;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Session) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTrack", cmd_quit, r);
    register_command!("quit", "Quit SpendTrack", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "set",
        "Set month details (e.g. :set 5000 2000 500 Asha)",
        cmd_set,
        r
    );
    register_command!(
        "add",
        "Add expense (e.g. :add 120 Food Lunch)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a 120 Food Lunch)", cmd_add, r);
    register_command!(
        "delete",
        "Delete selected transaction, or by id",
        cmd_delete,
        r
    );
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/spend.csv)",
        cmd_export,
        r
    );
    register_command!(
        "reset-month",
        "Archive this month's total and clear transactions",
        cmd_reset_month,
        r
    );
    register_command!("theme", "Toggle light/dark theme", cmd_theme, r);
    register_command!(
        "categories",
        "List configured categories",
        cmd_categories,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, session)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_set(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :set <income> <limit> <goal> [name]");
        return Ok(());
    }

    let (income, rest) = next_word(args);
    let (limit, rest) = next_word(rest);
    let (goal, name) = next_word(rest);

    if let Err(e) = session.update_settings(income, limit, goal, name) {
        app.warn_unsaved(&e);
    } else {
        app.set_status(format!("Monthly details saved for {}", session.ledger().settings().user_name));
    }
    app.refresh(session);
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    let (amount, rest) = next_word(args);
    if rest.is_empty() {
        app.set_status("Usage: :add <amount> <category> [description]");
        return Ok(());
    }

    let Some((category, description)) = app.config.match_category(rest) else {
        let known = app.config.categories.join(", ");
        app.set_status(format!("Unknown category. Choose one of: {known}"));
        return Ok(());
    };
    let (category, description) = (category.to_string(), description.to_string());

    match session.add_transaction(amount, &description, &category) {
        Ok(Some(_)) => {
            let amount = session
                .ledger()
                .transactions()
                .last()
                .map(|t| format_amount(t.amount, &app.config.currency))
                .unwrap_or_default();
            app.set_status(format!("Added {amount} to {category}"));
        }
        Ok(None) => app.set_status(format!(
            "Ignored: '{amount}' must be between 0.01 and {}",
            format_amount(MAX_AMOUNT, &app.config.currency)
        )),
        Err(e) => app.warn_unsaved(&e),
    }
    app.refresh(session);
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    if args.is_empty() {
        match app.selected_row() {
            Some(row) => {
                let action = PendingAction::DeleteTransaction {
                    id: row.id,
                    description: row.description.clone(),
                };
                let label = if row.description.is_empty() {
                    row.category.clone()
                } else {
                    row.description.clone()
                };
                app.ask_confirm(action, format!("Delete '{label}'?"));
            }
            None => app.set_status("No transaction selected"),
        }
        return Ok(());
    }

    let Some(id) = parse_id(args) else {
        app.set_status(format!("Invalid id: {args}"));
        return Ok(());
    };
    delete_transaction(id, app, session);
    Ok(())
}

pub(crate) fn delete_transaction(id: i64, app: &mut App, session: &mut Session) {
    match session.delete_transaction(id) {
        Ok(true) => app.set_status(format!("Deleted transaction {id}")),
        Ok(false) => app.set_status(format!("No transaction with id {id}")),
        Err(e) => app.warn_unsaved(&e),
    }
    app.refresh(session);
}

fn cmd_export(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path()
    } else {
        expand_home(args)
    };

    match crate::export::write_csv(Path::new(&path), session.ledger().transactions()) {
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_reset_month(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    let total = format_amount(app.summary.total_expenses, &app.config.currency);
    app.ask_confirm(
        PendingAction::ResetMonth,
        format!("Archive {total} as last month and clear all transactions?"),
    );
    Ok(())
}

pub(crate) fn reset_month(app: &mut App, session: &mut Session) {
    match session.reset_month() {
        Ok(total) => app.set_status(format!(
            "Month reset. Last month total: {}",
            format_amount(total, &app.config.currency)
        )),
        Err(e) => app.warn_unsaved(&e),
    }
    app.refresh(session);
}

fn cmd_theme(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.toggle_theme();
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    let list = app.config.categories.join(", ");
    app.set_status(format!("Categories: {list}"));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
