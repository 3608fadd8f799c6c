use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::models::{parse_id, MAX_AMOUNT};
use crate::summary;
use crate::ui::commands::Session;
use crate::ui::util::{default_export_path, expand_home, format_amount};

pub(crate) fn as_cli(args: &[String], session: &mut Session, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "set" => cli_set(&args[2..], session),
        "add" | "a" => cli_add(&args[2..], session, config),
        "delete" | "rm" => cli_delete(&args[2..], session),
        "list" | "ls" => cli_list(session, config),
        "summary" | "s" => cli_summary(session, config),
        "export" => cli_export(&args[2..], session),
        "reset-month" => cli_reset_month(session, config),
        "categories" => {
            for category in &config.categories {
                println!("{category}");
            }
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTrack: local monthly spending tracker");
    println!();
    println!("Usage: spendtrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                  Launch interactive TUI");
    println!("  set <income> <limit> <goal> [name]      Save monthly details");
    println!("  add <amount> <category> [description]   Record an expense");
    println!("  delete <id>                             Delete a transaction");
    println!("  list                                    List this month's transactions");
    println!("  summary                                 Print the monthly summary");
    println!("  export [path]                           Export transactions to CSV");
    println!("  reset-month                             Archive the total and clear transactions");
    println!("  categories                              List known categories");
    println!("  --help, -h                              Show this help");
    println!("  --version, -V                           Show version");
}

fn cli_set(args: &[String], session: &mut Session) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: spendtrack set <income> <limit> <goal> [name]");
    }
    let name = args[3..].join(" ");
    session.update_settings(&args[0], &args[1], &args[2], &name)?;
    println!(
        "Monthly details saved for {}",
        session.ledger().settings().user_name
    );
    Ok(())
}

fn cli_add(args: &[String], session: &mut Session, config: &Config) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: spendtrack add <amount> <category> [description]");
    }
    let rest = args[1..].join(" ");
    let Some((category, description)) = config.match_category(&rest) else {
        anyhow::bail!(
            "Unknown category. Choose one of: {}",
            config.categories.join(", ")
        );
    };

    match session.add_transaction(&args[0], description, category)? {
        Some(id) => println!("Added transaction {id} to {category}"),
        None => println!(
            "Ignored: '{}' must be between 0.01 and {}",
            args[0],
            format_amount(MAX_AMOUNT, &config.currency)
        ),
    }
    Ok(())
}

fn cli_delete(args: &[String], session: &mut Session) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: spendtrack delete <id>");
    };
    let Some(id) = parse_id(raw) else {
        anyhow::bail!("Invalid id: {raw}");
    };

    if session.delete_transaction(id)? {
        println!("Deleted transaction {id}");
    } else {
        println!("No transaction with id {id}");
    }
    Ok(())
}

fn cli_list(session: &Session, config: &Config) -> Result<()> {
    let rows = summary::table_rows(session.ledger().transactions());
    if rows.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<15} {:<11} {:<16} {:>12}  Description",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(72));
    for row in &rows {
        println!(
            "{:<15} {:<11} {:<16} {:>12}  {}",
            row.id,
            row.date,
            row.category,
            format_amount(row.amount, &config.currency),
            row.description,
        );
    }
    Ok(())
}

fn cli_summary(session: &Session, config: &Config) -> Result<()> {
    let ledger = session.ledger();
    let settings = ledger.settings();
    let summary = ledger.summary();
    let money = |val| format_amount(val, &config.currency);

    println!("SpendTrack: {}", settings.user_name);
    println!("{}", "─".repeat(40));
    println!("  Income:      {}", money(settings.monthly_income));
    println!("  Expenses:    {}", money(summary.total_expenses));
    println!("  Balance:     {}", money(summary.balance));
    println!("  Savings:     {}", money(summary.savings()));
    println!("  Goal:        {}", money(settings.savings_goal));
    if settings.has_limit() {
        println!(
            "  Limit:       {} ({}% used)",
            money(settings.spending_limit),
            summary.limit_percent.round_dp(1)
        );
    } else {
        println!("  Limit:       not set");
    }
    if let Some(total) = ledger.last_month_total() {
        println!("  Last month:  {}", money(total));
    }
    if summary.is_over_limit {
        println!();
        println!("⚠ Spending Limit Exceeded!");
    }

    if !summary.category_totals.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &summary.category_totals {
            println!("  {name:<24} {}", money(*amount));
        }
    }
    Ok(())
}

fn cli_export(args: &[String], session: &Session) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| expand_home(a))
        .unwrap_or_else(default_export_path);

    let count = crate::export::write_csv(Path::new(&output_path), session.ledger().transactions())?;
    println!("Exported {count} transactions to {output_path}");
    Ok(())
}

fn cli_reset_month(session: &mut Session, config: &Config) -> Result<()> {
    let total = session.reset_month()?;
    println!(
        "Month reset. Last month total: {}",
        format_amount(total, &config.currency)
    );
    Ok(())
}
