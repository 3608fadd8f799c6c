use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::chart::chart_slices;
use crate::ui::theme::Palette;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let warning_height = if app.summary.is_over_limit { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Greeting
            Constraint::Length(5),              // Summary cards
            Constraint::Length(3),              // Spending limit gauge
            Constraint::Length(warning_height), // Over-limit banner
            Constraint::Min(8),                 // Category chart
        ])
        .split(area);

    render_greeting(f, chunks[0], app);
    render_summary_cards(f, chunks[1], app);
    render_limit_gauge(f, chunks[2], app);
    if app.summary.is_over_limit {
        render_warning(f, chunks[3], app);
    }
    render_category_chart(f, chunks[4], app);
}

fn render_greeting(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let greeting = Paragraph::new(Line::from(vec![
        Span::styled(" Hello, ", p.dim_style()),
        Span::styled(
            app.settings.user_name.as_str(),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   income {}  goal {}",
                format_amount(app.settings.monthly_income, &app.config.currency),
                format_amount(app.settings.savings_goal, &app.config.currency),
            ),
            p.dim_style(),
        ),
    ]));
    f.render_widget(greeting, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let currency = app.config.currency.as_str();
    let balance = app.summary.balance;
    let balance_color = if balance >= Decimal::ZERO { p.green } else { p.red };

    render_card(f, cards[0], p, "Balance", format_amount(balance, currency), balance_color);
    render_card(
        f,
        cards[1],
        p,
        "Expenses",
        format_amount(app.summary.total_expenses, currency),
        p.red,
    );
    render_card(
        f,
        cards[2],
        p,
        "Savings",
        format_amount(app.summary.savings(), currency),
        balance_color,
    );
    let last_month = app
        .last_month_total
        .map(|total| format_amount(total, currency))
        .unwrap_or_else(|| "—".into());
    render_card(f, cards[3], p, "Last Month", last_month, p.text_dim);
}

fn render_card(f: &mut Frame, area: Rect, p: &Palette, title: &str, display: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.overlay))
        .title(Span::styled(format!(" {title} "), p.title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_limit_gauge(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let percent = app.summary.limit_percent_display().to_u16().unwrap_or(0);

    let label = if app.settings.has_limit() {
        format!(
            "{}% of {}",
            app.summary.limit_percent.round_dp(0),
            format_amount(app.settings.spending_limit, &app.config.currency)
        )
    } else {
        "No spending limit set".to_string()
    };

    let color = if app.summary.is_over_limit {
        p.red
    } else if percent >= 80 {
        p.yellow
    } else {
        p.green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.overlay))
                .title(Span::styled(" Spending Limit ", p.title_style())),
        )
        .gauge_style(Style::default().fg(color).bg(p.surface))
        .percent(percent.min(100))
        .label(Span::styled(label, Style::default().fg(p.text)));

    f.render_widget(gauge, area);
}

fn render_warning(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let banner = Paragraph::new(Line::from(Span::styled(
        "⚠ Spending Limit Exceeded!",
        Style::default()
            .fg(p.header_bg)
            .bg(p.red)
            .add_modifier(Modifier::BOLD),
    )))
    .centered()
    .style(Style::default().bg(p.red));
    f.render_widget(banner, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();
    let slices = chart_slices(&app.summary.category_totals, app.theme);
    let has_data = !app.summary.category_totals.is_empty();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.overlay))
        .title(Span::styled(" Spending by Category ", p.title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            let value = slice.value.round().to_u64().unwrap_or(0).max(1);
            let bar = Bar::default()
                .value(value)
                .label(Line::from(truncate(&slice.label, 10)))
                .style(Style::default().fg(slice.color));
            if has_data {
                bar.text_value(format_amount(slice.value, &app.config.currency))
                    .value_style(Style::default().fg(p.header_bg).bg(slice.color))
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .label_style(Style::default().fg(p.legend));
    f.render_widget(chart, chunks[0]);

    let legend: Vec<Span> = if has_data {
        slices
            .iter()
            .flat_map(|slice| {
                [
                    Span::styled("■ ", Style::default().fg(slice.color)),
                    Span::styled(format!("{}  ", slice.label), Style::default().fg(p.legend)),
                ]
            })
            .collect()
    } else {
        vec![Span::styled("No Expenses Yet", Style::default().fg(p.neutral))]
    };
    f.render_widget(Paragraph::new(Line::from(legend)).centered(), chunks[1]);
}
