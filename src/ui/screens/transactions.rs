use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = app.theme.palette();

    if app.rows.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions this month", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <amount> <category> [description]",
                p.dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(" Transactions (0) ", p.title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount", "Id"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let style = if i == app.transaction_index {
                p.selected_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };

            Row::new(vec![
                Cell::from(row.date.clone()),
                Cell::from(truncate(&row.description, 40)),
                Cell::from(truncate(&row.category, 18)),
                Cell::from(Span::styled(
                    format_amount(row.amount, &app.config.currency),
                    p.expense_style(),
                )),
                Cell::from(Span::styled(row.id.to_string(), p.dim_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.overlay))
            .title(Span::styled(
                format!(
                    " Transactions ({}) | total {} ",
                    app.rows.len(),
                    format_amount(app.summary.total_expenses, &app.config.currency)
                ),
                p.title_style(),
            )),
    );

    f.render_widget(table, area);
}
