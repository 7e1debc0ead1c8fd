use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::entitlements::Entitlement;
use crate::store::EntitlementsState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};

fn block(state: &EntitlementsState, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let title = match &state.for_user {
        Some(user) => format!(" Entitlements: {} ({}) ", user, state.items.len()),
        None => " Entitlements ".to_string(),
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn status_cell(entitlement: &Entitlement) -> Cell<'static> {
    let (label, color) = if entitlement.is_expired() {
        ("expired", STATUS_ERROR)
    } else {
        ("active", STATUS_OK)
    };
    Cell::from(Span::styled(label, Style::default().fg(color)))
}

/// Table of the current entitlement collection.
pub fn results_table(state: &EntitlementsState, focused: bool) -> Table<'static> {
    let header = Row::new(["Course", "Mode", "Order", "Enrolled", "Status"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .items
        .iter()
        .map(|entitlement| {
            Row::new(vec![
                Cell::from(entitlement.course_label().to_string()),
                Cell::from(entitlement.mode.clone().unwrap_or_else(|| "-".into())),
                Cell::from(
                    entitlement
                        .order_number
                        .clone()
                        .unwrap_or_else(|| "-".into()),
                ),
                Cell::from(if entitlement.is_enrolled() { "yes" } else { "no" }),
                status_cell(entitlement),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Percentage(44),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block(state, focused))
    .row_highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    )
}

/// Placeholder shown while the collection is empty: either nothing has
/// been searched yet, or the last search came back with no entitlements.
pub fn empty_message(state: &EntitlementsState, focused: bool) -> Paragraph<'static> {
    let text = match &state.for_user {
        Some(user) => format!("No entitlements found for '{}'.", user),
        None => "Type a username and press Enter to search.".to_string(),
    };
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )))
    .block(block(state, focused))
}
