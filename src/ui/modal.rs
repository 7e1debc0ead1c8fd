use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::entitlements::Entitlement;
use crate::store::{AppState, ModalState};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

/// Render whichever modal is open on top of the main view.
pub fn draw_modal(frame: &mut Frame<'_>, state: &AppState) {
    match &state.modal {
        ModalState::Hidden => {}
        ModalState::Detail { index } => {
            draw_detail(frame, state.entitlements.items.get(*index));
        }
        ModalState::Error { message } => draw_error(frame, message),
    }
}

fn field_line(label: &'static str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<16}", label),
            Style::default().fg(HEADER_SEPARATOR),
        ),
        Span::styled(
            value.unwrap_or("-").to_string(),
            Style::default().fg(HEADER_TEXT),
        ),
    ])
}

fn draw_detail(frame: &mut Frame<'_>, entitlement: Option<&Entitlement>) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines = match entitlement {
        Some(ent) => {
            let mut lines = vec![
                field_line("Entitlement", ent.uuid.as_deref()),
                field_line("Course", ent.course_uuid.as_deref()),
                field_line("User", ent.user.as_deref()),
                field_line("Mode", ent.mode.as_deref()),
                field_line("Order", ent.order_number.as_deref()),
                field_line("Enrolled run", ent.enrollment_course_run.as_deref()),
                field_line("Created", ent.created.as_deref()),
                field_line("Modified", ent.modified.as_deref()),
                field_line("Expired at", ent.expired_at.as_deref()),
            ];
            if !ent.extra.is_empty() {
                lines.push(Line::from(""));
                for (key, value) in &ent.extra {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:<16}", key),
                            Style::default().fg(HEADER_SEPARATOR),
                        ),
                        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
                    ]));
                }
            }
            lines
        }
        // The collection was replaced under an open modal.
        None => vec![Line::from(Span::styled(
            "This entitlement is no longer in the result set.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))],
    };

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Entitlement ")
            .title_bottom(" Esc to close ")
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(popup, area);
}

fn draw_error(frame: &mut Frame<'_>, message: &str) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The result list was left as it was.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Lookup failed ")
                .title_bottom(" Esc to dismiss ")
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(popup, area);
}
