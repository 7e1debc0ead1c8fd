use ratatui::layout::Position;
use ratatui::widgets::TableState;
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::modal::draw_modal;
use crate::ui::results;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, search, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.service_label()), header);

    let search_focused = app.focus() == Focus::Search && !app.state().modal.is_visible();
    frame.render_widget(app.search().widget(search_focused), search);
    if search_focused {
        let (x, y) = app.search().cursor_position(search);
        frame.set_cursor_position(Position::new(x, y));
    }

    let state = app.state();
    let results_focused = app.focus() == Focus::Results;
    if state.entitlements.items.is_empty() {
        frame.render_widget(
            results::empty_message(&state.entitlements, results_focused),
            body,
        );
    } else {
        let mut table_state = TableState::default().with_selected(Some(app.selection()));
        frame.render_stateful_widget(
            results::results_table(&state.entitlements, results_focused),
            body,
            &mut table_state,
        );
    }

    frame.render_widget(Footer::new().widget(footer), footer);

    draw_modal(frame, state);
}
