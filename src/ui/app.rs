use tracing::debug;

use crate::store::{Action, AppState, Effect, EffectRunner, Store};
use crate::ui::search::SearchInput;

/// Which region keyboard input is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Results,
}

/// Top-level UI state holder: the store, the effect runner, and the
/// transient view state that never enters the store (query text, focus,
/// table selection).
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: Store,
    runner: EffectRunner,
    search: SearchInput,
    selection: usize,
    service_label: String,
}

impl App {
    pub fn new(runner: EffectRunner, service_label: String) -> Self {
        let mut store = Store::new();
        store.subscribe(|state| {
            tracing::trace!(
                entitlements = state.entitlements.items.len(),
                modal = ?state.modal,
                "state changed"
            );
        });

        Self {
            should_quit: false,
            focus: Focus::Search,
            store,
            runner,
            search: SearchInput::new(),
            selection: 0,
            service_label,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchInput {
        &mut self.search
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        };
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.state().entitlements.items.len();
        if len == 0 {
            return;
        }
        let current = self.selection as isize;
        self.selection = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Run an action through the store, then keep the table selection
    /// inside the (possibly replaced) collection.
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
        let len = self.store.state().entitlements.items.len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }

    /// Submit whatever is in the search field.
    ///
    /// The field is not cleared and nothing blocks a resubmit: every press
    /// of Enter starts one more fetch, and the reducer's generation guard
    /// settles overlapping responses.
    pub fn submit_search(&mut self) {
        let username = self.search.value().to_string();
        debug!(%username, "search submitted");
        self.runner.run(Effect::FetchEntitlements { username });
    }

    /// Seed the search field (from `--user`) and submit once.
    pub fn prefill_search(&mut self, username: String) {
        self.search.set_value(username);
        self.submit_search();
    }

    pub fn open_selected(&mut self) {
        if self.store.state().entitlements.items.is_empty() {
            return;
        }
        let index = self.selection;
        self.dispatch(Action::ShowEntitlement { index });
    }

    pub fn close_modal(&mut self) {
        self.dispatch(Action::CloseModal);
    }

    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
