//! Unidirectional data-flow store.
//!
//! # Architecture
//!
//! ```text
//! View ──→ Effect ──→ Gateway
//!   ↑                    │
//!   │                    ▼
//! State ←── Reducer ←── Action
//! ```
//!
//! - **State**: immutable snapshot of everything the views render
//! - **Action**: plain data describing an outcome or a UI intent
//! - **Reducer**: pure function `(State, Action) -> State`
//! - **Effect**: a deferred gateway call that dispatches outcome actions
//!
//! The [`Store`] is constructed once, owned by the UI layer, and passed by
//! reference; `dispatch` is the only way state changes.

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use effect::{ActionSink, Effect, EffectRunner};
pub use reducer::{AppReducer, EntitlementsReducer, ModalReducer, Reducer};
pub use state::{AppState, EntitlementsState, FetchState, ModalState, StoreState};

/// Identifier handed out by [`Store::subscribe`], consumed by
/// [`Store::unsubscribe`].
pub type ListenerId = u64;

type Listener = Box<dyn FnMut(&AppState)>;

/// State container: holds the [`AppState`], applies the root reducer on
/// dispatch, and notifies subscribers after every dispatch that changed
/// the state.
pub struct Store {
    state: AppState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

impl Store {
    /// Store with the initial default state (empty entitlements, no modal).
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Store seeded with an explicit state. Used by tests.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the action through the root reducer. Listeners fire only when
    /// the state actually changed; the return value reports the same.
    ///
    /// Dispatch never fails: every outcome, including gateway errors, is
    /// data to be reduced.
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::trace!(?action, "dispatch");
        let next = AppReducer::reduce(self.state.clone(), action);
        let changed = next != self.state;
        self.state = next;
        if changed {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        changed
    }

    /// Register a listener invoked after every state-changing dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&AppState) + 'static,
    {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
