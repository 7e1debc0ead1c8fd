//! Effects: deferred gateway calls that dispatch outcome actions.
//!
//! Instead of dispatching function-shaped values, the view layer describes
//! the side effect it wants as an [`Effect`] and hands it to the
//! [`EffectRunner`]. The runner performs the call on its tokio handle and
//! pushes exactly one outcome action back through the [`ActionSink`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::entitlements::EntitlementsGateway;
use crate::store::action::Action;

/// Side effects the store knows how to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up the entitlements for one username. One gateway call per
    /// effect; overlapping effects for the same user all run.
    FetchEntitlements { username: String },
}

/// Where completed effects dispatch their outcome actions.
///
/// The UI layer implements this with a closure that forwards into its
/// event channel; tests implement it with a recording sender.
pub trait ActionSink: Send + Sync {
    fn dispatch(&self, action: Action);
}

impl<F> ActionSink for F
where
    F: Fn(Action) + Send + Sync,
{
    fn dispatch(&self, action: Action) {
        self(action);
    }
}

/// Executes effects against the gateway.
///
/// Each fetch is tagged with a monotonically increasing generation (carried
/// on the outcome action so the reducer can drop superseded reports) and a
/// correlation id for the logs. A gateway error never escapes: it becomes
/// a `FetchFailed` action like any other outcome.
pub struct EffectRunner {
    gateway: Arc<dyn EntitlementsGateway>,
    handle: tokio::runtime::Handle,
    sink: Arc<dyn ActionSink>,
    generation: AtomicU64,
}

impl EffectRunner {
    pub fn new(
        gateway: Arc<dyn EntitlementsGateway>,
        handle: tokio::runtime::Handle,
        sink: Arc<dyn ActionSink>,
    ) -> Self {
        Self {
            gateway,
            handle,
            sink,
            generation: AtomicU64::new(0),
        }
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchEntitlements { username } => self.fetch_entitlements(username),
        }
    }

    fn fetch_entitlements(&self, username: String) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let request_id = Uuid::new_v4();
        debug!(%request_id, %username, generation, "fetching entitlements");

        let gateway = Arc::clone(&self.gateway);
        let sink = Arc::clone(&self.sink);
        self.handle.spawn(async move {
            let action = match gateway.fetch_entitlements(&username).await {
                Ok(entitlements) => {
                    debug!(%request_id, count = entitlements.len(), "entitlement fetch resolved");
                    Action::FetchSucceeded {
                        username,
                        generation,
                        entitlements,
                    }
                }
                Err(error) => {
                    warn!(%request_id, %error, "entitlement fetch failed");
                    Action::FetchFailed {
                        username,
                        generation,
                        error: error.to_string(),
                    }
                }
            };
            sink.dispatch(action);
        });
    }
}
