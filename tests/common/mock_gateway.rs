use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use entdesk::entitlements::{Entitlement, EntitlementsGateway, GatewayError};

/// Scripted gateway: answers each call with the next queued result and
/// records every username it was asked about. An exhausted script answers
/// with an empty collection.
#[derive(Default)]
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<Vec<Entitlement>, GatewayError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, items: Vec<Entitlement>) {
        self.responses.lock().push_back(Ok(items));
    }

    pub fn push_err(&self, error: GatewayError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Usernames passed to `fetch_entitlements`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl EntitlementsGateway for MockGateway {
    async fn fetch_entitlements(&self, username: &str) -> Result<Vec<Entitlement>, GatewayError> {
        self.calls.lock().push(username.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
