//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gateway;
pub mod mock_service;

use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use entdesk::store::{Action, ActionSink, EffectRunner};

use self::mock_gateway::MockGateway;

/// Find an available port for testing. The listener is dropped, so
/// connecting to the port afterwards is refused, which provokes real
/// transport errors.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Effect runner wired to the current tokio runtime and a recording sink.
/// Outcome actions arrive on the returned receiver in dispatch order.
pub fn runner_with(gateway: Arc<MockGateway>) -> (EffectRunner, Receiver<Action>) {
    let (tx, rx) = mpsc::channel();
    let sink: Arc<dyn ActionSink> = Arc::new(move |action: Action| {
        let _ = tx.send(action);
    });
    let runner = EffectRunner::new(gateway, tokio::runtime::Handle::current(), sink);
    (runner, rx)
}

/// Entitlement with a recognizable uuid, for payload assertions.
pub fn entitlement(n: u32) -> entdesk::entitlements::Entitlement {
    entdesk::entitlements::Entitlement {
        uuid: Some(format!("ent-{}", n)),
        course_uuid: Some(format!("course-{}", n)),
        mode: Some("verified".to_string()),
        ..Default::default()
    }
}
