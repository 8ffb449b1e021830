//! Shared helpers for `dealdesk-infra` integration tests.
#![allow(dead_code)]

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use dealdesk_domain::IdentityConfig;
use dealdesk_infra::{ApiClient, HttpClient};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;
use wiremock::MockServer;

type EventRecord = (Level, String);

/// Events captured on the current thread.
#[derive(Clone, Default)]
pub struct CapturedEvents {
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl CapturedEvents {
    /// Messages of every ERROR event, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::ERROR)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct CaptureLayer {
    sink: CapturedEvents,
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.sink.events.lock().unwrap().push((*event.metadata().level(), visitor.message));
    }
}

/// Capture events for the rest of the test. `#[tokio::test]` runs on the
/// current thread, so client calls are seen by the guard's subscriber.
pub fn capture_events() -> (CapturedEvents, DefaultGuard) {
    let sink = CapturedEvents::default();
    let subscriber = Registry::default().with(CaptureLayer { sink: sink.clone() });
    let guard = tracing::subscriber::set_default(subscriber);
    (sink, guard)
}

pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(HttpClient::new().expect("http client"), server.uri())
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_api_client() -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    ApiClient::new(HttpClient::new().expect("http client"), format!("http://{addr}"))
}

pub fn identity() -> IdentityConfig {
    IdentityConfig {
        officer_id: "officer@bank.test".to_string(),
        assigned_by: "lead@bank.test".to_string(),
        employee_id: "E-100".to_string(),
        email: "user@bank.test".to_string(),
    }
}

pub fn assignment_json(assignment_id: &str, deal_id: &str, priority: &str) -> serde_json::Value {
    serde_json::json!({
        "assignmentId": assignment_id,
        "dealId": deal_id,
        "assigneeId": "officer@bank.test",
        "assignmentStatus": "Assigned",
        "priority": priority,
        "assignedDateTime": "2025-01-15T09:30:00"
    })
}
