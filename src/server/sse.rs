//! Server-sent events support for the live dashboard stream

use crate::server::routes::dashboard::build_snapshot;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use futures::stream::Stream;
use serde_json::json;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error};

/// Simple Event structure for SSE transmission
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Event type
    pub event: Option<String>,
    /// Event data
    pub data: String,
}

impl Event {
    /// Create a new empty event
    pub fn new() -> Self {
        Self {
            event: None,
            data: String::new(),
        }
    }

    /// Set the event type
    pub fn event(mut self, event: &str) -> Self {
        self.event = Some(event.to_string());
        self
    }

    /// Set the event data
    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    /// Convert event to bytes for SSE transmission
    pub fn to_bytes(&self) -> web::Bytes {
        let mut result = String::new();
        if let Some(event) = &self.event {
            result.push_str(&format!("event: {}\n", event));
        }
        result.push_str(&format!("data: {}\n\n", self.data));
        web::Bytes::from(result)
    }
}

/// Create a stream that pushes dashboard snapshots until the client
/// disconnects
///
/// The first snapshot is sent immediately; later snapshots follow the
/// interval from the settings store, re-read each cycle so updates take
/// effect on running streams.
pub fn snapshot_stream(state: AppState) -> impl Stream<Item = Result<web::Bytes>> {
    let (tx, rx) = mpsc::channel(100);

    tokio::spawn(async move {
        loop {
            // Racing the build against closed() drops an in-flight probe
            // round as soon as the client goes away.
            let snapshot = tokio::select! {
                _ = tx.closed() => {
                    debug!("Stream client disconnected");
                    break;
                }
                snapshot = build_snapshot(&state) => snapshot,
            };

            match snapshot {
                Ok(snapshot) => match serde_json::to_string(&snapshot) {
                    Ok(payload) => {
                        let event = Event::default().data(&payload);
                        if tx.send(Ok(event.to_bytes())).await.is_err() {
                            debug!("Stream client disconnected");
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to serialize dashboard snapshot: {}", e);
                        let error_event = Event::default()
                            .event("error")
                            .data(&json!({"error": e.to_string()}).to_string());
                        let _ = tx.send(Ok(error_event.to_bytes())).await;
                        break;
                    }
                },
                Err(e) => {
                    error!("Failed to build dashboard snapshot: {}", e);
                    let error_event = Event::default()
                        .event("error")
                        .data(&json!({"error": e.to_string()}).to_string());
                    let _ = tx.send(Ok(error_event.to_bytes())).await;
                    break;
                }
            }

            tokio::select! {
                _ = tx.closed() => break,
                _ = tokio::time::sleep(state.settings.stream_interval()) => {}
            }
        }
    });

    ReceiverStream::new(rx)
}

/// SSE endpoint streaming dashboard snapshots to the client
pub async fn dashboard_stream(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(snapshot_stream(state.get_ref().clone()))
}
