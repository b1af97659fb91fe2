//! Bridges the event bus to connected WebSocket clients.

use std::sync::Arc;

use axum::extract::ws::Message;
use entryline_events::CheckinEvent;
use tokio::sync::broadcast;

use crate::ws::manager::WsManager;

/// Forward every check-in event to all connected clients as a JSON text
/// frame (`{"type":"attendanceUpdate","participant":{...},...}`).
///
/// Runs until the event bus sender is dropped. Delivery is best-effort: a
/// serialization failure is logged and the event skipped, and a lagged
/// receiver just keeps going; late viewers catch up via the roster query.
pub async fn run_broadcaster(
    ws_manager: Arc<WsManager>,
    mut receiver: broadcast::Receiver<CheckinEvent>,
) {
    loop {
        match receiver.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(text) => ws_manager.broadcast(Message::Text(text.into())).await,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize check-in event");
                }
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "WebSocket broadcaster lagged behind the event bus");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    tracing::debug!("Event bus closed, broadcaster stopping");
}
