//! In-process event bus backed by a `tokio::sync::broadcast` channel.

use entryline_core::Timestamp;
use entryline_db::models::participant::ParticipantWithAttendance;
use serde::Serialize;
use tokio::sync::broadcast;

/// Wire name of the single event type carried on the bus.
pub const ATTENDANCE_UPDATE: &str = "attendanceUpdate";

// ---------------------------------------------------------------------------
// CheckinEvent
// ---------------------------------------------------------------------------

/// A successful first-time check-in, broadcast to live dashboard viewers.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinEvent {
    /// Event discriminator; always [`ATTENDANCE_UPDATE`].
    #[serde(rename = "type")]
    pub event_type: &'static str,
    /// The full updated participant, attendance included.
    pub participant: ParticipantWithAttendance,
    /// When the event was published (UTC).
    pub timestamp: Timestamp,
}

impl CheckinEvent {
    pub fn new(participant: ParticipantWithAttendance) -> Self {
        Self {
            event_type: ATTENDANCE_UPDATE,
            participant,
            timestamp: chrono::Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers independently
/// receive every published [`CheckinEvent`]. Shared via `Arc<EventBus>`.
pub struct EventBus {
    sender: broadcast::Sender<CheckinEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Fire-and-forget: with zero receivers the event is dropped. Check-ins
    /// must never fail because nobody is watching.
    pub fn publish(&self, event: CheckinEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<CheckinEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
