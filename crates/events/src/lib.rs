//! Entryline live-update infrastructure.
//!
//! Provides the in-process publish/subscribe hub the check-in service uses
//! to notify dashboard viewers:
//!
//! - [`EventBus`]: fan-out hub backed by `tokio::sync::broadcast`.
//! - [`CheckinEvent`]: the single event type on the wire
//!   (`attendanceUpdate`), carrying the full updated participant.
//!
//! Delivery is best-effort and at-most-once: there is no persistence or
//! replay, and a subscriber that connects late catches up via the roster
//! query instead.

pub mod bus;

pub use bus::{CheckinEvent, EventBus, ATTENDANCE_UPDATE};
