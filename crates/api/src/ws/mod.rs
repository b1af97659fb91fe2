//! WebSocket infrastructure for the live update channel.
//!
//! Provides connection management, heartbeat monitoring, the HTTP upgrade
//! handler used by Axum routes, and the broadcaster task that bridges the
//! event bus to every connected dashboard.

mod broadcaster;
mod handler;
mod heartbeat;
pub mod manager;

pub use broadcaster::run_broadcaster;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
