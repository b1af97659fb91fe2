//! Request handlers, one module per service area.

pub mod checkin;
pub mod export;
pub mod registration;
pub mod roster;
