//! Entryline domain core.
//!
//! Pure domain logic with no I/O: the error taxonomy, registration code
//! generation, the QR payload codec, and the roster reducer used by live
//! dashboard clients.

pub mod error;
pub mod qr;
pub mod regcode;
pub mod roster;

pub use error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
