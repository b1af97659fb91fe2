//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Field names serialize in the wire casing the QR/dashboard contract uses
//! (`regId`, `checkedInAt`).

pub mod participant;
