//! Registration code generation.
//!
//! Codes are the public identifier printed into a participant's QR pass:
//! `EVT-` followed by 8 uppercase hexadecimal characters taken from a v4
//! UUID. That is 32 bits of entropy per code; collisions are not checked
//! before insert, the unique constraint on the store is the backstop.

use uuid::Uuid;

/// Prefix shared by all registration codes.
pub const REG_CODE_PREFIX: &str = "EVT-";

/// Number of hex characters following the prefix.
const HEX_LEN: usize = 8;

/// Generate a fresh registration code, e.g. `EVT-3FA85F64`.
pub fn generate() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{REG_CODE_PREFIX}{}", hex[..HEX_LEN].to_uppercase())
}

/// Whether `code` matches the `EVT-XXXXXXXX` format.
pub fn is_valid_format(code: &str) -> bool {
    match code.strip_prefix(REG_CODE_PREFIX) {
        Some(rest) => {
            rest.len() == HEX_LEN
                && rest
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        }
        None => false,
    }
}
