//! Error types surfaced by the execution core.

use thiserror::Error;

/// Errors that can occur while executing instructions.
///
/// Decoding is deterministic, so none of these are worth retrying: stepping
/// again over the same byte reproduces the same failure. The host decides
/// whether to halt, skip, or patch memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched opcode byte has no entry in the instruction table.
    ///
    /// PC has already advanced past the opcode; no register, flag or memory
    /// location was touched.
    #[error("unsupported opcode 0x{0:02X}")]
    UnsupportedOpcode(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_opcode_as_hex() {
        let err = ExecutionError::UnsupportedOpcode(0x02);
        assert_eq!(err.to_string(), "unsupported opcode 0x02");
    }
}
