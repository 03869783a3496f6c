/// Reasons a byte buffer fails to parse as a message.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MsgError {
    /// The buffer is shorter than the fixed header it must carry.
    #[error("message too short ({len} bytes, need {need})")]
    ShortBuffer { len: usize, need: usize },

    /// The first byte is not the preamble sentinel.
    #[error("invalid preamble byte 0x{0:02X} (expected 0x43 'C')")]
    BadPreamble(u8),

    /// The type tag is neither Request (1) nor Response (2).
    #[error("invalid message type tag {0}")]
    BadTypeTag(u8),
}

pub type Result<T> = std::result::Result<T, MsgError>;
