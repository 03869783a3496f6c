//! Request/response framing for CIPC method calls.
//!
//! A [`Msg`] is the length-delimited envelope carried between peers: a
//! one-byte preamble, a type tag, a call id, and — for requests — the
//! method and object ids, followed by the codec-encoded payload. Messages
//! are built in one exact allocation and are immutable once built.
//!
//! ```text
//! ┌──────────┬──────┬─────────┬───────────┬───────────┬──────────────┐
//! │ Preamble │ Type │ Call ID │ Method ID │ Object ID │ Arg payload   │
//! │ 0x43     │ 1/2  │ (2B LE) │ (4B LE)  │ (8B LE)  │ (codec bytes) │
//! └──────────┴──────┴─────────┴───────────┴───────────┴──────────────┘
//!                               └── requests only ──┘
//! ```

pub mod builder;
pub mod error;
pub mod msg;

pub use builder::ArgPack;
pub use error::{MsgError, Result};
pub use msg::{
    CallId, MethodId, Msg, MsgType, ObjectId, PREAMBLE, REQUEST_HEADER_SIZE,
    RESPONSE_HEADER_SIZE, SERVICE_OBJECT,
};
