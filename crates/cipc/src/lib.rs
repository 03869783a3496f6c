//! Compact intra-host IPC: typed method calls framed as length-delimited
//! binary messages.
//!
//! cipc is the wire contract between peers on one host. Values are
//! encoded type-directed (no runtime tags), multi-byte fields travel
//! little-endian, and each call is a single contiguous message built in
//! one allocation.
//!
//! # Crate Structure
//!
//! - [`wire`] — endianness core and the typed value codec
//! - [`msg`] — request/response framing and the message builder

/// Re-export wire codec types.
pub mod wire {
    pub use cipc_wire::*;
}

/// Re-export message framing types.
pub mod msg {
    pub use cipc_msg::*;
}
