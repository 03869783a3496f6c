//! Typed wire-format codec for CIPC messages.
//!
//! Every supported value type carries a [`Codec`]: the exact encoded size,
//! encode into a caller-provided buffer, and decode back out. Multi-byte
//! integers are little-endian on the wire; variable-length values carry a
//! 4-byte little-endian count. There is no runtime type tag in the payload —
//! both sides agree on types through the method id at the framing layer.
//!
//! The codec is stateless and performs no I/O. Encode and decode report
//! progress as a byte count; `0` means the buffer was too small (or the
//! bytes were malformed) and the output must not be used.

pub mod codec;
pub mod composite;
pub mod endian;
pub mod scalar;

pub use codec::{Codec, LEN_PREFIX_SIZE};
pub use endian::{bswap16, bswap32, bswap64, HostInt};
