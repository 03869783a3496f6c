/// Size of the length prefix carried by every variable-length value
/// (strings, sequences, maps): a 4-byte little-endian unsigned count.
pub const LEN_PREFIX_SIZE: usize = 4;

/// Wire codec for a single value type.
///
/// The three operations form the codec contract consumed by the message
/// builder and the dispatcher's argument decoders. Dispatch is static: the
/// implementation is selected by the value's compile-time type, and the
/// wire carries no type information of its own.
pub trait Codec {
    /// Exact number of bytes [`serialize`](Codec::serialize) will write on
    /// success. The builder uses this to allocate each message exactly once.
    fn serialized_size(&self) -> usize;

    /// Encode into the start of `buf`.
    ///
    /// Returns the number of bytes written, or `0` without writing if `buf`
    /// cannot hold the full encoding. A buffer of exactly
    /// `serialized_size()` bytes always succeeds.
    fn serialize(&self, buf: &mut [u8]) -> usize;

    /// Decode from the start of `buf`, replacing `self`.
    ///
    /// Returns the number of bytes consumed, or `0` on short or malformed
    /// input. Container implementations clear the destination first and may
    /// leave it partially rebuilt on failure — a `0` return means the
    /// output must not be used.
    fn deserialize(&mut self, buf: &[u8]) -> usize;
}
