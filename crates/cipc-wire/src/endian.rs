//! Host/little-endian integer normalization.
//!
//! The wire is little-endian. On little-endian hosts every conversion here
//! is a reinterpretation; on big-endian hosts the unsigned representation
//! is byte-swapped. Signed values pass through their two's-complement
//! unsigned alias, so the bit pattern is preserved in both directions.

/// Reverse the byte order of a 16-bit value.
#[inline]
pub fn bswap16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Reverse the byte order of a 32-bit value.
#[inline]
pub fn bswap32(x: u32) -> u32 {
    x.swap_bytes()
}

/// Reverse the byte order of a 64-bit value.
#[inline]
pub fn bswap64(x: u64) -> u64 {
    x.swap_bytes()
}

/// Fixed-width integer with a little-endian wire representation.
///
/// `le_to_host(host_to_le(v)) == v` for every representable `v`.
pub trait HostInt: Copy {
    /// Unsigned integer of the same width.
    type Unsigned: Copy;

    /// Host-order value to its little-endian unsigned bit pattern.
    fn host_to_le(self) -> Self::Unsigned;

    /// Little-endian unsigned bit pattern back to a host-order value.
    fn le_to_host(le: Self::Unsigned) -> Self;
}

macro_rules! host_int {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl HostInt for $t {
            type Unsigned = $u;

            #[inline]
            fn host_to_le(self) -> $u {
                (self as $u).to_le()
            }

            #[inline]
            fn le_to_host(le: $u) -> $t {
                <$u>::from_le(le) as $t
            }
        }
    )*};
}

host_int! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}
