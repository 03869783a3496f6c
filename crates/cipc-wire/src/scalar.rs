//! Fixed-width scalar codecs: integers, booleans, floats.

use crate::codec::Codec;
use crate::endian::HostInt;

macro_rules! int_codec {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Codec for $t {
            fn serialized_size(&self) -> usize {
                std::mem::size_of::<$t>()
            }

            fn serialize(&self, buf: &mut [u8]) -> usize {
                const WIDTH: usize = std::mem::size_of::<$t>();
                if buf.len() < WIDTH {
                    return 0;
                }
                buf[..WIDTH].copy_from_slice(&self.host_to_le().to_ne_bytes());
                WIDTH
            }

            fn deserialize(&mut self, buf: &[u8]) -> usize {
                const WIDTH: usize = std::mem::size_of::<$t>();
                if buf.len() < WIDTH {
                    return 0;
                }
                let mut raw = [0u8; WIDTH];
                raw.copy_from_slice(&buf[..WIDTH]);
                *self = <$t as HostInt>::le_to_host(<$u>::from_ne_bytes(raw));
                WIDTH
            }
        }
    )*};
}

int_codec! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}

impl Codec for bool {
    fn serialized_size(&self) -> usize {
        1
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        (*self as u8).serialize(buf)
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        let mut raw = 0u8;
        let n = raw.deserialize(buf);
        if n != 0 {
            // Any non-zero byte decodes as true.
            *self = raw != 0;
        }
        n
    }
}

// Floats travel as the little-endian bit pattern of their unsigned alias,
// so the wire bytes are host-independent.

impl Codec for f32 {
    fn serialized_size(&self) -> usize {
        4
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        self.to_bits().serialize(buf)
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        let mut bits = 0u32;
        let n = bits.deserialize(buf);
        if n != 0 {
            *self = f32::from_bits(bits);
        }
        n
    }
}

impl Codec for f64 {
    fn serialized_size(&self) -> usize {
        8
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        self.to_bits().serialize(buf)
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        let mut bits = 0u64;
        let n = bits.deserialize(buf);
        if n != 0 {
            *self = f64::from_bits(bits);
        }
        n
    }
}
