//! One-shot message construction and typed payload decode.
//!
//! The builder computes the payload size from the codec's size oracle,
//! allocates the message buffer exactly once, writes the header, then
//! streams the arguments in declared order. There is no growable argument
//! buffer and no incremental write-after-header path.

use bytes::{BufMut, BytesMut};
use cipc_wire::Codec;

use crate::msg::{
    CallId, MethodId, Msg, MsgType, ObjectId, PREAMBLE, REQUEST_HEADER_SIZE,
    RESPONSE_HEADER_SIZE,
};

/// A heterogeneous list of request arguments, encoded in declared order.
///
/// Implemented for tuples of codec types (and the empty pack `()`). The
/// tuple is the compile-time argument list a method's stub declares; the
/// wire carries no per-argument framing, so encode and decode must agree
/// on the same tuple type through the method id.
pub trait ArgPack {
    /// Total encoded size of the pack.
    fn serialized_size(&self) -> usize;

    /// Encode each argument in declared order into `buf`. Returns the
    /// bytes written, or `0` if `buf` is too small. The builder pre-sizes
    /// its buffer from [`serialized_size`](ArgPack::serialized_size), so
    /// streaming into a message cannot fail.
    fn serialize(&self, buf: &mut [u8]) -> usize;

    /// Decode the pack in declared order from the start of `buf`.
    /// Returns the values and the bytes consumed, or `None` if any
    /// element fails to decode.
    fn deserialize(buf: &[u8]) -> Option<(Self, usize)>
    where
        Self: Sized;
}

impl ArgPack for () {
    fn serialized_size(&self) -> usize {
        0
    }

    fn serialize(&self, _buf: &mut [u8]) -> usize {
        0
    }

    fn deserialize(_buf: &[u8]) -> Option<((), usize)> {
        Some(((), 0))
    }
}

macro_rules! arg_pack {
    ($($t:ident),+) => {
        impl<$($t: Codec + Default),+> ArgPack for ($($t,)+) {
            fn serialized_size(&self) -> usize {
                #[allow(non_snake_case)]
                let ($($t,)+) = self;
                0 $(+ $t.serialized_size())+
            }

            fn serialize(&self, buf: &mut [u8]) -> usize {
                #[allow(non_snake_case)]
                let ($($t,)+) = self;
                let mut written = 0;
                $(
                    let n = $t.serialize(&mut buf[written..]);
                    if n == 0 {
                        return 0;
                    }
                    written += n;
                )+
                written
            }

            #[allow(non_snake_case)]
            fn deserialize(buf: &[u8]) -> Option<(Self, usize)> {
                let mut read = 0;
                $(
                    let mut $t = <$t>::default();
                    let n = $t.deserialize(&buf[read..]);
                    if n == 0 {
                        return None;
                    }
                    read += n;
                )+
                Some((($($t,)+), read))
            }
        }
    };
}

arg_pack!(A);
arg_pack!(A, B);
arg_pack!(A, B, C);
arg_pack!(A, B, C, D);
arg_pack!(A, B, C, D, E);
arg_pack!(A, B, C, D, E, F);
arg_pack!(A, B, C, D, E, F, G);
arg_pack!(A, B, C, D, E, F, G, H);

impl Msg {
    /// Build a request in a single allocation.
    ///
    /// The payload region is sized from the pack's size oracle up front;
    /// argument streaming is infallible by construction.
    pub fn request<A: ArgPack>(
        call_id: CallId,
        method_id: MethodId,
        object_id: ObjectId,
        args: &A,
    ) -> Msg {
        let total = REQUEST_HEADER_SIZE + args.serialized_size();
        let mut buf = BytesMut::with_capacity(total);
        buf.put_u8(PREAMBLE);
        buf.put_u8(MsgType::Request as u8);
        buf.put_u16_le(call_id);
        buf.put_u32_le(method_id);
        buf.put_u64_le(object_id);
        buf.resize(total, 0);
        let written = args.serialize(&mut buf[REQUEST_HEADER_SIZE..]);
        debug_assert_eq!(REQUEST_HEADER_SIZE + written, total);
        Msg::from_wire(buf.freeze())
    }

    /// Build a response carrying a single return value.
    pub fn response<R: Codec>(call_id: CallId, rv: &R) -> Msg {
        let total = RESPONSE_HEADER_SIZE + rv.serialized_size();
        let mut buf = BytesMut::with_capacity(total);
        buf.put_u8(PREAMBLE);
        buf.put_u8(MsgType::Response as u8);
        buf.put_u16_le(call_id);
        buf.resize(total, 0);
        let written = rv.serialize(&mut buf[RESPONSE_HEADER_SIZE..]);
        debug_assert_eq!(RESPONSE_HEADER_SIZE + written, total);
        Msg::from_wire(buf.freeze())
    }

    /// Decode the argument payload as the method's declared pack type.
    ///
    /// The payload must be consumed exactly; leftover bytes mean the
    /// declared types do not match what the sender encoded, and the
    /// arguments are rejected rather than silently truncated.
    pub fn decode_args<A: ArgPack>(&self) -> Option<A> {
        let payload = self.args();
        let (args, read) = A::deserialize(payload)?;
        (read == payload.len()).then_some(args)
    }

    /// Decode the return-value payload as the declared type.
    pub fn decode_return_value<R: Codec + Default>(&self) -> Option<R> {
        let payload = self.return_value();
        let mut rv = R::default();
        let read = rv.deserialize(payload);
        (read != 0 && read == payload.len()).then_some(rv)
    }
}
