use bytes::Bytes;
use tracing::debug;

use crate::error::{MsgError, Result};

/// Preamble sentinel: the first byte of every message ('C').
pub const PREAMBLE: u8 = 0x43;

/// Fixed header size of a request: preamble + type + call id + method id
/// + object id.
pub const REQUEST_HEADER_SIZE: usize = 16;

/// Fixed header size of a response: preamble + type + call id.
pub const RESPONSE_HEADER_SIZE: usize = 4;

/// Correlation token pairing a response with its originating request on
/// one channel.
pub type CallId = u16;

/// Identifier of a method within the receiver's interface. Uniquely
/// specifies the argument type list.
pub type MethodId = u32;

/// Identifier of the receiving object.
pub type ObjectId = u64;

/// Object id addressing the implicit service object.
pub const SERVICE_OBJECT: ObjectId = 0;

const TYPE_OFFSET: usize = 1;
const CALL_ID_OFFSET: usize = 2;
const METHOD_ID_OFFSET: usize = 4;
const OBJECT_ID_OFFSET: usize = 8;

/// Message type tag, the second byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgType {
    Request = 1,
    Response = 2,
}

/// A framed message: an owned, contiguous byte buffer.
///
/// Messages are built in one shot by [`Msg::request`] / [`Msg::response`]
/// or validated out of transport bytes by [`Msg::parse`]; either way the
/// header invariants hold for the lifetime of the value. The backing
/// [`Bytes`] is immutable and cheap to clone, so a message can be handed
/// across threads or read concurrently without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    data: Bytes,
}

impl Msg {
    /// Validate a received buffer as a message.
    ///
    /// Checks the preamble, the type tag, and that the buffer covers the
    /// variant's fixed header. The argument layout beyond the header is
    /// not self-describing — decoding it requires the method's declared
    /// types.
    pub fn parse(data: impl Into<Bytes>) -> Result<Msg> {
        let data = data.into();
        match Self::validate(&data) {
            Ok(()) => Ok(Msg { data }),
            Err(err) => {
                debug!(len = data.len(), %err, "rejected malformed message");
                Err(err)
            }
        }
    }

    fn validate(data: &[u8]) -> Result<()> {
        if data.len() < RESPONSE_HEADER_SIZE {
            return Err(MsgError::ShortBuffer {
                len: data.len(),
                need: RESPONSE_HEADER_SIZE,
            });
        }
        if data[0] != PREAMBLE {
            return Err(MsgError::BadPreamble(data[0]));
        }
        let msg_type = match data[TYPE_OFFSET] {
            1 => MsgType::Request,
            2 => MsgType::Response,
            other => return Err(MsgError::BadTypeTag(other)),
        };
        if msg_type == MsgType::Request && data.len() < REQUEST_HEADER_SIZE {
            return Err(MsgError::ShortBuffer {
                len: data.len(),
                need: REQUEST_HEADER_SIZE,
            });
        }
        Ok(())
    }

    /// The preamble byte.
    pub fn preamble(&self) -> u8 {
        self.data[0]
    }

    /// The message variant.
    pub fn msg_type(&self) -> MsgType {
        // The tag was validated at construction.
        match self.data[TYPE_OFFSET] {
            1 => MsgType::Request,
            _ => MsgType::Response,
        }
    }

    /// The call id correlating a request with its response.
    pub fn call_id(&self) -> CallId {
        u16::from_le_bytes([
            self.data[CALL_ID_OFFSET],
            self.data[CALL_ID_OFFSET + 1],
        ])
    }

    /// The method id. Requests only.
    pub fn method_id(&self) -> MethodId {
        debug_assert_eq!(self.msg_type(), MsgType::Request);
        u32::from_le_bytes(
            self.data[METHOD_ID_OFFSET..OBJECT_ID_OFFSET]
                .try_into()
                .unwrap(),
        )
    }

    /// The object id. Requests only; [`SERVICE_OBJECT`] addresses the
    /// implicit service object.
    pub fn object_id(&self) -> ObjectId {
        debug_assert_eq!(self.msg_type(), MsgType::Request);
        u64::from_le_bytes(
            self.data[OBJECT_ID_OFFSET..REQUEST_HEADER_SIZE]
                .try_into()
                .unwrap(),
        )
    }

    /// The argument payload region. Requests only.
    pub fn args(&self) -> &[u8] {
        debug_assert_eq!(self.msg_type(), MsgType::Request);
        &self.data[REQUEST_HEADER_SIZE..]
    }

    /// The return-value payload region. Responses only.
    pub fn return_value(&self) -> &[u8] {
        debug_assert_eq!(self.msg_type(), MsgType::Response);
        &self.data[RESPONSE_HEADER_SIZE..]
    }

    /// The full wire bytes, for the transport layer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the message, returning the wire bytes.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Wrap bytes the builder produced. Callers must have written a valid
    /// header.
    pub(crate) fn from_wire(data: Bytes) -> Msg {
        debug_assert!(Self::validate(&data).is_ok());
        Msg { data }
    }
}
