//! Binary frame for [`MayBeValue`]
//!
//! A frame always has the same shape, whatever the state of the container:
//!
//! ```text
//! version (1 byte) | present (1 byte) | marker (1 byte) [| length (4 bytes) | payload]
//! ```
//!
//! The presence flag is `0` or `1`. The marker is [`NULL_MARKER`] if the
//! value slot is null and [`VALUE_MARKER`] if it holds an element, in which
//! case a big-endian `u32` length and the [`Element`] encoding follow.
//!
//! An empty container writes a null slot, exactly like a present null one,
//! only the flag differs. A frame with the flag unset and an element in the
//! slot is rejected with [`DecodeError::Malformed`].

use std::io::{Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use log::{debug, trace};

use crate::error::DecodeError;
use crate::MayBeValue;

mod element;


pub use element::Element;

use element::ensure;

/// Version written as the first byte of every frame
pub const VERSION: u8 = 1;

/// Marker for a value slot holding null
pub const NULL_MARKER: u8 = 0x70;

/// Marker for a value slot holding an element
pub const VALUE_MARKER: u8 = 0x73;

const HEADER_LEN: usize = 3;
const LENGTH_LEN: usize = 4;

/// The fixed-size start of a frame
struct Header {
    present: bool,
    has_value: bool,
}

impl Header {
    fn new<T>(value: &MayBeValue<T>) -> Self {
        Self {
            present: value.is_present(),
            has_value: matches!(value, MayBeValue::Value(_)),
        }
    }

    fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let marker = if self.has_value {
            VALUE_MARKER
        } else {
            NULL_MARKER
        };
        [VERSION, u8::from(self.present), marker]
    }

    fn parse(bytes: [u8; HEADER_LEN]) -> Result<Self, DecodeError> {
        let [version, flag, marker] = bytes;

        if version != VERSION {
            debug!("rejecting frame with version {version}");
            return Err(DecodeError::UnsupportedVersion(version));
        }

        let present = match flag {
            0 => false,
            1 => true,
            b => {
                debug!("rejecting frame with presence flag {b:#04x}");
                return Err(DecodeError::InvalidFlag(b));
            }
        };

        let has_value = match marker {
            NULL_MARKER => false,
            VALUE_MARKER => true,
            b => {
                debug!("rejecting frame with slot marker {b:#04x}");
                return Err(DecodeError::InvalidMarker(b));
            }
        };

        Ok(Self { present, has_value })
    }
}

impl<T: Element> MayBeValue<T> {
    /// Encode this container into a new frame.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode_to(&mut buf);
        buf.freeze()
    }

    /// Append the frame for this container to `buf`.
    ///
    /// This function will panic if the element encodes to more than
    /// `u32::MAX` bytes.
    pub fn encode_to<B: BufMut>(&self, buf: &mut B) {
        let header = Header::new(self);
        trace!(
            "encoding frame: present={}, has_value={}",
            header.present,
            header.has_value
        );
        buf.put_slice(&header.to_bytes());

        if let MayBeValue::Value(x) = self {
            let mut slot = BytesMut::new();
            x.write_element(&mut slot);
            buf.put_u32(slot_len(slot.len()));
            buf.put_slice(&slot);
        }
    }

    /// Write the frame for this container to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.encode())
    }

    /// Decode one frame from the front of `buf`.
    ///
    /// Bytes following the frame are left in `buf`.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        ensure(buf, HEADER_LEN)?;
        let mut header = [0; HEADER_LEN];
        buf.copy_to_slice(&mut header);
        let header = Header::parse(header)?;

        // The slot is read even if the flag is unset, so that a frame
        // pairing an unset flag with a value is caught below.
        let value = if header.has_value {
            ensure(buf, LENGTH_LEN)?;
            let len = buf.get_u32() as usize;
            ensure(buf, len)?;
            let mut slot = buf.copy_to_bytes(len);
            Some(read_slot(&mut slot)?)
        } else {
            None
        };

        Self::assemble(header.present, value)
    }

    /// Read exactly one frame from `reader`.
    ///
    /// I/O errors of the reader are returned as [`DecodeError::Io`]. A
    /// stream that ends inside the frame, wherever that happens, is an
    /// [`std::io::ErrorKind::UnexpectedEof`] error.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, DecodeError> {
        let mut header = [0; HEADER_LEN];
        reader.read_exact(&mut header)?;
        let header = Header::parse(header)?;

        let value = if header.has_value {
            let mut len = [0; LENGTH_LEN];
            reader.read_exact(&mut len)?;
            let len = u32::from_be_bytes(len) as usize;

            // Grow the buffer while reading instead of trusting the length
            // up front.
            let mut slot = Vec::new();
            reader.take(len as u64).read_to_end(&mut slot)?;
            if slot.len() < len {
                debug!(
                    "stream ended after {} of {len} slot bytes",
                    slot.len()
                );
                return Err(std::io::Error::from(
                    std::io::ErrorKind::UnexpectedEof,
                )
                .into());
            }
            Some(read_slot(&mut Bytes::from(slot))?)
        } else {
            None
        };

        Self::assemble(header.present, value)
    }

    fn assemble(
        present: bool,
        value: Option<T>,
    ) -> Result<Self, DecodeError> {
        let decoded = match (present, value) {
            (true, value) => Self::of(value),
            (false, None) => Self::Empty,
            (false, Some(_)) => {
                debug!(
                    "rejecting frame: value slot holds a value, \
                     but the presence flag is unset"
                );
                return Err(DecodeError::Malformed);
            }
        };
        trace!(
            "decoded frame: present={}, null={}",
            decoded.is_present(),
            decoded.is_null()
        );
        Ok(decoded)
    }
}

/// The length prefix for a value slot of `len` bytes
///
/// Panics if the slot does not fit the `u32` prefix.
fn slot_len(len: usize) -> u32 {
    assert!(
        len <= u32::MAX as usize,
        "element of {len} bytes exceeds the u32::MAX byte limit of a value slot"
    );
    len as u32
}

fn read_slot<T: Element>(slot: &mut Bytes) -> Result<T, DecodeError> {
    let value = T::read_element(slot)?;
    if slot.has_remaining() {
        debug!(
            "rejecting value slot with {} trailing bytes",
            slot.remaining()
        );
        return Err(DecodeError::TrailingBytes(slot.remaining()));
    }
    Ok(value)
}
