use bytes::{Buf, BufMut, Bytes};

use crate::error::DecodeError;
use crate::MayBeValue;

/// A type that can be stored in the value slot of a frame
///
/// The slot is length-delimited by the frame, so an element does not need
/// to encode its own length: [`Element::read_element`] receives a buffer
/// holding exactly the bytes that [`Element::write_element`] produced and
/// must consume all of them.
pub trait Element: Sized {
    /// Write the encoding of `self` to `buf`.
    fn write_element<B: BufMut>(&self, buf: &mut B);

    /// Read an element from `buf`, which holds exactly one value slot.
    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError>;
}

/// Check that `buf` holds at least `needed` more bytes.
pub(crate) fn ensure<B: Buf>(
    buf: &B,
    needed: usize,
) -> Result<(), DecodeError> {
    let remaining = buf.remaining();
    if remaining < needed {
        return Err(DecodeError::UnexpectedEnd { needed, remaining });
    }
    Ok(())
}

macro_rules! fixed_width_element {
    ($($t:ty => $put:ident, $get:ident;)*) => {
        $(
            impl Element for $t {
                fn write_element<B: BufMut>(&self, buf: &mut B) {
                    buf.$put(*self)
                }

                fn read_element<B: Buf>(
                    buf: &mut B,
                ) -> Result<Self, DecodeError> {
                    ensure(buf, std::mem::size_of::<$t>())?;
                    Ok(buf.$get())
                }
            }
        )*
    };
}

// All multi-byte numbers are big-endian.
fixed_width_element! {
    u8 => put_u8, get_u8;
    u16 => put_u16, get_u16;
    u32 => put_u32, get_u32;
    u64 => put_u64, get_u64;
    i8 => put_i8, get_i8;
    i16 => put_i16, get_i16;
    i32 => put_i32, get_i32;
    i64 => put_i64, get_i64;
    f32 => put_f32, get_f32;
    f64 => put_f64, get_f64;
}

impl Element for bool {
    fn write_element<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(u8::from(*self))
    }

    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        match u8::read_element(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(DecodeError::invalid_element(format!(
                "expected a boolean, found {b:#04x}"
            ))),
        }
    }
}

impl Element for String {
    fn write_element<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self.as_bytes())
    }

    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        let bytes = Vec::<u8>::read_element(buf)?;
        String::from_utf8(bytes).map_err(DecodeError::invalid_element)
    }
}

impl Element for Vec<u8> {
    fn write_element<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self)
    }

    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        let mut out = vec![0; buf.remaining()];
        buf.copy_to_slice(&mut out);
        Ok(out)
    }
}

impl Element for Bytes {
    fn write_element<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self)
    }

    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        Ok(buf.copy_to_bytes(buf.remaining()))
    }
}

/// Containers nest by storing the whole inner frame in the value slot.
impl<T: Element> Element for MayBeValue<T> {
    fn write_element<B: BufMut>(&self, buf: &mut B) {
        self.encode_to(buf)
    }

    fn read_element<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        Self::decode(buf)
    }
}
