//! The seam between the scalar codecs and the buffer-level loop.
//!
//! Each encoding form is a zero-sized marker implementing [`Encoding`]. The
//! transcoder is generic over a source and a destination marker, so adding a
//! pair of forms never means writing another loop.

use crate::{
    error::{DecodeError, EncodeError},
    utf8, utf16, utf32,
};

/// One successfully decoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded value.
    pub code_point: u32,
    /// Source units the sequence occupied.
    pub len: usize,
}

/// An encoding form operating on native code units.
pub trait Encoding {
    /// The code unit: `u8`, `u16` or `u32`.
    type Unit: Copy + Eq + Default + core::fmt::Debug;

    /// Human readable name, used in log output.
    const NAME: &'static str;

    /// The zero unit that ends a terminated buffer.
    const TERMINATOR: Self::Unit;

    /// Most units a single code point can occupy.
    const MAX_UNITS: usize;

    /// Decodes the sequence at the start of `src`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for malformed input.
    fn decode(src: &[Self::Unit]) -> Result<Decoded, DecodeError>;

    /// Encodes `code_point` into the front of `out`, returning the number of
    /// units written.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::OutOfRange`] above U+10FFFF.
    fn encode(code_point: u32, out: &mut [Self::Unit; 4]) -> Result<usize, EncodeError>;
}

/// UTF-8 over `u8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// UTF-16 over native-endian `u16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

/// UTF-32 over native-endian `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

impl Encoding for Utf8 {
    type Unit = u8;
    const NAME: &'static str = "UTF-8";
    const TERMINATOR: u8 = 0;
    const MAX_UNITS: usize = 4;

    #[inline]
    fn decode(src: &[u8]) -> Result<Decoded, DecodeError> {
        utf8::decode_utf8(src)
    }

    #[inline]
    fn encode(code_point: u32, out: &mut [u8; 4]) -> Result<usize, EncodeError> {
        utf8::encode_utf8(code_point, out)
    }
}

impl Encoding for Utf16 {
    type Unit = u16;
    const NAME: &'static str = "UTF-16";
    const TERMINATOR: u16 = 0;
    const MAX_UNITS: usize = 2;

    #[inline]
    fn decode(src: &[u16]) -> Result<Decoded, DecodeError> {
        let decoded = utf16::decode_utf16(src)?;
        if let utf16::Utf16Decoded::Lone(unit) = decoded {
            log::trace!("passing lone surrogate 0x{unit:04X} through before terminator");
        }
        Ok(Decoded {
            code_point: decoded.code_point(),
            len: decoded.units(),
        })
    }

    #[inline]
    fn encode(code_point: u32, out: &mut [u16; 4]) -> Result<usize, EncodeError> {
        let mut units = [0u16; 2];
        let n = utf16::encode_utf16(code_point, &mut units)?;
        out[..n].copy_from_slice(&units[..n]);
        Ok(n)
    }
}

impl Encoding for Utf32 {
    type Unit = u32;
    const NAME: &'static str = "UTF-32";
    const TERMINATOR: u32 = 0;
    const MAX_UNITS: usize = 1;

    #[inline]
    fn decode(src: &[u32]) -> Result<Decoded, DecodeError> {
        utf32::decode_utf32(src)
    }

    #[inline]
    fn encode(code_point: u32, out: &mut [u32; 4]) -> Result<usize, EncodeError> {
        out[0] = utf32::encode_utf32(code_point)?;
        Ok(1)
    }
}
