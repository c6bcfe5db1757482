//! Converting a single sequence from one encoding form to another.
//!
//! Each step decodes one code point from the source form and encodes it into
//! the destination form. Failures of either half are returned to the caller.

use crate::{
    encoding::{Encoding, Utf8, Utf16},
    error::ConvertError,
};

/// Units consumed and produced by one conversion step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step {
    /// Source units consumed.
    pub read: usize,
    /// Destination units written.
    pub written: usize,
    /// The code point carried across.
    pub code_point: u32,
}

/// Converts the sequence at the start of `src` from `S` into `out` as `D`.
///
/// # Errors
///
/// [`ConvertError::Decode`] if the source sequence is malformed and
/// [`ConvertError::Encode`] if the value cannot be encoded as `D`.
#[inline]
pub fn convert_one<S: Encoding, D: Encoding>(
    src: &[S::Unit],
    out: &mut [D::Unit; 4],
) -> Result<Step, ConvertError> {
    let decoded = S::decode(src)?;
    let written = D::encode(decoded.code_point, out)?;
    Ok(Step {
        read: decoded.len,
        written,
        code_point: decoded.code_point,
    })
}

/// Converts one UTF-8 sequence into UTF-16.
///
/// # Errors
///
/// See [`convert_one`].
pub fn utf8_char_to_utf16(src: &[u8], out: &mut [u16; 2]) -> Result<Step, ConvertError> {
    let mut units = [0u16; 4];
    let step = convert_one::<Utf8, Utf16>(src, &mut units)?;
    out[..step.written].copy_from_slice(&units[..step.written]);
    Ok(step)
}

/// Converts one UTF-16 sequence into UTF-8.
///
/// # Errors
///
/// See [`convert_one`].
pub fn utf16_char_to_utf8(src: &[u16], out: &mut [u8; 4]) -> Result<Step, ConvertError> {
    convert_one::<Utf16, Utf8>(src, out)
}
