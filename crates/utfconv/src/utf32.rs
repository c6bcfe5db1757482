//! UTF-32: one code point per `u32` unit.

use crate::{
    code_point::{MAX_CODE_POINT, check_range},
    encoding::Decoded,
    error::{DecodeError, EncodeError},
};

/// Returns `code_point` as its single UTF-32 unit.
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] above U+10FFFF.
#[inline]
pub fn encode_utf32(code_point: u32) -> Result<u32, EncodeError> {
    check_range(code_point)
}

/// Decodes the unit at the start of `src`.
///
/// # Errors
///
/// [`DecodeError::Incomplete`] if `src` is empty and
/// [`DecodeError::OutOfRange`] for values above U+10FFFF.
#[inline]
pub fn decode_utf32(src: &[u32]) -> Result<Decoded, DecodeError> {
    match src.first() {
        None => Err(DecodeError::Incomplete {
            needed: 1,
            available: 0,
        }),
        Some(&unit) if unit > MAX_CODE_POINT => Err(DecodeError::OutOfRange(unit)),
        Some(&unit) => Ok(Decoded {
            code_point: unit,
            len: 1,
        }),
    }
}
