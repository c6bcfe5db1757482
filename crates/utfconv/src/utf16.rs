//! UTF-16: one code point as one code unit or a surrogate pair.
//!
//! Units are native `u16` values; byte order is the caller's concern.

use crate::{code_point::check_range, error::DecodeError, error::EncodeError};

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Whether `unit` is a leading (high) surrogate.
#[inline]
#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

/// Whether `unit` is a trailing (low) surrogate.
#[inline]
#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// Whether `unit` is either kind of surrogate.
#[inline]
#[must_use]
pub fn is_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDFFF)
}

/// The shape of a decoded UTF-16 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Decoded {
    /// A unit outside the surrogate range, which is its own code point.
    Single(u16),
    /// A high surrogate followed by a low surrogate.
    Pair(u32),
    /// A surrogate immediately followed by the terminator, passed through
    /// unchanged.
    Lone(u16),
}

impl Utf16Decoded {
    /// The decoded value.
    #[must_use]
    pub fn code_point(self) -> u32 {
        match self {
            Utf16Decoded::Single(unit) | Utf16Decoded::Lone(unit) => u32::from(unit),
            Utf16Decoded::Pair(code_point) => code_point,
        }
    }

    /// Units consumed from the input.
    #[must_use]
    pub fn units(self) -> usize {
        match self {
            Utf16Decoded::Single(_) | Utf16Decoded::Lone(_) => 1,
            Utf16Decoded::Pair(_) => 2,
        }
    }
}

/// Encodes `code_point` into `out`, returning the number of units written.
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] above U+10FFFF; `out` is left untouched.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_utf16(code_point: u32, out: &mut [u16; 2]) -> Result<usize, EncodeError> {
    let v = check_range(code_point)?;
    if v < 0x1_0000 {
        out[0] = v as u16;
        return Ok(1);
    }
    let offset = v - 0x1_0000;
    out[0] = (offset / 0x400 + 0xD800) as u16;
    out[1] = (offset % 0x400 + 0xDC00) as u16;
    Ok(2)
}

/// Decodes the sequence at the start of `src`, reading at most two units.
///
/// A surrogate followed by `0` is returned as [`Utf16Decoded::Lone`].
///
/// # Errors
///
/// - [`DecodeError::Incomplete`] if `src` is empty, or ends right after a
///   surrogate so the unit deciding its meaning is missing.
/// - [`DecodeError::UnpairedSurrogate`] if a high surrogate is followed by
///   anything but a low surrogate or the terminator, or a low surrogate is
///   followed by anything but the terminator.
pub fn decode_utf16(src: &[u16]) -> Result<Utf16Decoded, DecodeError> {
    let Some(&unit) = src.first() else {
        return Err(DecodeError::Incomplete {
            needed: 1,
            available: 0,
        });
    };
    if !is_surrogate(unit) {
        return Ok(Utf16Decoded::Single(unit));
    }

    let Some(&next) = src.get(1) else {
        return Err(DecodeError::Incomplete {
            needed: 2,
            available: 1,
        });
    };
    if next == 0 {
        return Ok(Utf16Decoded::Lone(unit));
    }
    if is_high_surrogate(unit) && is_low_surrogate(next) {
        let high = u32::from(unit - 0xD800);
        let low = u32::from(next - 0xDC00);
        return Ok(Utf16Decoded::Pair(0x1_0000 + high * 0x400 + low));
    }
    Err(DecodeError::UnpairedSurrogate { unit, next })
}
