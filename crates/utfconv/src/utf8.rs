//! UTF-8: one code point as one to four bytes.
//!
//! The lead byte carries the sequence length in its high bits; every
//! following byte is a continuation byte of the form `10xxxxxx`. A sequence
//! is accepted only when it is minimal, so each code point has exactly one
//! valid encoding.
//!
//! Surrogate code points (U+D800..=U+DFFF) encode and decode like any other
//! three-byte value. This keeps unpaired UTF-16 surrogates representable.

use crate::{
    code_point::{MAX_CODE_POINT, check_range},
    encoding::Decoded,
    error::{ByteSequence, DecodeError, EncodeError},
};

/// Sequence length announced by a lead byte, or `None` for bytes that cannot
/// start a valid sequence: continuation bytes, `0xC0`/`0xC1` (every sequence
/// they start is overlong) and `0xF5..=0xFF` (above U+10FFFF or no length at
/// all).
#[inline]
#[must_use]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Whether `byte` matches `10xxxxxx`.
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of bytes [`encode_utf8`] writes for `code_point`.
#[inline]
#[must_use]
pub const fn encoded_len(code_point: u32) -> Option<usize> {
    match code_point {
        0..0x80 => Some(1),
        0x80..0x800 => Some(2),
        0x800..0x1_0000 => Some(3),
        0x1_0000..=MAX_CODE_POINT => Some(4),
        _ => None,
    }
}

/// Encodes `code_point` into `out`, returning the number of bytes written.
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] above U+10FFFF; `out` is left untouched.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_utf8(code_point: u32, out: &mut [u8; 4]) -> Result<usize, EncodeError> {
    let v = check_range(code_point)?;
    if v < 0x80 {
        out[0] = v as u8;
        Ok(1)
    } else if v < 0x800 {
        out[0] = 0xC0 | (v >> 6) as u8;
        out[1] = 0x80 | (v & 0x3F) as u8;
        Ok(2)
    } else if v < 0x1_0000 {
        out[0] = 0xE0 | (v >> 12) as u8;
        out[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (v & 0x3F) as u8;
        Ok(3)
    } else {
        out[0] = 0xF0 | (v >> 18) as u8;
        out[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
        out[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
        out[3] = 0x80 | (v & 0x3F) as u8;
        Ok(4)
    }
}

/// Decodes the sequence at the start of `src`.
///
/// Only the bytes of the first sequence are inspected; anything after it is
/// ignored.
///
/// # Errors
///
/// - [`DecodeError::InvalidLead`] if the first byte cannot start a sequence.
/// - [`DecodeError::InvalidContinuation`] if a following byte is not a
///   continuation byte.
/// - [`DecodeError::Incomplete`] if `src` ends inside the sequence. The
///   lead byte is known to be valid, but the second-byte ranges after
///   `0xE0`, `0xF0` and `0xF4` are only checked once the sequence is whole,
///   so more input may still turn into [`DecodeError::Overlong`] or
///   [`DecodeError::OutOfRange`].
/// - [`DecodeError::Overlong`] if a shorter sequence could encode the value.
/// - [`DecodeError::OutOfRange`] if a four-byte sequence exceeds U+10FFFF.
pub fn decode_utf8(src: &[u8]) -> Result<Decoded, DecodeError> {
    let Some(&lead) = src.first() else {
        return Err(DecodeError::Incomplete {
            needed: 1,
            available: 0,
        });
    };
    let len = sequence_len(lead).ok_or(DecodeError::InvalidLead(lead))?;

    for index in 1..len {
        match src.get(index) {
            None => {
                return Err(DecodeError::Incomplete {
                    needed: len,
                    available: src.len(),
                });
            }
            Some(&byte) if !is_continuation(byte) => {
                return Err(DecodeError::InvalidContinuation {
                    index,
                    sequence: ByteSequence::new(&src[..=index]),
                });
            }
            Some(_) => {}
        }
    }

    let seq = &src[..len];
    let overlong = || DecodeError::Overlong {
        sequence: ByteSequence::new(seq),
    };
    let code_point = match *seq {
        [b0] => u32::from(b0),
        [b0, b1] => (u32::from(b0 & 0x1F) << 6) | u32::from(b1 & 0x3F),
        [b0, b1, b2] => {
            if b0 & 0x0F == 0 && b1 & 0x20 == 0 {
                return Err(overlong());
            }
            (u32::from(b0 & 0x0F) << 12) | (u32::from(b1 & 0x3F) << 6) | u32::from(b2 & 0x3F)
        }
        [b0, b1, b2, b3] => {
            if b0 & 0x07 == 0 && b1 & 0x30 == 0 {
                return Err(overlong());
            }
            let v = (u32::from(b0 & 0x07) << 18)
                | (u32::from(b1 & 0x3F) << 12)
                | (u32::from(b2 & 0x3F) << 6)
                | u32::from(b3 & 0x3F);
            if v > MAX_CODE_POINT {
                return Err(DecodeError::OutOfRange(v));
            }
            v
        }
        _ => return Err(DecodeError::InvalidLead(lead)),
    };

    Ok(Decoded { code_point, len })
}
