use crate::error::EncodeError;

/// The largest value any of the three encoding forms can represent.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// U+FFFD, written in place of malformed input under
/// [`MalformedPolicy::Replace`](crate::MalformedPolicy::Replace).
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Range check shared by every encoder. Surrogates and noncharacters pass.
#[inline]
pub(crate) const fn check_range(code_point: u32) -> Result<u32, EncodeError> {
    if code_point > MAX_CODE_POINT {
        return Err(EncodeError::OutOfRange(code_point));
    }
    Ok(code_point)
}
