use core::fmt;

use bstr::BStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

/// A code point could not be encoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EncodeError {
    /// The value is above U+10FFFF.
    #[error("code point 0x{0:X} is outside 0..=0x10FFFF")]
    OutOfRange(u32),
}

/// An encoded sequence could not be decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodeError {
    /// The first byte cannot start a UTF-8 sequence.
    #[error("invalid UTF-8 lead byte 0x{0:02X}")]
    InvalidLead(u8),
    /// A byte after the lead byte is not of the form `10xxxxxx`.
    #[error("invalid UTF-8 continuation byte at index {index} of {sequence}")]
    InvalidContinuation {
        /// Position of the offending byte within the sequence.
        index: usize,
        /// The bytes read so far, offending byte included.
        sequence: ByteSequence,
    },
    /// The sequence uses more bytes than the value it encodes requires.
    #[error("overlong UTF-8 sequence {sequence}")]
    Overlong {
        /// The complete overlong sequence.
        sequence: ByteSequence,
    },
    /// The sequence decodes to a value above U+10FFFF.
    #[error("decoded value 0x{0:X} is outside 0..=0x10FFFF")]
    OutOfRange(u32),
    /// The input ended before the sequence did.
    #[error("incomplete sequence: expected {needed} units, found {available}")]
    Incomplete {
        /// Units the sequence requires.
        needed: usize,
        /// Units that were available.
        available: usize,
    },
    /// A UTF-16 surrogate is neither part of a valid pair nor followed by
    /// the terminator.
    #[error("unpaired surrogate 0x{unit:04X} followed by 0x{next:04X}")]
    UnpairedSurrogate {
        /// The surrogate that could not be paired.
        unit: u16,
        /// The unit following it.
        next: u16,
    },
}

/// Any failure of a single-sequence conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConvertError {
    /// The source sequence was malformed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// The decoded value cannot be represented in the destination form.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Up to four raw UTF-8 bytes carried by an error for display.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ByteSequence {
    bytes: [u8; 4],
    len: u8,
}

impl ByteSequence {
    /// Copies at most four bytes out of `src`.
    pub(crate) fn new(src: &[u8]) -> Self {
        let len = src.len().min(4);
        let mut bytes = [0; 4];
        bytes[..len].copy_from_slice(&src[..len]);
        Self {
            bytes,
            len: u8::try_from(len).unwrap_or(4),
        }
    }

    /// The captured bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ByteSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "ByteSequence")]
        struct Raw {
            bytes: [u8; 4],
            len: u8,
        }

        let Raw { bytes, len } = Raw::deserialize(deserializer)?;
        if usize::from(len) > bytes.len() {
            return Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(u64::from(len)),
                &"a length of at most 4",
            ));
        }
        Ok(Self { bytes, len })
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}
