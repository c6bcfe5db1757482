//! Transcoding between the three Unicode encoding forms.
//!
//! The crate is layered the same way the conversions compose:
//!
//! - [`utf8`], [`utf16`] and [`utf32`] convert one code point to and from a
//!   single encoded sequence.
//! - [`step`] chains a decode and an encode to convert one sequence from one
//!   form into another.
//! - [`transcode`] loops over whole buffers, bounded by a source length, a
//!   terminator and the destination capacity, and describes how far it got
//!   in a [`ConversionReport`].
//!
//! Code points are plain `u32` values in `0..=0x10FFFF`. Surrogate code
//! points are representable in every form so that unpaired UTF-16 surrogates
//! survive a trip through UTF-8 and back.
//!
//! ```rust
//! use utfconv::{SourceLen, StopReason, utf8_to_utf16};
//!
//! let src = "こんにちは\0trailing".as_bytes();
//! let mut dst = [0u16; 100];
//! let report = utf8_to_utf16(src, SourceLen::Terminated, &mut dst);
//!
//! assert_eq!(report.code_points, 5);
//! assert_eq!(report.read, 15);
//! assert_eq!(report.written, 5);
//! assert_eq!(report.stop, StopReason::Terminator);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_point;
mod encoding;
mod error;
mod options;
mod report;

pub mod step;
pub mod transcode;
pub mod utf16;
pub mod utf32;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use code_point::{MAX_CODE_POINT, REPLACEMENT_CHARACTER};
pub use encoding::{Decoded, Encoding, Utf8, Utf16, Utf32};
pub use error::{ByteSequence, ConvertError, DecodeError, EncodeError};
pub use options::{MalformedPolicy, SourceLen, TranscodeOptions};
pub use report::{ConversionReport, StopReason};
pub use step::Step;
pub use transcode::{
    transcode, transcode_to_vec, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32,
    utf32_to_utf8, utf32_to_utf16,
};
