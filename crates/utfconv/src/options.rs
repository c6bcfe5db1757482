#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the buffer-level transcoders.
///
/// # Examples
///
/// ```rust
/// use utfconv::{MalformedPolicy, SourceLen, TranscodeOptions, Utf8, Utf16, transcode};
///
/// let options = TranscodeOptions {
///     on_malformed: MalformedPolicy::Replace,
///     ..Default::default()
/// };
/// let mut dst = [0u16; 8];
/// let report = transcode::<Utf8, Utf16>(b"a\xFFb", SourceLen::Terminated, &mut dst, &options);
/// assert_eq!(&dst[..report.written], &[0x61, 0xFFFD, 0x62]);
/// ```
///
/// # Default
///
/// Stops at the first malformed sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranscodeOptions {
    /// What to do when a source sequence cannot be decoded.
    ///
    /// # Default
    ///
    /// [`MalformedPolicy::Stop`]
    pub on_malformed: MalformedPolicy,
}

/// Handling of malformed source sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MalformedPolicy {
    /// Halt before the malformed sequence and record it in
    /// [`StopReason::Malformed`](crate::StopReason::Malformed).
    #[default]
    Stop,
    /// Write U+FFFD for the first unit of the malformed sequence, skip that
    /// one unit and carry on.
    Replace,
}

/// How much of the source buffer a transcoder may read.
///
/// A terminator (a zero unit) ends the conversion in either case and is never
/// counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SourceLen {
    /// Read up to the first terminator or the end of the slice.
    #[default]
    Terminated,
    /// Read at most this many units.
    Units(usize),
}

impl SourceLen {
    /// Clamps `src` to the readable prefix.
    pub(crate) fn limit<T>(self, src: &[T]) -> &[T] {
        match self {
            SourceLen::Terminated => src,
            SourceLen::Units(n) => &src[..n.min(src.len())],
        }
    }
}

impl From<usize> for SourceLen {
    fn from(n: usize) -> Self {
        SourceLen::Units(n)
    }
}

impl From<Option<usize>> for SourceLen {
    fn from(n: Option<usize>) -> Self {
        n.map_or(SourceLen::Terminated, SourceLen::Units)
    }
}
