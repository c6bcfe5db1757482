//! Buffer-level conversion between encoding forms.
//!
//! Every transcoder runs the same loop over a source slice and a destination
//! slice:
//!
//! 1. stop if the source bound is reached ([`StopReason::SourceExhausted`]);
//! 2. stop at a zero unit ([`StopReason::Terminator`]);
//! 3. stop if the destination has no room left ([`StopReason::DestinationFull`]);
//! 4. convert one sequence with [`convert_one`](crate::step::convert_one);
//! 5. stop if the converted sequence does not fit in what remains of the
//!    destination, otherwise copy it and advance both cursors.
//!
//! Malformed sequences are handled according to [`MalformedPolicy`]. The
//! destination is never written past its end and a sequence is either
//! written whole or not at all.

use alloc::{vec, vec::Vec};

use crate::{
    code_point::REPLACEMENT_CHARACTER,
    encoding::{Encoding, Utf8, Utf16, Utf32},
    options::{MalformedPolicy, SourceLen, TranscodeOptions},
    report::{ConversionReport, StopReason},
    step::convert_one,
};

/// Converts `src` from `S` into `dst` as `D`.
///
/// The capacity bound is `dst.len()`; pass a shorter subslice to convert into
/// part of a buffer.
pub fn transcode<S: Encoding, D: Encoding>(
    src: &[S::Unit],
    src_len: SourceLen,
    dst: &mut [D::Unit],
    options: &TranscodeOptions,
) -> ConversionReport {
    let src = src_len.limit(src);
    let mut units = [D::Unit::default(); 4];
    let mut code_points = 0;
    let mut read = 0;
    let mut written = 0;

    let stop = loop {
        let Some(&unit) = src.get(read) else {
            break StopReason::SourceExhausted;
        };
        if unit == S::TERMINATOR {
            break StopReason::Terminator;
        }
        if written >= dst.len() {
            break StopReason::DestinationFull;
        }

        let (consumed, produced) = match convert_one::<S, D>(&src[read..], &mut units) {
            Ok(step) => (step.read, step.written),
            Err(error) => match options.on_malformed {
                MalformedPolicy::Stop => {
                    log::debug!(
                        "{} -> {} conversion halted at source offset {read}: {error}",
                        S::NAME,
                        D::NAME
                    );
                    break StopReason::Malformed {
                        offset: read,
                        error,
                    };
                }
                MalformedPolicy::Replace => {
                    log::trace!(
                        "replacing {} unit {unit:?} at source offset {read}: {error}",
                        S::NAME
                    );
                    match D::encode(REPLACEMENT_CHARACTER, &mut units) {
                        Ok(produced) => (1, produced),
                        Err(error) => {
                            break StopReason::Malformed {
                                offset: read,
                                error: error.into(),
                            };
                        }
                    }
                }
            },
        };

        let Some(slot) = dst.get_mut(written..written + produced) else {
            break StopReason::DestinationFull;
        };
        slot.copy_from_slice(&units[..produced]);
        read += consumed;
        written += produced;
        code_points += 1;
    };

    ConversionReport {
        code_points,
        read,
        written,
        stop,
    }
}

/// Converts `src` into a newly allocated buffer sized for the worst case.
///
/// The returned buffer holds exactly `report.written` units. Since the
/// buffer is always large enough, the report never stops with
/// [`StopReason::DestinationFull`].
#[must_use]
pub fn transcode_to_vec<S: Encoding, D: Encoding>(
    src: &[S::Unit],
    src_len: SourceLen,
    options: &TranscodeOptions,
) -> (Vec<D::Unit>, ConversionReport) {
    let src = src_len.limit(src);
    let mut dst = vec![D::Unit::default(); src.len().saturating_mul(D::MAX_UNITS)];
    let report = transcode::<S, D>(src, SourceLen::Terminated, &mut dst, options);
    dst.truncate(report.written);
    (dst, report)
}

/// Converts UTF-8 to UTF-16 with default options.
pub fn utf8_to_utf16(src: &[u8], src_len: SourceLen, dst: &mut [u16]) -> ConversionReport {
    transcode::<Utf8, Utf16>(src, src_len, dst, &TranscodeOptions::default())
}

/// Converts UTF-16 to UTF-8 with default options.
pub fn utf16_to_utf8(src: &[u16], src_len: SourceLen, dst: &mut [u8]) -> ConversionReport {
    transcode::<Utf16, Utf8>(src, src_len, dst, &TranscodeOptions::default())
}

/// Converts UTF-8 to UTF-32 with default options.
pub fn utf8_to_utf32(src: &[u8], src_len: SourceLen, dst: &mut [u32]) -> ConversionReport {
    transcode::<Utf8, Utf32>(src, src_len, dst, &TranscodeOptions::default())
}

/// Converts UTF-32 to UTF-8 with default options.
pub fn utf32_to_utf8(src: &[u32], src_len: SourceLen, dst: &mut [u8]) -> ConversionReport {
    transcode::<Utf32, Utf8>(src, src_len, dst, &TranscodeOptions::default())
}

/// Converts UTF-16 to UTF-32 with default options.
pub fn utf16_to_utf32(src: &[u16], src_len: SourceLen, dst: &mut [u32]) -> ConversionReport {
    transcode::<Utf16, Utf32>(src, src_len, dst, &TranscodeOptions::default())
}

/// Converts UTF-32 to UTF-16 with default options.
pub fn utf32_to_utf16(src: &[u32], src_len: SourceLen, dst: &mut [u16]) -> ConversionReport {
    transcode::<Utf32, Utf16>(src, src_len, dst, &TranscodeOptions::default())
}
