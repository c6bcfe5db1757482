use alloc::{string::String, vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    MAX_CODE_POINT, MalformedPolicy, SourceLen, StopReason, TranscodeOptions, Utf8, Utf16,
    transcode, transcode_to_vec,
    utf8::{decode_utf8, encode_utf8, encoded_len},
    utf16::{Utf16Decoded, decode_utf16, encode_utf16},
};

fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Every scalar value survives UTF-8 and UTF-16 and matches `core`'s
/// encoders byte for byte.
#[test]
fn every_scalar_value_round_trips() {
    let mut bytes = [0u8; 4];
    let mut units = [0u16; 2];
    let mut core_bytes = [0u8; 4];
    let mut core_units = [0u16; 2];

    for ch in (0..=MAX_CODE_POINT).filter_map(char::from_u32) {
        let v = u32::from(ch);

        let n = encode_utf8(v, &mut bytes).unwrap();
        assert_eq!(&bytes[..n], ch.encode_utf8(&mut core_bytes).as_bytes());
        assert_eq!(Some(n), encoded_len(v));
        let decoded = decode_utf8(&bytes[..n]).unwrap();
        assert_eq!((decoded.code_point, decoded.len), (v, n));

        let n = encode_utf16(v, &mut units).unwrap();
        assert_eq!(&units[..n], ch.encode_utf16(&mut core_units));
        let decoded = decode_utf16(&units[..n]).unwrap();
        assert_eq!((decoded.code_point(), decoded.units()), (v, n));
    }
}

/// Surrogate code points are not scalar values, but UTF-8 still carries
/// them, and UTF-16 passes them through before the terminator.
#[test]
fn surrogate_code_points_round_trip_alone() {
    let mut bytes = [0u8; 4];
    let mut units = [0u16; 2];
    for v in 0xD800..=0xDFFF_u32 {
        let n = encode_utf8(v, &mut bytes).unwrap();
        assert_eq!(n, 3);
        assert_eq!(decode_utf8(&bytes[..n]).unwrap().code_point, v);

        assert_eq!(encode_utf16(v, &mut units), Ok(1));
        units[1] = 0;
        assert_eq!(
            decode_utf16(&units),
            Ok(Utf16Decoded::Lone(u16::try_from(v).unwrap()))
        );
    }
}

/// Our UTF-8 decoder agrees with `bstr` on arbitrary bytes. The only
/// sequences we accept and `bstr` rejects are encoded surrogates.
#[test]
fn utf8_decoder_matches_bstr() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let (expected, size) = bstr::decode_utf8(&bytes);
        match (expected, decode_utf8(&bytes)) {
            (Some(ch), Ok(d)) => d.code_point == u32::from(ch) && d.len == size,
            (Some(_), Err(_)) => false,
            (None, Ok(d)) => (0xD800..=0xDFFF).contains(&d.code_point) && d.len == 3,
            (None, Err(_)) => true,
        }
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[quickcheck]
fn valid_utf8_matches_str_encode_utf16(text: String) -> bool {
    let logical = text.split('\0').next().unwrap_or_default();
    let expected: Vec<u16> = logical.encode_utf16().collect();

    let mut dst = vec![0u16; text.len()];
    let report = transcode::<Utf8, Utf16>(
        text.as_bytes(),
        SourceLen::Terminated,
        &mut dst,
        &TranscodeOptions::default(),
    );
    report.is_complete()
        && report.read == logical.len()
        && report.code_points == logical.chars().count()
        && dst[..report.written] == expected[..]
}

#[quickcheck]
fn valid_utf16_matches_string_bytes(text: String) -> bool {
    let logical = text.split('\0').next().unwrap_or_default();
    let units: Vec<u16> = text.encode_utf16().collect();

    let (bytes, report) = transcode_to_vec::<Utf16, Utf8>(
        &units,
        SourceLen::Terminated,
        &TranscodeOptions::default(),
    );
    report.is_complete() && bytes == logical.as_bytes()
}

/// Whatever the input and capacity, nothing past the capacity is touched
/// and every written unit belongs to a whole sequence.
#[test]
fn destination_bound_is_never_exceeded() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: Vec<u8>, capacity: u8, replace: bool) -> bool {
        const GUARD: u16 = 0xAAAA;
        let capacity = usize::from(capacity);
        let options = TranscodeOptions {
            on_malformed: if replace {
                MalformedPolicy::Replace
            } else {
                MalformedPolicy::Stop
            },
        };
        let mut dst = vec![GUARD; capacity + 4];
        let report = transcode::<Utf8, Utf16>(
            &src,
            SourceLen::Terminated,
            &mut dst[..capacity],
            &options,
        );

        let untouched = dst[capacity..].iter().all(|&u| u == GUARD);
        let in_bounds = report.written <= capacity && report.read <= src.len();
        let full_only_when_short = report.stop != StopReason::DestinationFull
            || report.written + 2 > capacity;
        untouched && in_bounds && full_only_when_short
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, u8, bool) -> bool);
}

/// With `Replace`, conversion always reaches the end of the source.
#[quickcheck]
fn replace_policy_consumes_everything(src: Vec<u16>) -> bool {
    let options = TranscodeOptions {
        on_malformed: MalformedPolicy::Replace,
    };
    let (_, report) = transcode_to_vec::<Utf16, Utf8>(&src, SourceLen::Terminated, &options);
    let logical = src.iter().position(|&u| u == 0).unwrap_or(src.len());
    report.is_complete() && report.read == logical
}
