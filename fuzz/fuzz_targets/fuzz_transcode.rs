#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use utfconv::{MalformedPolicy, SourceLen, TranscodeOptions, Utf8, Utf16, transcode};

const HEADER: usize = 3; // 1 flag + 2-byte capacity
const GUARD16: u16 = 0xA5A5;
const GUARD8: u8 = 0xA5;

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Byte fragments that sit right on the decoder's decision boundaries.
static EDGE_TABLE: &[&[u8]] = &[
    b"\0",
    b"\x80",
    b"\xBF",
    b"\xC0\x80",
    b"\xC1\xBF",
    b"\xC2\x80",
    b"\xE0\x80\x80",
    b"\xE0\x9F\xBF",
    b"\xE0\xA0\x80",
    b"\xED\xA0\x80",
    b"\xED\xBF\xBF",
    b"\xF0\x8F\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF4\x8F\xBF\xBF",
    b"\xF4\x90\x80\x80",
    b"\xF0\x9F\x98",
    b"\xF8",
    b"\xFF",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || (size >= HEADER && seed % 10 != 0) {
        return fuzzer_mutate(data, size, max_size);
    }

    data[0] = with_rng(|rng| rng.next_u32() as u8);
    data[1..HEADER].copy_from_slice(&with_rng(|rng| rng.random_range(0u16..512).to_le_bytes()));

    let limit = max_size.min(HEADER + 512);
    let mut len = HEADER;
    while len < limit {
        let written = append_fragment(&mut data[len..limit]);
        if written == 0 {
            break;
        }
        len += written;
    }
    len
}

/// Append either a random scalar value or an edge-case fragment to `buf`.
/// Returns 0 when the chosen fragment does not fit.
fn append_fragment(buf: &mut [u8]) -> usize {
    with_rng(|rng| {
        let mut tmp = [0u8; 4];
        let fragment: &[u8] = if rng.random_bool(0.2) {
            EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())]
        } else {
            let ch: char = rng.random();
            ch.encode_utf8(&mut tmp).as_bytes()
        };
        if fragment.len() > buf.len() {
            return 0;
        }
        buf[..fragment.len()].copy_from_slice(fragment);
        fragment.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn options(flags: u8) -> (TranscodeOptions, SourceLen) {
    let on_malformed = if flags & 1 != 0 {
        MalformedPolicy::Replace
    } else {
        MalformedPolicy::Stop
    };
    let src_len = if flags & 2 != 0 {
        SourceLen::Units(usize::from(flags >> 2))
    } else {
        SourceLen::Terminated
    };
    (TranscodeOptions { on_malformed }, src_len)
}

fn utf8_source(src: &[u8], capacity: usize, options: &TranscodeOptions, src_len: SourceLen) {
    let mut units = vec![GUARD16; capacity + 2];
    let report = transcode::<Utf8, Utf16>(src, src_len, &mut units[..capacity], options);
    assert!(report.written <= capacity);
    assert!(report.read <= src.len());
    assert!(units[capacity..].iter().all(|&u| u == GUARD16));

    if options.on_malformed != MalformedPolicy::Stop {
        return;
    }
    let Ok(text) = std::str::from_utf8(&src[..report.read]) else {
        return;
    };
    let expected: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(&units[..report.written], expected.as_slice());

    // Valid input survives the trip back byte for byte.
    let mut bytes = vec![GUARD8; text.len() + 4];
    let back = transcode::<Utf16, Utf8>(
        &units[..report.written],
        SourceLen::Terminated,
        &mut bytes[..text.len()],
        options,
    );
    assert!(back.is_complete());
    assert_eq!(&bytes[..back.written], text.as_bytes());
    assert!(bytes[text.len()..].iter().all(|&b| b == GUARD8));
}

fn utf16_source(raw: &[u8], capacity: usize, options: &TranscodeOptions, src_len: SourceLen) {
    let src: Vec<u16> = raw
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let mut bytes = vec![GUARD8; capacity + 4];
    let report = transcode::<Utf16, Utf8>(&src, src_len, &mut bytes[..capacity], options);
    assert!(report.written <= capacity);
    assert!(report.read <= src.len());
    assert!(bytes[capacity..].iter().all(|&b| b == GUARD8));

    if let Ok(text) = String::from_utf16(&src[..report.read]) {
        if options.on_malformed == MalformedPolicy::Stop {
            assert_eq!(&bytes[..report.written], text.as_bytes());
        }
    }
}

fn transcode_checks(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let (options, src_len) = options(data[0]);
    let capacity = usize::from(u16::from_le_bytes([data[1], data[2]]));
    let src = &data[HEADER..];

    utf8_source(src, capacity, &options, src_len);
    utf16_source(src, capacity, &options, src_len);
}

fuzz_target!(|data: &[u8]| transcode_checks(data));
