#![allow(missing_docs)]

use core::fmt::Write;

use utfconv::{
    ConversionReport, MalformedPolicy, SourceLen, TranscodeOptions, Utf8, Utf16, transcode,
    utf16_to_utf8, utf8_to_utf16,
};

fn line(out: &mut String, label: &str, report: &ConversionReport) {
    writeln!(
        out,
        "{label}: code_points={} read={} written={} stop={}",
        report.code_points, report.read, report.written, report.stop
    )
    .unwrap();
}

fn render_utf8_to_utf16(cases: &[(&str, &[u8], SourceLen, usize)]) -> String {
    let mut out = String::new();
    for &(label, src, src_len, capacity) in cases {
        let mut dst = vec![0u16; capacity];
        let report = utf8_to_utf16(src, src_len, &mut dst);
        line(&mut out, label, &report);
    }
    out
}

#[test]
fn snapshot_utf8_to_utf16_reports() {
    let hello = "こんにちは".as_bytes();
    let cases: [(&str, &[u8], SourceLen, usize); 6] = [
        ("unbounded", hello, SourceLen::Terminated, 100),
        ("truncated", hello, SourceLen::Units(9), 100),
        ("small destination", hello, SourceLen::Terminated, 3),
        ("terminated", b"ab\0cd", SourceLen::Terminated, 100),
        ("overlong", b"a\xE0\x80\xAF", SourceLen::Terminated, 100),
        ("stray continuation", b"xy\x80", SourceLen::Terminated, 100),
    ];

    insta::assert_snapshot!(render_utf8_to_utf16(&cases), @r#"
    unbounded: code_points=5 read=15 written=5 stop=source exhausted
    truncated: code_points=3 read=9 written=3 stop=source exhausted
    small destination: code_points=3 read=9 written=3 stop=destination full
    terminated: code_points=2 read=2 written=2 stop=terminator
    overlong: code_points=1 read=1 written=1 stop=malformed input at offset 1: decode error: overlong UTF-8 sequence "\xE0\x80\xAF"
    stray continuation: code_points=2 read=2 written=2 stop=malformed input at offset 2: decode error: invalid UTF-8 lead byte 0x80
    "#);
}

#[test]
fn snapshot_utf16_to_utf8_reports() {
    let mut out = String::new();
    let cases: [(&str, &[u16], usize); 6] = [
        ("pair", &[0xD840, 0xDC0B], 8),
        ("pair without room", &[0x41, 0xD840, 0xDC0B], 4),
        ("pair cut at end", &[0x41, 0xD840], 8),
        ("lone high before terminator", &[0x41, 0xD800, 0], 8),
        ("lone low before terminator", &[0xDC00, 0, 0x41], 8),
        ("broken pair", &[0xD800, 0x41], 8),
    ];
    for (label, src, capacity) in cases {
        let mut dst = vec![0u8; capacity];
        let report = utf16_to_utf8(src, SourceLen::Terminated, &mut dst);
        line(&mut out, label, &report);
    }

    insta::assert_snapshot!(out, @r"
    pair: code_points=1 read=2 written=4 stop=source exhausted
    pair without room: code_points=1 read=1 written=1 stop=destination full
    pair cut at end: code_points=1 read=1 written=1 stop=malformed input at offset 1: decode error: incomplete sequence: expected 2 units, found 1
    lone high before terminator: code_points=2 read=2 written=4 stop=terminator
    lone low before terminator: code_points=1 read=1 written=3 stop=terminator
    broken pair: code_points=0 read=0 written=0 stop=malformed input at offset 0: decode error: unpaired surrogate 0xD800 followed by 0x0041
    ");
}

#[test]
fn snapshot_replacement_output() {
    let options = TranscodeOptions {
        on_malformed: MalformedPolicy::Replace,
    };
    let mut dst = [0u16; 16];
    let report = transcode::<Utf8, Utf16>(
        b"ok\xFF\xE3\x81\xF0\x9F\x98\x80!",
        SourceLen::Terminated,
        &mut dst,
        &options,
    );
    let mut out = String::new();
    line(&mut out, "replace", &report);
    writeln!(out, "units: {:04X?}", &dst[..report.written]).unwrap();

    insta::assert_snapshot!(out, @r#"
    replace: code_points=7 read=10 written=8 stop=source exhausted
    units: [006F, 006B, FFFD, FFFD, FFFD, D83D, DE00, 0021]
    "#);
}
