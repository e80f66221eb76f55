//! Test diagnostics module functionality

use ariadne::Source;
use osu_rs::{
    diagnostics::{SimpleSource, ToAriadne, emit_osu_error},
    osu::{OsuError, parse_osu},
};

#[test]
fn test_simple_source_creation() {
    let source_text = "[Metadata]\nTitle:Test\n";
    let source = SimpleSource::new("test.osu", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.osu");
}

#[test]
fn test_emit_error_with_real_source() {
    let source = "osu file format v14\n\n[HitObjects]\n256,192,1000,4,0\n";
    let error = parse_osu(source).unwrap_err();

    // Only verifies the report can be printed.
    emit_osu_error("test.osu", source, &error);
}

#[test]
fn test_io_error_report() {
    let error: OsuError = std::io::Error::other("disk on fire").into();
    let mut out = Vec::new();
    error
        .to_report(&SimpleSource::new("gone.osu", ""))
        .write(("gone.osu".to_string(), Source::from("")), &mut out)
        .unwrap();
    assert!(String::from_utf8(out).unwrap().contains("io"));
}
