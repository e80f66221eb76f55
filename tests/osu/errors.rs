use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

fn parse_error(source: &str) -> ParseErrorWithRange {
    match parse_osu(source) {
        Err(OsuError::Parse(error)) => error,
        other => panic!("expected a parse error, found {other:?}"),
    }
}

fn lex_error(source: &str) -> LexErrorWithRange {
    match parse_osu(source) {
        Err(OsuError::Lex(error)) => error,
        other => panic!("expected a lex error, found {other:?}"),
    }
}

#[test]
fn test_unknown_section_is_fatal() {
    let source = "osu file format v14\n\n[Fonts]\nFont: Arial\n";
    let error = lex_error(source);
    assert_eq!(error.content(), &LexError::UnknownSection("Fonts".into()));
    assert_eq!(error.line(), 3);
    assert_eq!(&source[error.range()], "[Fonts]");
}

#[test]
fn test_unclosed_section_header() {
    let error = lex_error("[General\nMode: 0\n");
    assert_eq!(
        error.content(),
        &LexError::MalformedSectionHeader("[General".into())
    );
}

#[test]
fn test_invalid_version() {
    let error = lex_error("osu file format vX\n");
    assert_eq!(
        error.content(),
        &LexError::InvalidVersion("osu file format vX".into())
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let source = "[General]\nAudioHash: abc\nMode: 1\n\n[Difficulty]\nDrain:3\n";
    let beatmap = parse_osu(source).unwrap();
    assert_eq!(beatmap.general.mode, Some(GameMode::Taiko));
    assert_eq!(beatmap.difficulty, Difficulty::default());
}

#[test]
fn test_short_multibyte_line_is_skipped() {
    let beatmap = parse_osu("[HitObjects]\n日本\n").unwrap();
    assert!(beatmap.hit_objects.is_empty());
}

#[test]
fn test_unknown_hit_object_kind() {
    let source = "[HitObjects]\n256,192,1000,4,0\n";
    let error = parse_error(source);
    assert_eq!(
        error.content(),
        &ParseError::Field {
            section: Section::HitObjects,
            error: FieldError::UnknownHitObjectKind(4),
        }
    );
    assert_eq!(error.line(), 2);
    assert_eq!(&source[error.range()], "256,192,1000,4,0");
}

#[test]
fn test_first_error_wins() {
    let source = "[Metadata]\nBeatmapID:x\nBeatmapSetID:y\n";
    let error = parse_error(source);
    assert_eq!(error.line(), 2);
    assert_eq!(
        error.content(),
        &ParseError::Field {
            section: Section::Metadata,
            error: FieldError::InvalidInteger("x".into()),
        }
    );
}

#[test]
fn test_bad_records() {
    let cases = [
        (
            "[TimingPoints]\n0,500,4,7,0,100,1,0\n",
            FieldError::InvalidSampleSet("7".into()),
        ),
        (
            "[TimingPoints]\n0,500,4,1,0,100,1,8\n",
            FieldError::InvalidFlag("8".into()),
        ),
        (
            "[HitObjects]\n0,0,0,2,0,X|1:1,1\n",
            FieldError::InvalidCurveType("X".into()),
        ),
        (
            "[General]\nSampleSet: Loud\n",
            FieldError::InvalidSampleSet("Loud".into()),
        ),
        (
            "[General]\nMode: 4\n",
            FieldError::InvalidGameMode("4".into()),
        ),
        (
            "[Colours]\nCombo1 : 1,2\n",
            FieldError::MissingField {
                index: 2,
                record: "1,2".into(),
            },
        ),
        (
            "[Editor]\nBeatDivisor\n",
            FieldError::MissingDelimiter {
                delimiter: ':',
                text: "BeatDivisor".into(),
            },
        ),
    ];
    for (source, expected) in cases {
        let error = parse_error(source);
        let ParseError::Field { error, .. } = error.content() else {
            panic!("expected a field error for {source:?}");
        };
        assert_eq!(error, &expected, "{source:?}");
    }
}

#[test]
fn test_error_display_has_position() {
    let error = parse_osu("[HitObjects]\n1,2,3\n").unwrap_err();
    assert_eq!(
        error.to_string(),
        "parse: [HitObjects]: missing field #3 in `1,2,3` at line 2"
    );
}
