use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

#[test]
fn test_beatmap_through_json() {
    let beatmap = parse_osu(include_str!("files/canonical.osu")).unwrap();
    let json = serde_json::to_string(&beatmap).unwrap();
    let restored: Beatmap = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, beatmap);
}

#[test]
fn test_error_through_json() {
    let error = parse_osu("[HitObjects]\n1,2,3\n").unwrap_err();
    let OsuError::Parse(error) = error else {
        panic!("expected a parse error");
    };
    let json = serde_json::to_string(&error).unwrap();
    let restored: ParseErrorWithRange = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, error);
}
