use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

fn roundtrip(source: &str) -> Beatmap {
    let beatmap = parse_osu(source).unwrap();
    let reparsed = parse_osu(&beatmap.unparse()).unwrap();
    assert_eq!(reparsed, beatmap);
    beatmap
}

#[test]
fn test_canonical_is_byte_exact() {
    let source = include_str!("files/canonical.osu");
    let beatmap = roundtrip(source);
    assert_eq!(beatmap.unparse(), source);
}

#[test]
fn test_stable_export_model_roundtrip() {
    let beatmap = roundtrip(include_str!("files/stable_export.osu"));
    let written = beatmap.unparse();
    // Only the modeled lines survive.
    assert!(!written.contains("Sprite"));
    assert!(!written.contains("AudioHash"));
    assert!(written.contains("0,0,\"bg.png\",0,0\n"));
    assert!(written.contains("Bookmarks: \n"));
}

#[test]
fn test_edit_then_write() {
    let mut beatmap = parse_osu(include_str!("files/canonical.osu")).unwrap();
    beatmap.metadata.version = Some("Extra".to_string());
    beatmap.difficulty.approach_rate = Some(9.3);
    for object in &mut beatmap.hit_objects {
        object.base_mut().time += 100;
    }
    let written = beatmap.unparse();
    assert!(written.contains("Version:Extra\n"));
    assert!(written.contains("ApproachRate:9.3\n"));
    assert!(written.contains("164,260,2534,5,0,0:0:0:0:\n"));
    assert!(written.contains("329,192,16604,128,0,16620:0:0:0:0:\n"));
    assert_eq!(parse_osu(&written).unwrap(), beatmap);
}

#[test]
fn test_every_hit_object_shape() {
    let objects = [
        HitObject::Circle(Circle {
            base: HitObjectBase {
                x: 1,
                y: 2,
                time: 3,
                kind: HitObjectKind::CIRCLE | HitObjectKind::NEW_COMBO,
                hit_sound: HitSound::CLAP,
            },
            extras: None,
        }),
        HitObject::Slider(Slider {
            base: HitObjectBase {
                x: 4,
                y: 5,
                time: 6,
                kind: HitObjectKind::SLIDER,
                hit_sound: HitSound::empty(),
            },
            path: SliderPath {
                curve_type: CurveType::CatmullRom,
                points: vec![CurvePoint::new(10, 10), CurvePoint::new(-20, 30)],
            },
            repeat: 3,
            tail: Some(SliderTail {
                length: 52.5,
                edge_sounds: vec![HitSound::WHISTLE | HitSound::FINISH; 4],
                edge_sets: vec![
                    EdgeSet {
                        sample_set: SampleSet::Soft,
                        addition_set: SampleSet::Drum,
                    };
                    4
                ],
                extras: Some(Extras {
                    sample_set: SampleSet::Normal,
                    addition_set: SampleSet::Auto,
                    custom_index: 2,
                    volume: 70,
                    filename: "slide.wav".into(),
                }),
            }),
        }),
        HitObject::Spinner(Spinner {
            base: HitObjectBase {
                x: 256,
                y: 192,
                time: 7,
                kind: HitObjectKind::SPINNER,
                hit_sound: HitSound::empty(),
            },
            end_time: 900,
            extras: None,
        }),
        HitObject::HoldNote(HoldNote {
            base: HitObjectBase {
                x: 64,
                y: 192,
                time: 8,
                kind: HitObjectKind::HOLD_NOTE,
                hit_sound: HitSound::NORMAL,
            },
            end_time: 1000,
            extras: Extras::default(),
        }),
    ];
    for object in objects {
        let line = object.to_string();
        let decoded: HitObject = line.parse().unwrap();
        assert_eq!(decoded, object, "{line}");
    }
}

#[test]
fn test_timing_points_keep_file_order() {
    let source = "[TimingPoints]\n5000,-100,4,1,0,60,0,0\n0,500,4,1,0,60,1,0\n";
    let offsets = |beatmap: &Beatmap| {
        beatmap
            .timing_points
            .iter()
            .map(|point| point.offset)
            .collect::<Vec<_>>()
    };
    let beatmap = parse_osu(source).unwrap();
    assert_eq!(offsets(&beatmap), vec![5000, 0]);

    let written = beatmap.unparse();
    assert!(written.contains(source));
    assert_eq!(offsets(&parse_osu(&written).unwrap()), vec![5000, 0]);
}
