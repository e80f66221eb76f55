use pretty_assertions::assert_eq;

use osu_rs::osu::prelude::*;

#[test]
fn test_canonical() {
    let beatmap = parse_osu(include_str!("files/canonical.osu")).unwrap();

    assert_eq!(beatmap.version, Some(14));
    assert_eq!(beatmap.general.audio_filename.as_deref(), Some("audio.mp3"));
    assert_eq!(beatmap.general.countdown, Some(Countdown::None));
    assert_eq!(beatmap.general.sample_set, Some(SampleSet::Soft));
    assert_eq!(beatmap.general.mode, Some(GameMode::Osu));
    assert_eq!(beatmap.general.widescreen_storyboard, Some(true));
    assert_eq!(beatmap.editor.bookmarks, Some(vec![2434, 12345]));
    assert_eq!(beatmap.editor.beat_divisor, Some(4));
    assert_eq!(beatmap.metadata.title_unicode.as_deref(), Some("キミの冒険"));
    assert_eq!(beatmap.metadata.source.as_deref(), Some(""));
    assert_eq!(
        beatmap.metadata.tags,
        Some(vec!["vocaloid".to_string(), "miku".to_string()])
    );
    assert_eq!(beatmap.metadata.beatmap_id, Some(75));
    assert_eq!(beatmap.difficulty.slider_multiplier, Some(1.4));
    assert_eq!(
        beatmap.events,
        Events {
            background: Some(Background {
                filename: "bg.jpg".into(),
                x: 0,
                y: 0,
            }),
            breaks: vec![Break {
                start: 4627,
                end: 5743,
            }],
        }
    );
    assert_eq!(
        beatmap.colours.combos,
        vec![Rgb::new(255, 128, 0), Rgb::new(0, 128, 255)]
    );
    assert_eq!(beatmap.colours.slider_border, Some(Rgb::new(10, 20, 30)));

    let inherited: Vec<_> = beatmap
        .timing_points
        .iter()
        .map(|point| point.inherited)
        .collect();
    assert_eq!(inherited, vec![true, false, false]);
    assert!(beatmap.timing_points[1].kiai);

    let shapes: Vec<_> = beatmap
        .hit_objects
        .iter()
        .map(|object| match object {
            HitObject::Circle(_) => "circle",
            HitObject::Slider(_) => "slider",
            HitObject::Spinner(_) => "spinner",
            HitObject::HoldNote(_) => "hold",
        })
        .collect();
    assert_eq!(
        shapes,
        vec![
            "circle", "slider", "spinner", "spinner", "slider", "slider", "hold"
        ]
    );
    assert!(beatmap.hit_objects[0].is_new_combo());
    assert_eq!(beatmap.hit_objects[2].extras(), None);
    assert_eq!(
        beatmap.hit_objects[3].extras().map(|extras| extras.filename.as_str()),
        Some("test")
    );
    assert_eq!(beatmap.hit_objects[6].end_time(), Some(16620));
}

#[test]
fn test_stable_export() {
    let beatmap = parse_osu(include_str!("files/stable_export.osu")).unwrap();

    assert_eq!(beatmap.version, Some(14));
    assert_eq!(beatmap.general.audio_lead_in, Some(1500));
    assert_eq!(beatmap.general.preview_time, Some(-1));
    assert_eq!(beatmap.general.countdown, Some(Countdown::Half));
    assert_eq!(beatmap.general.sample_set, Some(SampleSet::Normal));
    assert_eq!(beatmap.general.mode, Some(GameMode::Mania));
    assert_eq!(beatmap.general.special_style, Some(false));
    assert_eq!(beatmap.general.epilepsy_warning, Some(true));
    assert_eq!(beatmap.general.samples_match_playback_rate, Some(true));
    assert_eq!(beatmap.editor.bookmarks, Some(vec![]));
    assert_eq!(beatmap.editor.timeline_zoom, Some(2.4000001));
    assert_eq!(
        beatmap.metadata.tags,
        Some(vec!["mania 7k long notes".to_string()])
    );
    assert_eq!(beatmap.metadata.beatmap_set_id, Some(-1));
    assert_eq!(beatmap.difficulty.circle_size, Some(7.0));

    // Videos, samples and storyboard commands are skipped.
    assert_eq!(
        beatmap.events.background,
        Some(Background {
            filename: "bg.png".into(),
            x: 0,
            y: 0,
        })
    );
    assert_eq!(
        beatmap.events.breaks,
        vec![Break {
            start: 30000,
            end: 35000,
        }]
    );

    assert_eq!(beatmap.timing_points.len(), 2);
    assert_eq!(
        beatmap.timing_points[0].bpm().map(f64::round),
        Some(130.0)
    );
    assert_eq!(beatmap.timing_points[1].velocity_multiplier(), 0.8);
    assert_eq!(beatmap.colours.slider_track_override, Some(Rgb::new(0, 0, 0)));
    assert_eq!(beatmap.colours.slider_body, Some(Rgb::new(30, 30, 30)));

    assert_eq!(beatmap.hit_objects.len(), 4);
    let HitObject::HoldNote(hold) = &beatmap.hit_objects[3] else {
        panic!("expected a hold note, found {:?}", beatmap.hit_objects[3]);
    };
    assert_eq!(hold.end_time, 2000);
    assert_eq!(
        hold.extras,
        Extras {
            sample_set: SampleSet::Normal,
            addition_set: SampleSet::Soft,
            custom_index: 3,
            volume: 80,
            filename: String::new(),
        }
    );
    assert_eq!(
        beatmap.hit_objects[2].base().hit_sound,
        HitSound::WHISTLE
    );
}

#[test]
fn test_from_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/osu/files/canonical.osu");
    let from_path = Beatmap::from_path(path).unwrap();
    let from_str: Beatmap = include_str!("files/canonical.osu").parse().unwrap();
    assert_eq!(from_path, from_str);
}
