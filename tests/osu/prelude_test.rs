use osu_rs::osu::prelude::*;

#[test]
fn test_prelude_covers_the_pipeline() {
    let source = "osu file format v14\n[HitObjects]\n256,192,1000,1,0\n";
    let lines = parse_lines(source).unwrap();
    assert_eq!(*lines[0].content(), Line::Version(14));
    assert_eq!(*lines[1].content(), Line::Section(Section::HitObjects));

    let beatmap = Beatmap::from_lines(&lines).unwrap();
    let mut manual = Beatmap::default();
    processor_for(Section::HitObjects)
        .on_line("256,192,1000,1,0", &mut manual)
        .unwrap();
    assert_eq!(beatmap.hit_objects, manual.hit_objects);
}
