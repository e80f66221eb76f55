use rayon::prelude::*;

use osu_rs::osu::prelude::*;

#[test]
fn test_parse_in_parallel() {
    let sources = [
        include_str!("files/canonical.osu"),
        include_str!("files/stable_export.osu"),
    ];
    let sequential: Vec<Beatmap> = sources
        .iter()
        .map(|source| parse_osu(source).unwrap())
        .collect();
    let parallel: Vec<Beatmap> = sources
        .par_iter()
        .map(|source| parse_osu(source).unwrap())
        .collect();
    assert_eq!(parallel, sequential);

    let written: Vec<String> = parallel.par_iter().map(Beatmap::unparse).collect();
    for (text, beatmap) in written.iter().zip(&sequential) {
        assert_eq!(&parse_osu(text).unwrap(), beatmap);
    }
}
