//! This module handles the keys of `[Editor]`: `Bookmarks`, `DistanceSpacing`, `BeatDivisor`,
//! `GridSize` and `TimelineZoom`.

use super::SectionProcessor;
use crate::osu::{
    field::{Result, parse_float, parse_int, parse_list, split_key_value},
    model::Beatmap,
};

/// It processes `[Editor]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorProcessor;

impl SectionProcessor for EditorProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let (key, value) = split_key_value(line)?;
        let editor = &mut beatmap.editor;
        match key {
            "Bookmarks" => editor.bookmarks = Some(parse_list(value, ',', parse_int)?),
            "DistanceSpacing" => editor.distance_spacing = Some(parse_float(value)?),
            "BeatDivisor" => editor.beat_divisor = Some(parse_int(value)?),
            "GridSize" => editor.grid_size = Some(parse_int(value)?),
            "TimelineZoom" => editor.timeline_zoom = Some(parse_float(value)?),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmarks() {
        let mut beatmap = Beatmap::default();
        EditorProcessor
            .on_line("Bookmarks: 1000,2000,3500", &mut beatmap)
            .unwrap();
        EditorProcessor.on_line("BeatDivisor: 4", &mut beatmap).unwrap();
        assert_eq!(beatmap.editor.bookmarks, Some(vec![1000, 2000, 3500]));
        assert_eq!(beatmap.editor.beat_divisor, Some(4));
    }
}
