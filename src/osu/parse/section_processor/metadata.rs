//! This module handles the keys of `[Metadata]`:
//!
//! - `Title`, `TitleUnicode`, `Artist`, `ArtistUnicode`, `Creator`, `Version`, `Source` - Text.
//! - `Tags` - Comma separated words.
//! - `BeatmapID`, `BeatmapSetID` - Integers, `-1` for unsubmitted beatmaps.

use super::SectionProcessor;
use crate::osu::{
    field::{Result, parse_int, parse_list, split_key_value},
    model::Beatmap,
};

/// It processes `[Metadata]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataProcessor;

impl SectionProcessor for MetadataProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let (key, value) = split_key_value(line)?;
        let metadata = &mut beatmap.metadata;
        match key {
            "Title" => metadata.title = Some(value.to_string()),
            "TitleUnicode" => metadata.title_unicode = Some(value.to_string()),
            "Artist" => metadata.artist = Some(value.to_string()),
            "ArtistUnicode" => metadata.artist_unicode = Some(value.to_string()),
            "Creator" => metadata.creator = Some(value.to_string()),
            "Version" => metadata.version = Some(value.to_string()),
            "Source" => metadata.source = Some(value.to_string()),
            "Tags" => metadata.tags = Some(parse_list(value, ',', |tag| Ok(tag.to_string()))?),
            "BeatmapID" => metadata.beatmap_id = Some(parse_int(value)?),
            "BeatmapSetID" => metadata.beatmap_set_id = Some(parse_int(value)?),
            _ => {}
        }
        Ok(())
    }
}
