//! Unparse [`Beatmap`] into the `.osu` text format.
//!
//! The output is canonical: sections come in a fixed order separated by blank lines, key:value
//! sections list only the keys that hold a value, and `[Events]`, `[TimingPoints]` and
//! `[HitObjects]` are always written. Parsing the output gives back an equal [`Beatmap`].

pub mod record;

use std::{fmt::Display, io};

use itertools::Itertools;

use crate::osu::{
    command::SampleSet,
    field::flag_str,
    lex::{Section, VERSION_PREFIX},
    model::{Beatmap, Colours, Difficulty, Editor, General, Metadata},
    parse::section_processor::COMBO_PREFIX,
};

/// A `Key: Value` pair kept only if the value is present.
fn entry<T: Display>(key: &'static str, value: Option<T>) -> Option<(&'static str, String)> {
    value.map(|value| (key, value.to_string()))
}

fn general_entries(general: &General) -> Vec<(&'static str, String)> {
    [
        entry("AudioFilename", general.audio_filename.as_ref()),
        entry("AudioLeadIn", general.audio_lead_in),
        entry("PreviewTime", general.preview_time),
        entry("Countdown", general.countdown),
        entry("SampleSet", general.sample_set.map(SampleSet::name)),
        entry("StackLeniency", general.stack_leniency),
        entry("Mode", general.mode),
        entry("LetterboxInBreaks", general.letterbox_in_breaks.map(flag_str)),
        entry("StoryFireInFront", general.story_fire_in_front.map(flag_str)),
        entry("SkinPreference", general.skin_preference.as_ref()),
        entry("EpilepsyWarning", general.epilepsy_warning.map(flag_str)),
        entry("CountdownOffset", general.countdown_offset),
        entry(
            "WidescreenStoryboard",
            general.widescreen_storyboard.map(flag_str),
        ),
        entry("SpecialStyle", general.special_style.map(flag_str)),
        entry("UseSkinSprites", general.use_skin_sprites.map(flag_str)),
        entry(
            "SamplesMatchPlaybackRate",
            general.samples_match_playback_rate.map(flag_str),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn editor_entries(editor: &Editor) -> Vec<(&'static str, String)> {
    [
        entry(
            "Bookmarks",
            editor.bookmarks.as_ref().map(|marks| marks.iter().join(",")),
        ),
        entry("DistanceSpacing", editor.distance_spacing),
        entry("BeatDivisor", editor.beat_divisor),
        entry("GridSize", editor.grid_size),
        entry("TimelineZoom", editor.timeline_zoom),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn metadata_entries(metadata: &Metadata) -> Vec<(&'static str, String)> {
    [
        entry("Title", metadata.title.as_ref()),
        entry("TitleUnicode", metadata.title_unicode.as_ref()),
        entry("Artist", metadata.artist.as_ref()),
        entry("ArtistUnicode", metadata.artist_unicode.as_ref()),
        entry("Creator", metadata.creator.as_ref()),
        entry("Version", metadata.version.as_ref()),
        entry("Source", metadata.source.as_ref()),
        entry("Tags", metadata.tags.as_ref().map(|tags| tags.join(","))),
        entry("BeatmapID", metadata.beatmap_id),
        entry("BeatmapSetID", metadata.beatmap_set_id),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn difficulty_entries(difficulty: &Difficulty) -> Vec<(&'static str, String)> {
    [
        entry("HPDrainRate", difficulty.hp_drain_rate),
        entry("CircleSize", difficulty.circle_size),
        entry("OverallDifficulty", difficulty.overall_difficulty),
        entry("ApproachRate", difficulty.approach_rate),
        entry("SliderMultiplier", difficulty.slider_multiplier),
        entry("SliderTickRate", difficulty.slider_tick_rate),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn colours_entries(colours: &Colours) -> Vec<(String, String)> {
    let combos = colours
        .combos
        .iter()
        .enumerate()
        .map(|(i, rgb)| (format!("{COMBO_PREFIX}{}", i + 1), rgb.to_string()));
    let sliders = [
        entry("SliderBody", colours.slider_body),
        entry("SliderTrackOverride", colours.slider_track_override),
        entry("SliderBorder", colours.slider_border),
    ]
    .into_iter()
    .flatten()
    .map(|(key, value)| (key.to_string(), value));
    combos.chain(sliders).collect()
}

/// Collects the blocks of the output, each ending with a line feed.
struct Blocks(Vec<String>);

impl Blocks {
    fn section<I, L>(&mut self, section: Section, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: Display,
    {
        let lines = lines
            .into_iter()
            .format_with("", |line, f| f(&format_args!("{line}\n")));
        self.0.push(format!("{section}\n{lines}"));
    }

    /// Writes a key:value section unless it has no entries.
    fn key_values<K: Display>(
        &mut self,
        section: Section,
        separator: &str,
        entries: Vec<(K, String)>,
    ) {
        if entries.is_empty() {
            return;
        }
        let lines = entries
            .iter()
            .map(|(key, value)| format!("{key}{separator}{value}"));
        self.section(section, lines);
    }
}

impl Beatmap {
    /// Converts the beatmap into the `.osu` text format.
    ///
    /// ```
    /// use osu_rs::osu::prelude::*;
    ///
    /// let mut beatmap = Beatmap::default();
    /// beatmap.version = Some(14);
    /// beatmap.metadata.title = Some("Test".to_string());
    /// assert_eq!(
    ///     beatmap.unparse(),
    ///     "osu file format v14\n\n[Metadata]\nTitle:Test\n\n[Events]\n\n[TimingPoints]\n\n[HitObjects]\n"
    /// );
    /// ```
    #[must_use]
    pub fn unparse(&self) -> String {
        let mut blocks = Blocks(Vec::new());
        if let Some(version) = self.version {
            blocks.0.push(format!("{VERSION_PREFIX}{version}\n"));
        }
        blocks.key_values(Section::General, ": ", general_entries(&self.general));
        blocks.key_values(Section::Editor, ": ", editor_entries(&self.editor));
        blocks.key_values(Section::Metadata, ":", metadata_entries(&self.metadata));
        blocks.key_values(
            Section::Difficulty,
            ":",
            difficulty_entries(&self.difficulty),
        );
        let events = self
            .events
            .background
            .iter()
            .map(ToString::to_string)
            .chain(self.events.breaks.iter().map(ToString::to_string));
        blocks.section(Section::Events, events);
        blocks.section(Section::TimingPoints, &self.timing_points);
        blocks.key_values(Section::Colours, " : ", colours_entries(&self.colours));
        blocks.section(Section::HitObjects, &self.hit_objects);
        blocks.0.join("\n")
    }

    /// Writes [`Self::unparse`] into `writer`.
    ///
    /// # Errors
    ///
    /// Returns the error of `writer`.
    pub fn write_to(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(self.unparse().as_bytes())
    }
}

impl Display for Beatmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.unparse())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::{
        command::{Countdown, graphics::Rgb},
        model::{Background, Break, Events},
        parse_osu,
    };

    #[test]
    fn empty_beatmap_has_required_sections() {
        assert_eq!(
            Beatmap::default().unparse(),
            "[Events]\n\n[TimingPoints]\n\n[HitObjects]\n"
        );
    }

    #[test]
    fn key_value_separators_per_section() {
        let beatmap = Beatmap {
            version: Some(14),
            general: General {
                audio_filename: Some("audio.mp3".into()),
                countdown: Some(Countdown::None),
                sample_set: Some(SampleSet::Soft),
                stack_leniency: Some(0.7),
                letterbox_in_breaks: Some(false),
                ..General::default()
            },
            editor: Editor {
                bookmarks: Some(vec![1000, 2000]),
                beat_divisor: Some(4),
                ..Editor::default()
            },
            metadata: Metadata {
                title: Some("Title".into()),
                tags: Some(vec!["a".into(), "b c".into()]),
                beatmap_id: Some(75),
                ..Metadata::default()
            },
            difficulty: Difficulty {
                hp_drain_rate: Some(5.0),
                slider_multiplier: Some(1.4),
                ..Difficulty::default()
            },
            events: Events {
                background: Some(Background {
                    filename: "bg.jpg".into(),
                    x: 0,
                    y: 0,
                }),
                breaks: vec![Break {
                    start: 4627,
                    end: 5743,
                }],
            },
            colours: Colours {
                combos: vec![Rgb::new(255, 128, 0), Rgb::new(0, 128, 255)],
                slider_border: Some(Rgb::new(10, 20, 30)),
                ..Colours::default()
            },
            ..Beatmap::default()
        };
        let expected = "osu file format v14

[General]
AudioFilename: audio.mp3
Countdown: 0
SampleSet: Soft
StackLeniency: 0.7
LetterboxInBreaks: 0

[Editor]
Bookmarks: 1000,2000
BeatDivisor: 4

[Metadata]
Title:Title
Tags:a,b c
BeatmapID:75

[Difficulty]
HPDrainRate:5
SliderMultiplier:1.4

[Events]
0,0,\"bg.jpg\",0,0
2,4627,5743

[TimingPoints]

[Colours]
Combo1 : 255,128,0
Combo2 : 0,128,255
SliderBorder : 10,20,30

[HitObjects]
";
        assert_eq!(beatmap.unparse(), expected);
        assert_eq!(beatmap.to_string(), expected);
        assert_eq!(parse_osu(expected).unwrap(), beatmap);
    }

    #[test]
    fn write_to_matches_unparse() {
        let beatmap = parse_osu("[HitObjects]\n256,192,1000,1,0\n").unwrap();
        let mut out = Vec::new();
        beatmap.write_to(&mut out).unwrap();
        assert_eq!(out, beatmap.unparse().into_bytes());
    }
}
