//! This module handles the keys of `[General]`:
//!
//! - `AudioFilename`, `SkinPreference` - Text.
//! - `AudioLeadIn`, `PreviewTime`, `CountdownOffset` - Integers.
//! - `Countdown`, `Mode` - Enumerations written by number.
//! - `SampleSet` - Sample set written by name.
//! - `StackLeniency` - Number.
//! - `LetterboxInBreaks`, `StoryFireInFront`, `EpilepsyWarning`, `WidescreenStoryboard`,
//!   `SpecialStyle`, `UseSkinSprites`, `SamplesMatchPlaybackRate` - Flags of `0` or `1`.

use super::SectionProcessor;
use crate::osu::{
    command::{Countdown, GameMode, SampleSet},
    field::{Result, parse_flag, parse_float, parse_int, split_key_value},
    model::Beatmap,
};

/// It processes `[General]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneralProcessor;

impl SectionProcessor for GeneralProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let (key, value) = split_key_value(line)?;
        let general = &mut beatmap.general;
        match key {
            "AudioFilename" => general.audio_filename = Some(value.to_string()),
            "AudioLeadIn" => general.audio_lead_in = Some(parse_int(value)?),
            "PreviewTime" => general.preview_time = Some(parse_int(value)?),
            "Countdown" => general.countdown = Some(Countdown::try_from(parse_int::<u8>(value)?)?),
            "SampleSet" => general.sample_set = Some(SampleSet::from_name(value)?),
            "StackLeniency" => general.stack_leniency = Some(parse_float(value)?),
            "Mode" => general.mode = Some(GameMode::try_from(parse_int::<u8>(value)?)?),
            "LetterboxInBreaks" => general.letterbox_in_breaks = Some(parse_flag(value)?),
            "StoryFireInFront" => general.story_fire_in_front = Some(parse_flag(value)?),
            "SkinPreference" => general.skin_preference = Some(value.to_string()),
            "EpilepsyWarning" => general.epilepsy_warning = Some(parse_flag(value)?),
            "CountdownOffset" => general.countdown_offset = Some(parse_int(value)?),
            "WidescreenStoryboard" => general.widescreen_storyboard = Some(parse_flag(value)?),
            "SpecialStyle" => general.special_style = Some(parse_flag(value)?),
            "UseSkinSprites" => general.use_skin_sprites = Some(parse_flag(value)?),
            "SamplesMatchPlaybackRate" => {
                general.samples_match_playback_rate = Some(parse_flag(value)?);
            }
            _ => {}
        }
        Ok(())
    }
}
