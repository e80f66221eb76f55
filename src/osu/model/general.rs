//! `[General]` section model.

use crate::osu::command::{Countdown, GameMode, SampleSet};

/// Gameplay properties in `[General]`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// `AudioFilename`, the audio file relative to the beatmap folder.
    pub audio_filename: Option<String>,
    /// `AudioLeadIn`, milliseconds of silence before the audio starts.
    pub audio_lead_in: Option<i32>,
    /// `PreviewTime`, where the song select preview starts, in milliseconds.
    pub preview_time: Option<i32>,
    /// `Countdown`.
    pub countdown: Option<Countdown>,
    /// `SampleSet`, written by name.
    pub sample_set: Option<SampleSet>,
    /// `StackLeniency`.
    pub stack_leniency: Option<f64>,
    /// `Mode`.
    pub mode: Option<GameMode>,
    /// `LetterboxInBreaks`.
    pub letterbox_in_breaks: Option<bool>,
    /// `StoryFireInFront`.
    pub story_fire_in_front: Option<bool>,
    /// `SkinPreference`.
    pub skin_preference: Option<String>,
    /// `EpilepsyWarning`.
    pub epilepsy_warning: Option<bool>,
    /// `CountdownOffset`, in beats.
    pub countdown_offset: Option<i32>,
    /// `WidescreenStoryboard`.
    pub widescreen_storyboard: Option<bool>,
    /// `SpecialStyle`, the N+1 key layout of osu!mania.
    pub special_style: Option<bool>,
    /// `UseSkinSprites`.
    pub use_skin_sprites: Option<bool>,
    /// `SamplesMatchPlaybackRate`.
    pub samples_match_playback_rate: Option<bool>,
}
