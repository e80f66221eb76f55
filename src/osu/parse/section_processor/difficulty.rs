//! This module handles the keys of `[Difficulty]`, all of them numbers.

use super::SectionProcessor;
use crate::osu::{
    field::{Result, parse_float, split_key_value},
    model::Beatmap,
};

/// It processes `[Difficulty]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyProcessor;

impl SectionProcessor for DifficultyProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let (key, value) = split_key_value(line)?;
        let difficulty = &mut beatmap.difficulty;
        let slot = match key {
            "HPDrainRate" => &mut difficulty.hp_drain_rate,
            "CircleSize" => &mut difficulty.circle_size,
            "OverallDifficulty" => &mut difficulty.overall_difficulty,
            "ApproachRate" => &mut difficulty.approach_rate,
            "SliderMultiplier" => &mut difficulty.slider_multiplier,
            "SliderTickRate" => &mut difficulty.slider_tick_rate,
            _ => return Ok(()),
        };
        *slot = Some(parse_float(value)?);
        Ok(())
    }
}
