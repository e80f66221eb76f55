//! This module handles the keys of `[Colours]`:
//!
//! - `Combo<N>` - Combo colours, kept in declaration order.
//! - `SliderBody`, `SliderTrackOverride`, `SliderBorder` - Slider colours.

use super::SectionProcessor;
use crate::osu::{
    field::{Result, split_key_value},
    model::Beatmap,
};

/// The key prefix of combo colours.
pub const COMBO_PREFIX: &str = "Combo";

/// It processes `[Colours]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoursProcessor;

impl SectionProcessor for ColoursProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let (key, value) = split_key_value(line)?;
        let colours = &mut beatmap.colours;
        if key.starts_with(COMBO_PREFIX) {
            colours.combos.push(value.parse()?);
            return Ok(());
        }
        match key {
            "SliderBody" => colours.slider_body = Some(value.parse()?),
            "SliderTrackOverride" => colours.slider_track_override = Some(value.parse()?),
            "SliderBorder" => colours.slider_border = Some(value.parse()?),
            _ => {}
        }
        Ok(())
    }
}
