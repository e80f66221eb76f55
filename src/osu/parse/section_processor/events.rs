//! This module handles `[Events]` lines:
//!
//! - `0,0,"filename",x,y` - The background image.
//! - `2,start,end` - A break period.
//!
//! Videos, samples and storyboard commands are skipped.

use super::SectionProcessor;
use crate::osu::{
    field::Result,
    model::Beatmap,
    parse::record::{BACKGROUND_PREFIX, BREAK_PREFIX},
};

/// It processes `[Events]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventsProcessor;

impl SectionProcessor for EventsProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        if line.starts_with(BREAK_PREFIX) {
            beatmap.events.breaks.push(line.parse()?);
        } else if line.starts_with(BACKGROUND_PREFIX) {
            beatmap.events.background = Some(line.parse()?);
        }
        Ok(())
    }
}
