use super::SectionProcessor;
use crate::osu::{field::Result, model::Beatmap};

/// It processes `[HitObjects]` lines, appending them in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitObjectsProcessor;

impl SectionProcessor for HitObjectsProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        beatmap.hit_objects.push(line.parse()?);
        Ok(())
    }
}
