use super::SectionProcessor;
use crate::osu::{field::Result, model::Beatmap};

/// It processes `[TimingPoints]` lines, appending them in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimingPointsProcessor;

impl SectionProcessor for TimingPointsProcessor {
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        beatmap.timing_points.push(line.parse()?);
        Ok(())
    }
}
