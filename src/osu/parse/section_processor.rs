//! Processors applying the content lines of each section to the [`Beatmap`].
//!
//! Key:value sections (`[General]`, `[Editor]`, `[Metadata]`, `[Difficulty]` and `[Colours]`)
//! match keys exactly and ignore unknown ones. Record sections decode each line with the
//! [`record`](super::record) decoders.

mod colours;
mod difficulty;
mod editor;
mod events;
mod general;
mod hit_objects;
mod metadata;
mod timing_points;

use crate::osu::{field::Result, lex::Section, model::Beatmap};

pub use self::{
    colours::{COMBO_PREFIX, ColoursProcessor},
    difficulty::DifficultyProcessor,
    editor::EditorProcessor,
    events::EventsProcessor,
    general::GeneralProcessor,
    hit_objects::HitObjectsProcessor,
    metadata::MetadataProcessor,
    timing_points::TimingPointsProcessor,
};

/// A processor of the content lines of one section.
pub trait SectionProcessor {
    /// Applies a trimmed content line to the beatmap.
    ///
    /// # Errors
    ///
    /// Returns the conversion error of the first malformed field.
    fn on_line(&self, line: &str, beatmap: &mut Beatmap) -> Result<()>;
}

/// Returns the processor of the section.
#[must_use]
pub fn processor_for(section: Section) -> &'static dyn SectionProcessor {
    match section {
        Section::General => &GeneralProcessor,
        Section::Editor => &EditorProcessor,
        Section::Metadata => &MetadataProcessor,
        Section::Difficulty => &DifficultyProcessor,
        Section::Events => &EventsProcessor,
        Section::TimingPoints => &TimingPointsProcessor,
        Section::Colours => &ColoursProcessor,
        Section::HitObjects => &HitObjectsProcessor,
    }
}
