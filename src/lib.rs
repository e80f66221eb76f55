//! The osu! beatmap (`.osu`) parser and writer.
//!
//! A `.osu` file is a line oriented text document split into `[Section]` blocks. This crate reads
//! one into a [`Beatmap`](osu::model::Beatmap) and writes it back in the same grammar, so tools can
//! edit a chart without disturbing the fields they do not touch.
//!
//! ```
//! use osu_rs::osu::prelude::*;
//!
//! let source = "osu file format v14
//!
//! [General]
//! AudioFilename: audio.mp3
//!
//! [TimingPoints]
//! 0,500,4,2,0,60,1,0
//!
//! [HitObjects]
//! 256,192,1000,5,0,0:0:0:0:
//! ";
//! let mut beatmap = parse_osu(source).unwrap();
//! assert_eq!(beatmap.timing_points[0].bpm(), Some(120.0));
//!
//! beatmap.metadata.title = Some("Test".to_string());
//! let reparsed = parse_osu(&beatmap.unparse()).unwrap();
//! assert_eq!(reparsed, beatmap);
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): renders parse errors with [`ariadne`](https://docs.rs/ariadne).
//! - `serde`: `Serialize` and `Deserialize` for the model and error types.

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod osu;
