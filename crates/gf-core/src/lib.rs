//! Types partagés du moteur GlyphForge.
//!
//! This crate contains the closed style registry, per-style options,
//! request/result types, configuration and the random-source seam used
//! across the GlyphForge workspace.

pub mod config;
pub mod error;
pub mod options;
pub mod request;
pub mod style;
pub mod traits;

pub use config::EngineConfig;
pub use error::CoreError;
pub use options::{ZalgoIntensity, ZalgoOptions};
pub use request::{BatchEntry, BatchReport, ItemOutcome, StyleInfo, StyleMap, TransformRequest};
pub use style::Style;
pub use traits::MarkSource;
