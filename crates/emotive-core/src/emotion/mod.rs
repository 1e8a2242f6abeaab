//! Emotion domain module.
//!
//! # Module Structure
//!
//! - `model`: `EmotionProfile` and the `EmotionTone` classification
//! - `normalize`: output-shape enforcement and normalization policies

mod model;
mod normalize;

pub use model::{EmotionProfile, EmotionTone};
pub use normalize::{
    BreakdownPolicy, DEFAULT_BREAKDOWN_TOLERANCE, IntensityPolicy, ProfileNormalizer,
};
