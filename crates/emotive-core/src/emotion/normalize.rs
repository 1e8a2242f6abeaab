//! Validation and normalization of raw tone analysis output.
//!
//! The backend is asked for a breakdown summing to 1.0 and an intensity in
//! `[0, 1]`, but nothing guarantees it. [`ProfileNormalizer`] enforces the
//! output shape and applies the configured policies before a profile is built.

use super::EmotionProfile;
use crate::inference::{InferenceError, ToneAnalysisResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What to do with a breakdown whose scores do not sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownPolicy {
    /// Divide every score by the sum when it is off by more than the tolerance.
    #[default]
    Renormalize,
    /// Keep scores as returned.
    PassThrough,
}

/// What to do with an intensity outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityPolicy {
    #[default]
    Clamp,
    /// Treat the output as non-conforming.
    Reject,
    PassThrough,
}

pub const DEFAULT_BREAKDOWN_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileNormalizer {
    breakdown_policy: BreakdownPolicy,
    breakdown_tolerance: f64,
    intensity_policy: IntensityPolicy,
}

impl Default for ProfileNormalizer {
    fn default() -> Self {
        Self {
            breakdown_policy: BreakdownPolicy::default(),
            breakdown_tolerance: DEFAULT_BREAKDOWN_TOLERANCE,
            intensity_policy: IntensityPolicy::default(),
        }
    }
}

impl ProfileNormalizer {
    pub fn new(
        breakdown_policy: BreakdownPolicy,
        breakdown_tolerance: f64,
        intensity_policy: IntensityPolicy,
    ) -> Self {
        Self {
            breakdown_policy,
            breakdown_tolerance: breakdown_tolerance.abs(),
            intensity_policy,
        }
    }

    /// Normalizer that only enforces the output shape.
    pub fn pass_through() -> Self {
        Self::new(BreakdownPolicy::PassThrough, 0.0, IntensityPolicy::PassThrough)
    }

    /// Checks `response` and builds a profile stamped with `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::MalformedOutput` when the dominant emotion is
    /// blank, a score is negative or not finite, or the intensity is not
    /// finite (or out of range under `IntensityPolicy::Reject`).
    pub fn normalize(
        &self,
        response: ToneAnalysisResponse,
        timestamp: DateTime<Utc>,
    ) -> Result<EmotionProfile, InferenceError> {
        let ToneAnalysisResponse {
            dominant_emotion,
            emotion_intensity,
            mut emotional_breakdown,
        } = response;

        if dominant_emotion.trim().is_empty() {
            return Err(InferenceError::malformed("dominantEmotion is empty"));
        }

        if let Some((label, score)) = emotional_breakdown
            .iter()
            .find(|(_, score)| !score.is_finite() || **score < 0.0)
        {
            return Err(InferenceError::malformed(format!(
                "emotionalBreakdown score for '{label}' is invalid ({score})"
            )));
        }

        let intensity = self.apply_intensity_policy(emotion_intensity)?;

        if self.breakdown_policy == BreakdownPolicy::Renormalize {
            let mut sum: f64 = emotional_breakdown.values().sum();
            if !sum.is_finite() {
                // Finite scores can still overflow when added up.
                let max = emotional_breakdown.values().copied().fold(0.0, f64::max);
                for score in emotional_breakdown.values_mut() {
                    *score /= max;
                }
                sum = emotional_breakdown.values().sum();
            }
            if sum > 0.0 && (sum - 1.0).abs() > self.breakdown_tolerance {
                tracing::debug!(
                    "[ProfileNormalizer] Renormalizing breakdown of {} labels (sum {:.4})",
                    emotional_breakdown.len(),
                    sum
                );
                for score in emotional_breakdown.values_mut() {
                    *score /= sum;
                }
            }
        }

        Ok(EmotionProfile::new(
            dominant_emotion,
            intensity,
            emotional_breakdown,
            timestamp,
        ))
    }

    fn apply_intensity_policy(&self, intensity: f64) -> Result<f64, InferenceError> {
        if !intensity.is_finite() {
            return Err(InferenceError::malformed(format!(
                "emotionIntensity is not a finite number ({intensity})"
            )));
        }

        let in_range = (0.0..=1.0).contains(&intensity);
        match self.intensity_policy {
            _ if in_range => Ok(intensity),
            IntensityPolicy::Clamp => {
                tracing::debug!("[ProfileNormalizer] Clamping intensity {}", intensity);
                Ok(intensity.clamp(0.0, 1.0))
            }
            IntensityPolicy::Reject => Err(InferenceError::malformed(format!(
                "emotionIntensity {intensity} is outside [0, 1]"
            ))),
            IntensityPolicy::PassThrough => Ok(intensity),
        }
    }
}
