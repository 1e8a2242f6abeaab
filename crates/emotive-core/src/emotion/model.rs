//! Emotion profile domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Result of one successful emotional tone analysis.
///
/// A profile is built once per successful analysis and never changed
/// afterwards; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionProfile {
    dominant_emotion: String,
    emotion_intensity: f64,
    emotional_breakdown: BTreeMap<String, f64>,
    timestamp: DateTime<Utc>,
}

impl EmotionProfile {
    pub fn new(
        dominant_emotion: impl Into<String>,
        emotion_intensity: f64,
        emotional_breakdown: BTreeMap<String, f64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            dominant_emotion: dominant_emotion.into(),
            emotion_intensity,
            emotional_breakdown,
            timestamp,
        }
    }

    /// Label of the strongest detected emotion (open vocabulary).
    pub fn dominant_emotion(&self) -> &str {
        &self.dominant_emotion
    }

    /// Intensity of the dominant emotion, nominally in `[0, 1]`.
    pub fn emotion_intensity(&self) -> f64 {
        self.emotion_intensity
    }

    /// Score per detected emotion label.
    pub fn emotional_breakdown(&self) -> &BTreeMap<String, f64> {
        &self.emotional_breakdown
    }

    /// When the analysis completed, as assigned locally.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Sum of all breakdown scores.
    pub fn breakdown_sum(&self) -> f64 {
        self.emotional_breakdown.values().sum()
    }

    /// Breakdown sorted by score, highest first. Equal scores keep label order.
    pub fn ranked_breakdown(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .emotional_breakdown
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Intensity as a display percentage, clamped to `0..=100`.
    pub fn intensity_percent(&self) -> u8 {
        (self.emotion_intensity.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Coarse classification of the dominant emotion.
    pub fn tone(&self) -> EmotionTone {
        EmotionTone::classify(&self.dominant_emotion)
    }
}

/// Coarse grouping of open-vocabulary emotion labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTone {
    Positive,
    Sad,
    Angry,
    Fearful,
    Surprised,
    Neutral,
}

impl EmotionTone {
    /// Classifies a label case-insensitively. Unknown labels are `Neutral`.
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happiness" | "happy" | "joy" => Self::Positive,
            "sadness" | "sad" => Self::Sad,
            "anger" | "angry" => Self::Angry,
            "fear" | "scared" => Self::Fearful,
            "surprise" => Self::Surprised,
            _ => Self::Neutral,
        }
    }

    /// Glyph used by text front ends.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Fearful => "😨",
            Self::Surprised => "😮",
            Self::Neutral => "😐",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(intensity: f64, breakdown: &[(&str, f64)]) -> EmotionProfile {
        EmotionProfile::new(
            "Happiness",
            intensity,
            breakdown
                .iter()
                .map(|(label, score)| (label.to_string(), *score))
                .collect(),
            Utc::now(),
        )
    }

    #[test]
    fn test_ranked_breakdown_sorts_descending() {
        let profile = profile(0.9, &[("Neutral", 0.1), ("Happiness", 0.7), ("Surprise", 0.2)]);

        let ranked = profile.ranked_breakdown();

        assert_eq!(
            ranked,
            vec![("Happiness", 0.7), ("Surprise", 0.2), ("Neutral", 0.1)]
        );
    }

    #[test]
    fn test_ranked_breakdown_ties_keep_label_order() {
        let profile = profile(0.5, &[("Joy", 0.5), ("Calm", 0.5)]);
        let labels: Vec<&str> = profile.ranked_breakdown().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Calm", "Joy"]);
    }

    #[test]
    fn test_intensity_percent_is_clamped() {
        assert_eq!(profile(0.456, &[]).intensity_percent(), 46);
        assert_eq!(profile(1.7, &[]).intensity_percent(), 100);
        assert_eq!(profile(-0.2, &[]).intensity_percent(), 0);
    }

    #[test]
    fn test_tone_classification_is_case_insensitive() {
        assert_eq!(EmotionTone::classify("JOY"), EmotionTone::Positive);
        assert_eq!(EmotionTone::classify(" sad "), EmotionTone::Sad);
        assert_eq!(EmotionTone::classify("Angry"), EmotionTone::Angry);
        assert_eq!(EmotionTone::classify("scared"), EmotionTone::Fearful);
        assert_eq!(EmotionTone::classify("Surprise"), EmotionTone::Surprised);
        assert_eq!(EmotionTone::classify("Nostalgia"), EmotionTone::Neutral);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(profile(0.9, &[("Happiness", 0.9)])).unwrap();
        assert_eq!(json["dominantEmotion"], "Happiness");
        assert_eq!(json["emotionIntensity"], 0.9);
        assert_eq!(json["emotionalBreakdown"]["Happiness"], 0.9);
        assert!(json["timestamp"].is_string());
    }
}
