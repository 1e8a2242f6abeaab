//! Terminal rendering of profiles, history and trend summaries.

use chrono::{DateTime, Utc};
use colored::Colorize;
use emotive_core::{EmotionProfile, HistoryEntry, TrendSummary};

const BAR_WIDTH: usize = 20;
const PREVIEW_CHARS: usize = 40;

pub fn print_profile(profile: &EmotionProfile) {
    println!(
        "{} {} {}",
        profile.tone().glyph(),
        profile.dominant_emotion().bright_magenta().bold(),
        format!("({}%)", profile.intensity_percent()).bright_black()
    );
    for (label, score) in profile.ranked_breakdown() {
        println!("  {:<16} {} {:>5.1}%", label, bar(score), score * 100.0);
    }
}

pub fn print_history(entries: &[HistoryEntry], now: DateTime<Utc>) {
    if entries.is_empty() {
        println!("{}", "No analyses yet.".bright_black());
        return;
    }
    for entry in entries {
        let profile = entry.profile();
        println!(
            "{} {} {} {} {}",
            format!("#{}", entry.id()).bright_black(),
            profile.tone().glyph(),
            profile.dominant_emotion().bright_magenta(),
            format!("({}%)", profile.intensity_percent()).bright_black(),
            relative_age(profile.timestamp(), now).bright_black()
        );
        println!("    {}", preview(entry.source_text()).italic());
    }
}

pub fn print_trend(summary: &TrendSummary) {
    println!(
        "{}",
        format!("Trend over {} analyses:", summary.observation_count).bright_yellow()
    );
    for line in summary.summary.lines() {
        println!("{}", line.bright_blue());
    }
}

pub fn print_help() {
    println!("{}", "Type any text to analyze its emotional tone.".bright_black());
    println!("{}", "  /history  show recent analyses".bright_black());
    println!("{}", "  /trend    summarize the emotional trend".bright_black());
    println!("{}", "  /help     show this help".bright_black());
    println!("{}", "  /quit     exit".bright_black());
}

fn bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn preview(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= PREVIEW_CHARS {
        return single_line;
    }
    let cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}…")
}

pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    match seconds {
        0..=9 => "just now".to_string(),
        10..=59 => format!("{seconds}s ago"),
        60..=3599 => format!("{}m ago", seconds / 60),
        3600..=86_399 => format!("{}h ago", seconds / 3600),
        _ => format!("{}d ago", seconds / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(relative_age(now, now), "just now");
        assert_eq!(relative_age(now - Duration::seconds(42), now), "42s ago");
        assert_eq!(relative_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_age(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_age(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_relative_age_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(relative_age(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn test_bar_width_is_fixed() {
        for score in [-1.0, 0.0, 0.33, 1.0, 4.0] {
            assert_eq!(bar(score).chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn test_preview_collapses_and_truncates() {
        assert_eq!(preview("a\n  b"), "a b");
        let long = "x".repeat(100);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 1);
    }
}
