//! Input line classification for the REPL.

pub const COMMANDS: [&str; 4] = ["/history", "/trend", "/help", "/quit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text to analyze. Sent as typed, including surrounding whitespace.
    Analyze(String),
    History,
    Trend,
    Help,
    Quit,
}

impl Command {
    /// Lines whose first word is a known command run that command. Everything
    /// else, including slash-prefixed text like `/sigh so tired`, is analyzed.
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().next() {
            Some("/history") => Self::History,
            Some("/trend") => Self::Trend,
            Some("/help") => Self::Help,
            Some("/quit" | "/exit") => Self::Quit,
            _ => Self::Analyze(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/history"), Command::History);
        assert_eq!(Command::parse("  /trend "), Command::Trend);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
    }

    #[test]
    fn test_plain_text_is_analyzed_verbatim() {
        assert_eq!(
            Command::parse("  I feel great  "),
            Command::Analyze("  I feel great  ".to_string())
        );
        assert_eq!(Command::parse(""), Command::Analyze(String::new()));
    }

    #[test]
    fn test_slash_prefixed_text_is_analyzed() {
        assert_eq!(
            Command::parse("/sigh I'm so tired"),
            Command::Analyze("/sigh I'm so tired".to_string())
        );
        assert_eq!(Command::parse("/plan"), Command::Analyze("/plan".to_string()));
    }

    #[test]
    fn test_command_word_ignores_trailing_text() {
        assert_eq!(Command::parse("/trend please"), Command::Trend);
    }

    #[test]
    fn test_every_known_command_parses() {
        for cmd in COMMANDS {
            assert!(!matches!(Command::parse(cmd), Command::Analyze(_)));
        }
    }
}
