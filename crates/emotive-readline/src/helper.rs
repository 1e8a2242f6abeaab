//! rustyline helper: slash-command completion, hints and highlighting.

use std::borrow::Cow;

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

#[derive(Clone, Default)]
pub struct CliHelper;

impl CliHelper {
    pub fn new() -> Self {
        Self
    }

    /// Commands extending `prefix`. Only a leading slash word is completed.
    fn matching(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
        let eligible = prefix.starts_with('/') && !prefix.contains(char::is_whitespace);
        COMMANDS
            .into_iter()
            .filter(move |cmd| eligible && cmd.starts_with(prefix))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = Self::matching(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let prefix = &line[..pos];
        Self::matching(prefix)
            .find(|cmd| cmd.len() > prefix.len())
            .map(|cmd| cmd[prefix.len()..].to_string())
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('/') {
            Cow::Owned(line.bright_cyan().to_string())
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_prefix() {
        let found: Vec<&str> = CliHelper::matching("/h").collect();
        assert_eq!(found, vec!["/history", "/help"]);
        assert_eq!(CliHelper::matching("/").count(), COMMANDS.len());
    }

    #[test]
    fn test_plain_text_never_matches() {
        assert_eq!(CliHelper::matching("hello").count(), 0);
        assert_eq!(CliHelper::matching("/trend now").count(), 0);
    }
}
