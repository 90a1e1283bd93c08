//! Turns a raw input line into a [`Command`].
//!
//! Only the first two words of a line matter; anything after the second word
//! is ignored. Command words are matched exactly (case-sensitive).

use std::borrow::Cow;
use std::io::{self, BufRead};

use log::warn;

use crate::world::Direction;

/// Every word the dispatcher understands, in the order `help` lists them.
pub const COMMAND_WORDS: &[&str] = &[
    "go", "quit", "help", "eat", "jump", "sit", "take", "drop", "i", "open", "shoot", "n", "s",
    "e", "w", "u", "d",
];

/// One parsed player instruction. The `Option<String>` is the second word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Unknown,
    Help,
    /// Destination as a direction token; single-letter aliases arrive expanded.
    Go(Option<String>),
    Quit(Option<String>),
    Eat(Option<String>),
    Jump,
    Sit,
    Take(Option<String>),
    Drop(Option<String>),
    Inventory,
    Open(Option<String>),
    Shoot(Option<String>),
}

pub fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Command::Unknown;
    };
    let second = words.next().map(str::to_string);

    match word {
        "help" => Command::Help,
        "go" => Command::Go(second),
        "quit" => Command::Quit(second),
        "eat" => Command::Eat(second),
        "jump" => Command::Jump,
        "sit" => Command::Sit,
        "take" => Command::Take(second),
        "drop" => Command::Drop(second),
        "i" => Command::Inventory,
        "open" => Command::Open(second),
        "shoot" => Command::Shoot(second),
        "n" | "s" | "e" | "w" | "u" | "d" => {
            let dir = word.chars().next().and_then(Direction::from_shorthand);
            Command::Go(dir.map(|d| d.as_str().to_string()))
        }
        _ => Command::Unknown,
    }
}

/// Reads one line and parses it. `Ok(None)` means end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a bad
/// line parses as [`Command::Unknown`] instead of ending the session. Only real
/// read failures are returned as errors.
pub fn read_command<R: BufRead>(reader: &mut R) -> io::Result<Option<Command>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    if let Cow::Owned(_) = line {
        warn!("input line was not valid UTF-8");
    }
    Ok(Some(parse(&line)))
}

/// Space-separated command word list for `help`.
pub fn show_commands() -> String {
    COMMAND_WORDS.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parses_verb_and_second_word() {
        assert_eq!(parse("take ball"), Command::Take(Some("ball".into())));
        assert_eq!(parse("  drop   shoe extra words"), Command::Drop(Some("shoe".into())));
        assert_eq!(parse("quit"), Command::Quit(None));
        assert_eq!(parse("i"), Command::Inventory);
    }

    #[test]
    fn direction_aliases_expand_and_ignore_second_word() {
        assert_eq!(parse("n"), Command::Go(Some("north".into())));
        assert_eq!(parse("d now"), Command::Go(Some("down".into())));
        assert_eq!(parse("go sideways"), Command::Go(Some("sideways".into())));
    }

    #[test]
    fn unknown_and_wrong_case_words_are_unknown() {
        assert_eq!(parse(""), Command::Unknown);
        assert_eq!(parse("dance"), Command::Unknown);
        assert_eq!(parse("Take ball"), Command::Unknown);
    }

    #[test]
    fn invalid_utf8_line_is_unknown_and_reading_continues() {
        let mut input = io::Cursor::new(b"sit\n\xff\xfe\ntake ball".to_vec());

        assert_eq!(read_command(&mut input).unwrap(), Some(Command::Sit));
        assert_eq!(read_command(&mut input).unwrap(), Some(Command::Unknown));
        assert_eq!(
            read_command(&mut input).unwrap(),
            Some(Command::Take(Some("ball".into())))
        );
        assert_eq!(read_command(&mut input).unwrap(), None);
    }

    #[test]
    fn help_lists_every_word() {
        let words = show_commands();
        for w in COMMAND_WORDS {
            assert!(words.split(' ').any(|x| x == *w));
        }
    }
}
