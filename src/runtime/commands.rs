//! Line commands understood by the interactive shell.

use std::fmt;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Toggle,
    Stop,
    Next,
    Prev,
    /// 1-based track number, as shown by `list`.
    Select(usize),
    Remove(usize),
    Volume(f32),
    Seek(f64),
    Add(PathBuf),
    List,
    Info,
    Date(NaiveDate),
    Note(String),
    Unnote(String),
    Notes,
    /// Drop every note on the selected date.
    Clear,
    /// Noted dates in a month; `None` means the selected date's month.
    Month(Option<(i32, u32)>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
play | stop | next | prev | select N | remove N | volume 0..1 | seek 0..1
add PATH | list | info | date YYYY-MM-DD | note TEXT | unnote TEXT | notes | clear
month [YYYY-MM] | help | quit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "play" | "pause" | "p" => ShellCommand::Toggle,
        "stop" => ShellCommand::Stop,
        "next" | "n" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Prev,
        "select" => ShellCommand::Select(track_number(rest)?),
        "remove" | "rm" => ShellCommand::Remove(track_number(rest)?),
        "volume" | "vol" => ShellCommand::Volume(number(rest, "volume")?),
        "seek" => ShellCommand::Seek(number(rest, "seek")?),
        "add" => ShellCommand::Add(PathBuf::from(required(rest, "add")?)),
        "list" | "ls" => ShellCommand::List,
        "info" => ShellCommand::Info,
        "date" => {
            let raw = required(rest, "date")?;
            let date = raw
                .parse::<NaiveDate>()
                .map_err(|e| ParseError(format!("bad date {raw:?}: {e}")))?;
            ShellCommand::Date(date)
        }
        "note" => ShellCommand::Note(rest.to_string()),
        "unnote" => ShellCommand::Unnote(required(rest, "unnote")?.to_string()),
        "notes" => ShellCommand::Notes,
        "clear" => ShellCommand::Clear,
        "month" if rest.is_empty() => ShellCommand::Month(None),
        "month" => ShellCommand::Month(Some(year_month(rest)?)),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(ParseError(format!("unknown command {other:?}"))),
    };
    Ok(Some(cmd))
}

fn required<'a>(rest: &'a str, cmd: &str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError(format!("{cmd} needs an argument")))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(rest: &str, cmd: &str) -> Result<T, ParseError> {
    let raw = required(rest, cmd)?;
    raw.parse()
        .map_err(|_| ParseError(format!("{cmd}: {raw:?} is not a number")))
}

/// `YYYY-MM`, validated by parsing the first of that month.
fn year_month(raw: &str) -> Result<(i32, u32), ParseError> {
    let first = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map_err(|e| ParseError(format!("bad month {raw:?}: {e}")))?;
    Ok((first.year(), first.month()))
}

fn track_number(rest: &str) -> Result<usize, ParseError> {
    match number::<usize>(rest, "track")? {
        0 => Err(ParseError("track numbers start at 1".to_string())),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn playback_words() {
        assert_eq!(parse("play"), Ok(Some(ShellCommand::Toggle)));
        assert_eq!(parse("PAUSE"), Ok(Some(ShellCommand::Toggle)));
        assert_eq!(parse("prev"), Ok(Some(ShellCommand::Prev)));
        assert_eq!(parse("select 2"), Ok(Some(ShellCommand::Select(2))));
        assert_eq!(parse("volume 0.5"), Ok(Some(ShellCommand::Volume(0.5))));
        assert_eq!(parse("seek 1"), Ok(Some(ShellCommand::Seek(1.0))));
    }

    #[test]
    fn track_numbers_are_one_based() {
        assert!(parse("select 0").is_err());
        assert!(parse("remove x").is_err());
        assert!(parse("remove").is_err());
    }

    #[test]
    fn dates_use_iso_format() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse("date 2024-05-01"), Ok(Some(ShellCommand::Date(date))));
        assert!(parse("date 2024-13-01").is_err());
    }

    #[test]
    fn month_takes_year_and_month() {
        assert_eq!(
            parse("month 2024-05"),
            Ok(Some(ShellCommand::Month(Some((2024, 5)))))
        );
        assert_eq!(parse("month"), Ok(Some(ShellCommand::Month(None))));
        assert!(parse("month 2024-13").is_err());
        assert!(parse("month may").is_err());
        assert_eq!(parse("clear"), Ok(Some(ShellCommand::Clear)));
    }

    #[test]
    fn note_keeps_inner_spacing() {
        assert_eq!(
            parse("note  Lunch with  Sam "),
            Ok(Some(ShellCommand::Note("Lunch with  Sam".into())))
        );
        assert_eq!(parse("note"), Ok(Some(ShellCommand::Note(String::new()))));
        assert!(parse("unnote").is_err());
    }

    #[test]
    fn add_takes_rest_of_line_as_path() {
        assert_eq!(
            parse("add /music/My Song.mp3"),
            Ok(Some(ShellCommand::Add(PathBuf::from("/music/My Song.mp3"))))
        );
    }

    #[test]
    fn unknown_word_is_an_error() {
        assert!(parse("dance").is_err());
    }
}
