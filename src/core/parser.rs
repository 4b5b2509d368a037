//! Chat export → event records.
//!
//! A line looks like
//! `18/12/2023, 07:12 - Dana: 07:10 פיפי בחוץ <ההודעה נערכה>`
//! i.e. `<date>[,<export time>] - <sender>: <event time> <label> [location]`.
//! The export time is ignored: people often log an event some minutes after it happened.

use crate::config::Vocabulary;
use crate::errors::{AppError, AppResult};
use crate::models::event_record::EventRecord;
use crate::models::location::Location;
use crate::utils::{date, time};
use regex::Regex;
use std::fmt;

/// Why a line did not produce a record. Never leaves the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSkip {
    Blank,
    SystemNotice,
    MissingDateSeparator,
    MissingSenderSeparator,
    InvalidDate(String),
    InvalidTime(String),
}

impl fmt::Display for ParseSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSkip::Blank => write!(f, "blank line"),
            ParseSkip::SystemNotice => write!(f, "system notice"),
            ParseSkip::MissingDateSeparator => write!(f, "no ' - ' separator"),
            ParseSkip::MissingSenderSeparator => write!(f, "no ': ' separator"),
            ParseSkip::InvalidDate(d) => write!(f, "invalid date '{d}'"),
            ParseSkip::InvalidTime(t) => write!(f, "invalid event time '{t}'"),
        }
    }
}

pub struct LogParser<'a> {
    vocab: &'a Vocabulary,
    locations: Option<Regex>,
}

impl<'a> LogParser<'a> {
    pub fn new(vocab: &'a Vocabulary) -> AppResult<Self> {
        let mut tokens: Vec<&str> = vocab
            .locations
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        // Longest first: the regex engine prefers the first alternative at a given position.
        tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));

        let locations = if tokens.is_empty() {
            None
        } else {
            let pattern = tokens
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&pattern).map_err(|e| AppError::Config(e.to_string()))?)
        };

        Ok(Self { vocab, locations })
    }

    /// Parse a whole export. Lines that cannot be read are skipped.
    pub fn parse(&self, text: &str) -> Vec<EventRecord> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (n, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                Ok(rec) => records.push(rec),
                Err(ParseSkip::Blank) => {}
                Err(reason) => {
                    skipped += 1;
                    log::debug!("line {}: skipped ({})", n + 1, reason);
                }
            }
        }

        log::info!("parsed {} records, skipped {} lines", records.len(), skipped);
        records
    }

    pub fn parse_line(&self, line: &str) -> Result<EventRecord, ParseSkip> {
        let line = clean(line);
        if line.is_empty() {
            return Err(ParseSkip::Blank);
        }
        if self.vocab.is_system_notice(line) {
            return Err(ParseSkip::SystemNotice);
        }

        let (header, content) = line
            .split_once(" - ")
            .ok_or(ParseSkip::MissingDateSeparator)?;
        let (_sender, message) = content
            .split_once(": ")
            .ok_or(ParseSkip::MissingSenderSeparator)?;

        let date_token = header.split(',').next().unwrap_or(header);
        let date = date::parse_chat_date(date_token)
            .ok_or_else(|| ParseSkip::InvalidDate(date_token.trim().to_string()))?;

        let message = self.vocab.strip_edit_markers(message);
        let message = clean(&message);

        let (time_token, rest) = message.split_once(' ').unwrap_or((message, ""));
        let time = time::parse_time(time_token)
            .ok_or_else(|| ParseSkip::InvalidTime(time_token.to_string()))?;

        let (label, location) = self.extract_location(rest);

        Ok(EventRecord::new(date, time, label, location))
    }

    /// Find a known location anywhere in the label and cut it out.
    pub fn extract_location(&self, label: &str) -> (String, Location) {
        let found = self.locations.as_ref().and_then(|re| re.find(label));

        match found {
            Some(m) => {
                let remaining = format!("{}{}", &label[..m.start()], &label[m.end()..]);
                (squash(&remaining), Location::Known(m.as_str().to_string()))
            }
            None => (squash(label), Location::Unknown),
        }
    }
}

/// Trim whitespace plus the BOM and direction marks chat apps sprinkle around RTL text
fn clean(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '\u{feff}' | '\u{200e}' | '\u{200f}'))
}

fn squash(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
