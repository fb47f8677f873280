use std::fmt::{Display, Formatter};
use std::io::BufRead;
use std::str::FromStr;

use chrono::format::{Item, Numeric, Pad, Parsed};
use chrono::NaiveDate;
use thiserror::Error;

use crate::{Festival, Positioned, Style, StyleError};

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FestivalError {
    #[error("Expected <name> : <venue> : <start> : <days> : <style> [: <style>...]")]
    Format,
    #[error("Missing festival name")]
    Name,
    #[error("Missing venue")]
    Venue,
    #[error("Invalid start date, expected DD-MM-YYYY")]
    Date,
    #[error("Invalid duration, expected a positive number of days")]
    Duration,
    #[error("{0}")]
    Style(#[from] StyleError),
    #[error("Festival ends after the last supported date")]
    Range,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Many(FestivalErrors),
}

#[derive(Debug)]
pub struct FestivalErrors(pub Vec<Positioned<FestivalError>>);

impl Display for FestivalErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Encountered the following errors while parsing:")?;
        for Positioned { line, value } in &self.0 {
            write!(f, "\nFailed to parse festival in line {line}: {value}")?;
        }
        Ok(())
    }
}

/// Parses a date in the `DD-MM-YYYY` format.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    const ITEMS: &[Item<'static>] = &[
        Item::Numeric(Numeric::Day, Pad::Zero),
        Item::Literal("-"),
        Item::Numeric(Numeric::Month, Pad::Zero),
        Item::Literal("-"),
        Item::Numeric(Numeric::Year, Pad::Zero),
    ];

    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, s.trim(), ITEMS.iter()).ok()?;
    parsed.to_naive_date().ok()
}

impl FromStr for Festival {
    type Err = FestivalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(':').map(str::trim);
        let (Some(name), Some(venue), Some(start), Some(duration)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(FestivalError::Format);
        };
        if name.is_empty() {
            return Err(FestivalError::Name);
        }
        if venue.is_empty() {
            return Err(FestivalError::Venue);
        }
        let start = parse_date(start).ok_or(FestivalError::Date)?;
        let duration = duration
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or(FestivalError::Duration)?;
        let styles = fields.map(str::parse::<Style>).collect::<Result<Vec<Style>, _>>()?;
        if styles.is_empty() {
            return Err(FestivalError::Format);
        }
        Festival::new(name, venue, start, duration, styles).ok_or(FestivalError::Range)
    }
}

/// Reads one festival per line. Blank lines and lines starting with `#` are
/// skipped. Fails with every faulty line if any line could not be parsed.
pub fn parse(r: impl BufRead) -> Result<Vec<Festival>, Error> {
    let mut festivals = Vec::new();
    let mut errors = Vec::new();
    for (index, line) in r.lines().enumerate() {
        let index = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse() {
            Ok(festival) => festivals.push(festival),
            Err(e) => errors.push(Positioned::new(index, e)),
        }
    }
    if errors.is_empty() {
        Ok(festivals)
    } else {
        Err(Error::Many(FestivalErrors(errors)))
    }
}
