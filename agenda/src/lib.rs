#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use chrono::NaiveDate;
use chrono::{Datelike, Days, Local};
use thiserror::Error;

pub mod agenda;
pub mod format;
pub mod parse;
pub mod report;

pub use crate::agenda::{Agenda, NOT_FOUND};

/// Calendar month. Declaration order is calendar order, so the derived `Ord`
/// sorts January first.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    #[must_use]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono months are always 1..=12
        Self::from_ordinal(date.month()).unwrap()
    }

    /// 1-based position in the calendar, January = 1.
    #[must_use]
    pub fn ordinal(self) -> u32 {
        self as u32 + 1
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Month::January => "JANUARY",
            Month::February => "FEBRUARY",
            Month::March => "MARCH",
            Month::April => "APRIL",
            Month::May => "MAY",
            Month::June => "JUNE",
            Month::July => "JULY",
            Month::August => "AUGUST",
            Month::September => "SEPTEMBER",
            Month::October => "OCTOBER",
            Month::November => "NOVEMBER",
            Month::December => "DECEMBER",
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Unknown month {0:?}, expected a month name or a number from 1 to 12")]
pub struct MonthError(String);

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ordinal) = s.parse::<u32>() {
            return Month::from_ordinal(ordinal).ok_or_else(|| MonthError(s.to_owned()));
        }
        let upper = s.to_uppercase();
        Month::ALL
            .into_iter()
            .find(|m| {
                let label = m.label();
                label == upper || (upper.len() == 3 && label.starts_with(&upper))
            })
            .ok_or_else(|| MonthError(s.to_owned()))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
pub enum Style {
    Rock,
    Pop,
    Indie,
    HipHop,
    Electronic,
    Blues,
    Jazz,
    Flamenco,
    Reggae,
    Metal,
    Classical,
}

impl Style {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Style::Rock => "rock",
            Style::Pop => "pop",
            Style::Indie => "indie",
            Style::HipHop => "hiphop",
            Style::Electronic => "electronic",
            Style::Blues => "blues",
            Style::Jazz => "jazz",
            Style::Flamenco => "flamenco",
            Style::Reggae => "reggae",
            Style::Metal => "metal",
            Style::Classical => "classical",
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Unknown style {0:?}")]
pub struct StyleError(pub String);

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Style::Rock),
            "pop" => Ok(Style::Pop),
            "indie" => Ok(Style::Indie),
            "hiphop" | "hip-hop" => Ok(Style::HipHop),
            "electronic" => Ok(Style::Electronic),
            "blues" => Ok(Style::Blues),
            "jazz" => Ok(Style::Jazz),
            "flamenco" => Ok(Style::Flamenco),
            "reggae" => Ok(Style::Reggae),
            "metal" => Ok(Style::Metal),
            "classical" => Ok(Style::Classical),
            _ => Err(StyleError(s.trim().to_owned())),
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.tag())
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Status {
    Concluded,
    InProgress,
    Upcoming { days: i64 },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Festival {
    name: String,
    venue: String,
    start: NaiveDate,
    end: NaiveDate,
    styles: BTreeSet<Style>,
}

impl Festival {
    /// Creates a festival lasting `duration` days, the first of which is `start`.
    ///
    /// Returns `None` for a zero duration, an empty style set or an end date
    /// outside of chrono's range.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        start: NaiveDate,
        duration: u32,
        styles: impl IntoIterator<Item = Style>,
    ) -> Option<Self> {
        let styles = styles.into_iter().collect::<BTreeSet<_>>();
        if styles.is_empty() {
            return None;
        }
        let end = start.checked_add_days(Days::new(u64::from(duration.checked_sub(1)?)))?;
        Some(Self {
            name: name.into(),
            venue: venue.into(),
            start,
            end,
            styles,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn styles(&self) -> &BTreeSet<Style> {
        &self.styles
    }

    #[must_use]
    pub fn month(&self) -> Month {
        Month::from_date(self.start)
    }

    #[must_use]
    pub fn status(&self, today: NaiveDate) -> Status {
        if self.end < today {
            Status::Concluded
        } else if self.start <= today {
            Status::InProgress
        } else {
            Status::Upcoming {
                days: (self.start - today).num_days(),
            }
        }
    }

    #[must_use]
    pub fn is_in_progress(&self, today: NaiveDate) -> bool {
        self.status(today) == Status::InProgress
    }
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Positioned<T> {
    pub line: usize,
    pub value: T,
}

impl<T> Positioned<T> {
    pub fn new(line: usize, value: T) -> Positioned<T> {
        Self { line, value }
    }
}

#[cfg(test)]
pub(crate) fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[cfg(test)]
mod test {
    use crate::{date, Festival, Month, MonthError, Status, Style};

    #[test]
    fn test_month_order_is_calendar_order() {
        assert!(Month::January < Month::February);
        assert!(Month::August < Month::December);
        assert!(Month::March < Month::April);
        assert_eq!(Month::January.ordinal(), 1);
        assert_eq!(Month::December.ordinal(), 12);
        assert_eq!(Month::from_ordinal(0), None);
        assert_eq!(Month::from_ordinal(13), None);
        assert_eq!(Month::from_date(date(29, 2, 2024)), Month::February);
    }

    #[test]
    fn test_parse_month() {
        let tests = [
            ("march", Month::March),
            ("MARCH", Month::March),
            ("Sep", Month::September),
            ("7", Month::July),
            (" 12 ", Month::December),
        ];
        for (text, month) in tests {
            assert_eq!(text.parse(), Ok(month), "{text}");
        }
        assert_eq!("13".parse::<Month>(), Err(MonthError("13".to_owned())));
        assert_eq!("ma".parse::<Month>(), Err(MonthError("ma".to_owned())));
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("Rock".parse(), Ok(Style::Rock));
        assert_eq!("hip-hop".parse(), Ok(Style::HipHop));
        assert_eq!(" electronic ".parse(), Ok(Style::Electronic));
        assert!("polka".parse::<Style>().is_err());
    }

    #[test]
    fn test_festival_dates() {
        let festival = Festival::new("Sonar", "Barcelona", date(13, 6, 2024), 3, [Style::Electronic])
            .unwrap();
        assert_eq!(festival.end(), date(15, 6, 2024));
        assert_eq!(festival.month(), Month::June);

        let one_day = Festival::new("BBK", "Bilbao", date(31, 7, 2024), 1, [Style::Rock]).unwrap();
        assert_eq!(one_day.end(), date(31, 7, 2024));

        assert_eq!(
            Festival::new("Empty", "Nowhere", date(1, 1, 2024), 0, [Style::Pop]),
            None
        );
        assert_eq!(
            Festival::new("Empty", "Nowhere", date(1, 1, 2024), 2, Vec::<Style>::new()),
            None
        );
    }

    #[test]
    fn test_festival_status() {
        let festival = Festival::new("Sonar", "Barcelona", date(13, 6, 2024), 3, [Style::Electronic])
            .unwrap();
        assert_eq!(festival.status(date(10, 6, 2024)), Status::Upcoming { days: 3 });
        assert_eq!(festival.status(date(13, 6, 2024)), Status::InProgress);
        assert_eq!(festival.status(date(15, 6, 2024)), Status::InProgress);
        assert_eq!(festival.status(date(16, 6, 2024)), Status::Concluded);
        assert!(festival.is_in_progress(date(14, 6, 2024)));
        assert!(!festival.is_in_progress(date(12, 6, 2024)));
    }
}
