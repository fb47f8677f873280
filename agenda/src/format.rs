use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::Datelike;

use crate::{Agenda, Festival, NaiveDate, Status};

const SEPARATOR: &str = "------------------------------------------------------------";

/// Text rendering of an [`Agenda`], with festival status relative to `today`.
pub struct Output<'a> {
    agenda: &'a Agenda,
    today: NaiveDate,
}

impl<'a> Output<'a> {
    #[must_use]
    pub fn new(agenda: &'a Agenda, today: NaiveDate) -> Self {
        Self { agenda, today }
    }
}

trait Format {
    fn format(&self, f: &mut Formatter<'_>, today: NaiveDate) -> fmt::Result;
}

impl Display for Output<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.agenda.format(f, self.today)
    }
}

impl Format for Agenda {
    fn format(&self, f: &mut Formatter<'_>, today: NaiveDate) -> fmt::Result {
        writeln!(f, "Festivals")?;
        for (month, festivals) in self.months() {
            writeln!(f)?;
            writeln!(f, "{month} ({} festival/s)", festivals.len())?;
            for festival in festivals {
                festival.format(f, today)?;
            }
        }
        Ok(())
    }
}

impl Format for Festival {
    fn format(&self, f: &mut Formatter<'_>, today: NaiveDate) -> fmt::Result {
        let styles = self
            .styles()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "{:<29} {styles}", self.name())?;
        writeln!(f, "{}", self.venue())?;
        writeln!(
            f,
            "{} ({})",
            DateRange(self.start(), self.end()),
            self.status(today)
        )?;
        writeln!(f, "{SEPARATOR}")
    }
}

struct DateRange(NaiveDate, NaiveDate);

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let DateRange(start, end) = *self;
        if start == end {
            write!(f, "{}", start.format("%d %b %Y"))
        } else if start.year() == end.year() {
            write!(f, "{} - {}", start.format("%d %b"), end.format("%d %b %Y"))
        } else {
            write!(f, "{} - {}", start.format("%d %b %Y"), end.format("%d %b %Y"))
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Status::Concluded => write!(f, "concluded"),
            Status::InProgress => write!(f, "in progress"),
            Status::Upcoming { days } => write!(f, "starts in {days} day/s"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::format::Output;
    use crate::{date, Agenda, Festival, Style};

    #[test]
    fn test_output() {
        let mut agenda = Agenda::new();
        agenda.add(
            Festival::new("Sonar", "Barcelona", date(13, 6, 2024), 3, [Style::Electronic]).unwrap(),
        );
        agenda.add(
            Festival::new(
                "Mad Cool",
                "Madrid",
                date(10, 7, 2024),
                3,
                [Style::Pop, Style::Rock],
            )
            .unwrap(),
        );
        agenda.add(Festival::new("BBK", "Bilbao", date(1, 7, 2024), 1, [Style::Indie]).unwrap());
        agenda.add(
            Festival::new("Nochevieja", "Madrid", date(31, 12, 2024), 2, [Style::Pop]).unwrap(),
        );

        let output = Output::new(&agenda, date(11, 7, 2024)).to_string();
        assert_eq!(
            output,
            "Festivals\n\
             \n\
             JUNE (1 festival/s)\n\
             Sonar                         electronic\n\
             Barcelona\n\
             13 Jun - 15 Jun 2024 (concluded)\n\
             ------------------------------------------------------------\n\
             \n\
             JULY (2 festival/s)\n\
             BBK                           indie\n\
             Bilbao\n\
             01 Jul 2024 (concluded)\n\
             ------------------------------------------------------------\n\
             Mad Cool                      rock, pop\n\
             Madrid\n\
             10 Jul - 12 Jul 2024 (in progress)\n\
             ------------------------------------------------------------\n\
             \n\
             DECEMBER (1 festival/s)\n\
             Nochevieja                    pop\n\
             Madrid\n\
             31 Dec 2024 - 01 Jan 2025 (starts in 173 day/s)\n\
             ------------------------------------------------------------\n"
        );
    }

    #[test]
    fn test_output_long_name() {
        let mut agenda = Agenda::new();
        agenda.add(
            Festival::new(
                "Bienal de Flamenco de Sevilla 2024",
                "Sevilla",
                date(10, 9, 2024),
                1,
                [Style::Flamenco],
            )
            .unwrap(),
        );

        let output = Output::new(&agenda, date(9, 9, 2024)).to_string();
        assert_eq!(
            output,
            "Festivals\n\
             \n\
             SEPTEMBER (1 festival/s)\n\
             Bienal de Flamenco de Sevilla 2024 flamenco\n\
             Sevilla\n\
             10 Sep 2024 (starts in 1 day/s)\n\
             ------------------------------------------------------------\n"
        );
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(
            Output::new(&Agenda::new(), date(1, 1, 2024)).to_string(),
            "Festivals\n"
        );
    }
}
