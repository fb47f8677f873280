use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

use anstyle::{AnsiColor, Color, Style as Ansi};

use crate::{Agenda, Festival, Style};

const STYLE: Ansi = Ansi::new().fg_color(Some(Color::Ansi(AnsiColor::BrightYellow)));
const MONTH: Ansi = Ansi::new().fg_color(Some(Color::Ansi(AnsiColor::BrightMagenta)));
const FESTIVAL: Ansi = Ansi::new().fg_color(Some(Color::Ansi(AnsiColor::BrightGreen)));
const ADDITIONS: Ansi = Ansi::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));

/// Terminal listing of the festivals of an agenda grouped by style.
pub struct StyleReport(BTreeMap<Style, Vec<Arc<Festival>>>);

impl StyleReport {
    #[must_use]
    pub fn new(agenda: &Agenda) -> Self {
        Self(agenda.group_by_style())
    }
}

impl Display for StyleReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (style, festivals) in &self.0 {
            if first {
                first = false;
            } else {
                writeln!(f)?;
            }
            writeln!(
                f,
                "{}{style}{} {}({}){}",
                STYLE.render(),
                STYLE.render_reset(),
                ADDITIONS.render(),
                festivals.len(),
                ADDITIONS.render_reset(),
            )?;
            for festival in festivals {
                writeln!(
                    f,
                    "  {}{:<10}{} {}{}{} {}@ {}{}",
                    MONTH.render(),
                    festival.month(),
                    MONTH.render_reset(),
                    FESTIVAL.render(),
                    festival.name(),
                    FESTIVAL.render_reset(),
                    ADDITIONS.render(),
                    festival.venue(),
                    ADDITIONS.render_reset(),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::report::{StyleReport, ADDITIONS, FESTIVAL, MONTH, STYLE};
    use crate::{date, Agenda, Festival, Style};

    #[test]
    fn test_style_report() {
        let mut agenda = Agenda::new();
        agenda.add(Festival::new("Jazzaldia", "Donostia", date(24, 7, 2024), 5, [Style::Jazz]).unwrap());
        agenda.add(
            Festival::new("Mad Cool", "Madrid", date(10, 7, 2024), 3, [Style::Rock, Style::Jazz])
                .unwrap(),
        );

        let (s, s_) = (STYLE.render(), STYLE.render_reset());
        let (m, m_) = (MONTH.render(), MONTH.render_reset());
        let (n, n_) = (FESTIVAL.render(), FESTIVAL.render_reset());
        let (a, a_) = (ADDITIONS.render(), ADDITIONS.render_reset());
        assert_eq!(
            StyleReport::new(&agenda).to_string(),
            format!(
                "{s}rock{s_} {a}(1){a_}\n  \
                 {m}JULY      {m_} {n}Mad Cool{n_} {a}@ Madrid{a_}\n\
                 \n\
                 {s}jazz{s_} {a}(2){a_}\n  \
                 {m}JULY      {m_} {n}Jazzaldia{n_} {a}@ Donostia{a_}\n  \
                 {m}JULY      {m_} {n}Mad Cool{n_} {a}@ Madrid{a_}\n"
            )
        );
    }
}
