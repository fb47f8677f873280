#![warn(clippy::pedantic)]

use std::collections::HashSet;
use std::io::{stdout, BufReader, Write};
use std::process::ExitCode;

use agenda::format::Output;
use agenda::parse::{parse, parse_date};
use agenda::report::StyleReport;
use agenda::{Agenda, Month, NOT_FOUND};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fs_err::File;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(about = "Festivals grouped by month")]
struct Command {
    /// Input file with one festival per line, defaults to `festivals.txt`
    #[arg(default_value = "festivals.txt")]
    path: String,

    /// Date used to decide which festivals are in progress, as DD-MM-YYYY
    #[arg(long, global = true, value_parser = date_arg)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Print all festivals by month
    Show,
    /// Print the number of festivals in a month
    Count { month: Month },
    /// Print the festivals grouped by style
    Styles,
    /// Cancel the festivals in progress at the given venues
    Cancel {
        month: Month,
        #[arg(required = true)]
        venues: Vec<String>,
    },
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date {s:?}, expected DD-MM-YYYY"))
}

#[derive(Error, Debug)]
enum Error {
    #[error("Failed to read input file: {0}")]
    InputFile(std::io::Error),
    #[error("Failed to parse input: {0}")]
    Parse(#[from] agenda::parse::Error),
    #[error("No festivals in {0}")]
    NotFound(Month),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn run(Command { path, today, action }: Command) -> Result<(), Error> {
    let file = File::open(path).map_err(Error::InputFile)?;
    let mut agenda = parse(&mut BufReader::new(file))?
        .into_iter()
        .collect::<Agenda>();
    let today = today.unwrap_or_else(agenda::today);

    let mut out = stdout().lock();
    match action.unwrap_or(Action::Show) {
        Action::Show => write!(out, "{}", Output::new(&agenda, today))?,
        Action::Count { month } => match agenda.count_in_month(month) {
            NOT_FOUND => return Err(Error::NotFound(month)),
            count => writeln!(out, "{month}: {count} festival/s")?,
        },
        Action::Styles => write!(out, "{}", StyleReport::new(&agenda))?,
        Action::Cancel { month, venues } => {
            let venues = venues.into_iter().collect::<HashSet<_>>();
            match agenda.cancel_by_venue_on(&venues, month, today) {
                NOT_FOUND => return Err(Error::NotFound(month)),
                ordinal => {
                    writeln!(out, "Cancelled in month {ordinal}")?;
                    write!(out, "{}", Output::new(&agenda, today))?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let command = Command::parse();
    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
