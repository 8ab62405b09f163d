//! Date parsing and the historical limits of the rate archive

use super::currency::CurrencyCode;
use chrono::NaiveDate;
use std::fmt::Display;

/// The hryvnia entered circulation on this day; the archive starts here.
pub const HRYVNIA_INTRODUCED: NaiveDate = match NaiveDate::from_ymd_opt(1996, 9, 2) {
    Some(date) => date,
    None => panic!("invalid hryvnia introduction date"),
};

pub const EURO_INTRODUCED: NaiveDate = match NaiveDate::from_ymd_opt(1999, 1, 1) {
    Some(date) => date,
    None => panic!("invalid euro introduction date"),
};

struct InputFormat {
    pattern: &'static str,
    separator: char,
    year_first: bool,
}

impl InputFormat {
    const fn new(pattern: &'static str, separator: char, year_first: bool) -> Self {
        Self {
            pattern,
            separator,
            year_first,
        }
    }

    /// chrono's `%Y` also takes short years ("20" becomes year 20), so the
    /// year segment is required to be exactly four digits.
    fn has_full_year(&self, input: &str) -> bool {
        let mut segments = input.split(self.separator);
        let year = if self.year_first {
            segments.next()
        } else {
            segments.last()
        };
        year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
    }

    fn parse(&self, input: &str) -> Option<NaiveDate> {
        if !self.has_full_year(input) {
            return None;
        }
        NaiveDate::parse_from_str(input, self.pattern).ok()
    }
}

/// Formats accepted from the console, tried in order.
const INPUT_DATE_FORMATS: [InputFormat; 6] = [
    InputFormat::new("%d.%m.%Y", '.', false),
    InputFormat::new("%d/%m/%Y", '/', false),
    InputFormat::new("%Y-%m-%d", '-', true),
    InputFormat::new("%d-%m-%Y", '-', false),
    InputFormat::new("%Y.%m.%d", '.', true),
    InputFormat::new("%Y/%m/%d", '/', true),
];

/// Display format for dates shown to the user.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    InFuture,
    BeforeHryvnia(NaiveDate),
    BeforeEuro(NaiveDate),
}

impl Display for DateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRejection::InFuture => {
                write!(f, "Вы выбрали дату из будущего. Повторите ввод даты.")
            }
            DateRejection::BeforeHryvnia(date) => write!(
                f,
                "Гривна была введена в оборот 2 сентября 1996 года. На дату {} гривна еще не существовала",
                date.format(DISPLAY_DATE_FORMAT)
            ),
            DateRejection::BeforeEuro(date) => write!(
                f,
                "Евро была введена в оборот 1 января 1999 года. На дату {} евро еще не существовала",
                date.format(DISPLAY_DATE_FORMAT)
            ),
        }
    }
}

/// Checks `date` against the range the archive can answer for `currency`.
///
/// Rules are applied in order and the first failing one is reported:
/// future dates, dates before the hryvnia, then euro dates before the euro.
pub fn validate_date(
    date: NaiveDate,
    currency: CurrencyCode,
    today: NaiveDate,
) -> Result<(), DateRejection> {
    if date > today {
        Err(DateRejection::InFuture)
    } else if date < HRYVNIA_INTRODUCED {
        Err(DateRejection::BeforeHryvnia(date))
    } else if currency == CurrencyCode::Eur && date < EURO_INTRODUCED {
        Err(DateRejection::BeforeEuro(date))
    } else {
        Ok(())
    }
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|format| format.parse(input))
}
