use cedola_types::{DividendEvent, MonthLocale};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const ITALIAN: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

const ENGLISH: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const fn table(locale: MonthLocale) -> &'static [&'static str; 12] {
    match locale {
        MonthLocale::Italian => &ITALIAN,
        MonthLocale::English => &ENGLISH,
        _ => &ITALIAN,
    }
}

/// Localized name of month `month` (1..=12), or `None` outside that range.
#[must_use]
pub fn month_name(month: u32, locale: MonthLocale) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    table(locale).get(idx).copied()
}

/// A month label that orders by calendar position, never by its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalizedMonth {
    number: u32,
    locale: MonthLocale,
}

impl LocalizedMonth {
    /// Month `number` (1..=12) in `locale`; `None` outside that range.
    #[must_use]
    pub fn new(number: u32, locale: MonthLocale) -> Option<Self> {
        (1..=12)
            .contains(&number)
            .then_some(Self { number, locale })
    }

    /// Month of `date` in `locale`.
    #[must_use]
    pub fn from_date(date: NaiveDate, locale: MonthLocale) -> Self {
        Self {
            number: date.month(),
            locale,
        }
    }

    /// Parse a localized month name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(name: &str, locale: MonthLocale) -> Option<Self> {
        let name = name.trim();
        let idx = table(locale)
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))?;
        let number = u32::try_from(idx).ok()? + 1;
        Some(Self { number, locale })
    }

    /// Calendar position, 1 for the first month.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Locale the label is rendered in.
    #[must_use]
    pub const fn locale(&self) -> MonthLocale {
        self.locale
    }

    /// Localized label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        month_name(self.number, self.locale).unwrap_or_default()
    }
}

impl std::fmt::Display for LocalizedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A dividend event placed on the (month, day) calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    /// Localized month of the ex-dividend date.
    pub month: LocalizedMonth,
    /// Day of month of the ex-dividend date.
    pub day: u32,
    /// The underlying event; its year is kept for downstream filtering.
    pub event: DividendEvent,
}

/// Place events on the calendar grid, sorted by (month number, day).
///
/// The sort is stable and ignores the year, so events from different years
/// sharing a (month, day) keep their input order.
#[must_use]
pub fn localize(events: Vec<DividendEvent>, locale: MonthLocale) -> Vec<CalendarEntry> {
    let mut entries: Vec<CalendarEntry> = events
        .into_iter()
        .map(|event| CalendarEntry {
            month: LocalizedMonth::from_date(event.ex_dividend_date, locale),
            day: event.day(),
            event,
        })
        .collect();
    entries.sort_by_key(|e| (e.month.number(), e.day));
    entries
}
