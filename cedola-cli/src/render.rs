//! Report rendering: localized headers and messages, table/CSV/JSON output.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::Style;

use cedola::{CalendarReport, CalendarRow, MonthLocale, TradeWindow};

/// Placeholder for values that could not be computed.
const ABSENT: &str = "-";

/// User-facing text in one language.
pub struct Labels {
    month: &'static str,
    day: &'static str,
    ticker: &'static str,
    company: &'static str,
    dividend: &'static str,
    yield_pct: &'static str,
    delta_pct: &'static str,
    buy_date: &'static str,
    sell_date: &'static str,
    gain_pct: &'static str,
    mean: fn(u16) -> String,
    pub no_tickers: &'static str,
    no_data: fn(i32) -> String,
    inverted: fn(&TradeWindow) -> String,
    caption: fn(i32) -> String,
    pub disclaimer: &'static str,
}

static ITALIAN: Labels = Labels {
    month: "Mese",
    day: "Giorno",
    ticker: "Ticker",
    company: "Azienda",
    dividend: "Dividendi",
    yield_pct: "Rendimento (%)",
    delta_pct: "Delta (%)",
    buy_date: "Data acquisto",
    sell_date: "Data vendita",
    gain_pct: "Guadagno (%)",
    mean: |n| format!("Media {n} anni"),
    no_tickers: "Inserisci almeno un ticker con --tickers \"ENI.MI, ENEL.MI\" oppure --file tickers.csv.",
    no_data: |y| format!("Nessun dividendo trovato per il {y}."),
    inverted: |w| {
        format!(
            "Attenzione: l'acquisto ({:+} giorni) avviene dopo la vendita ({:+} giorni).",
            w.buy_offset_days, w.sell_offset_days
        )
    },
    caption: |y| format!("Date di stacco delle cedole raggruppate per mese per l'anno {y}:"),
    disclaimer: "Applicazione a scopo didattico. Non è uno strumento finanziario su cui basare \
                 strategie di investimento: l'autore non risponde di decisioni prese sulla base \
                 di questi dati.",
};

static ENGLISH: Labels = Labels {
    month: "Month",
    day: "Day",
    ticker: "Ticker",
    company: "Company",
    dividend: "Dividend",
    yield_pct: "Yield (%)",
    delta_pct: "Delta (%)",
    buy_date: "Buy date",
    sell_date: "Sell date",
    gain_pct: "Gain (%)",
    mean: |n| format!("{n}-yr mean"),
    no_tickers: "Enter at least one ticker with --tickers \"ENI.MI, ENEL.MI\" or --file tickers.csv.",
    no_data: |y| format!("No dividends found for {y}."),
    inverted: |w| {
        format!(
            "Warning: the buy ({:+} days) happens after the sell ({:+} days).",
            w.buy_offset_days, w.sell_offset_days
        )
    },
    caption: |y| format!("Ex-dividend dates grouped by month for {y}:"),
    disclaimer: "Built for learning purposes. It is not a financial tool to base investment \
                 strategies on: the author takes no responsibility for decisions made from \
                 this data.",
};

impl Labels {
    #[must_use]
    pub fn for_locale(locale: MonthLocale) -> &'static Self {
        match locale {
            MonthLocale::English => &ENGLISH,
            _ => &ITALIAN,
        }
    }

    #[must_use]
    pub fn no_data(&self, year: i32) -> String {
        (self.no_data)(year)
    }

    #[must_use]
    pub fn inverted(&self, window: &TradeWindow) -> String {
        (self.inverted)(window)
    }

    /// Line printed above the table.
    #[must_use]
    pub fn caption(&self, year: i32) -> String {
        (self.caption)(year)
    }

    /// Column headers, in output order.
    #[must_use]
    pub fn headers(&self, company: bool, history_years: u16) -> Vec<String> {
        vec![
            self.month.to_string(),
            self.day.to_string(),
            if company { self.company } else { self.ticker }.to_string(),
            self.dividend.to_string(),
            (self.mean)(history_years),
            self.yield_pct.to_string(),
            self.delta_pct.to_string(),
            self.buy_date.to_string(),
            self.sell_date.to_string(),
            self.gain_pct.to_string(),
        ]
    }
}

fn amount(d: Decimal) -> String {
    d.round_dp(4).normalize().to_string()
}

fn opt_amount(d: Option<Decimal>) -> String {
    d.map_or_else(|| ABSENT.to_string(), amount)
}

fn pct(d: Option<Decimal>) -> String {
    d.map_or_else(|| ABSENT.to_string(), |v| format!("{:.2}", v.round_dp(2)))
}

fn date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Cells of one row, matching [`Labels::headers`].
#[must_use]
pub fn cells(row: &CalendarRow, company: bool) -> Vec<String> {
    vec![
        row.month_name.clone(),
        row.day.to_string(),
        if company {
            row.company_name.clone()
        } else {
            row.ticker.clone()
        },
        amount(row.dividend.amount()),
        opt_amount(row.ten_year_mean),
        pct(row.yield_pct),
        pct(row.delta_pct),
        date(row.buy_date),
        date(row.sell_date),
        pct(row.gain_pct),
    ]
}

#[must_use]
pub fn render_table(report: &CalendarReport, headers: Vec<String>, company: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in &report.rows {
        builder.push_record(cells(row, company));
    }
    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// Render rows as CSV with a header line.
///
/// # Errors
/// Fails if the CSV writer cannot serialize a record.
pub fn render_csv(
    report: &CalendarReport,
    headers: Vec<String>,
    company: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&headers)?;
    for row in &report.rows {
        wtr.write_record(cells(row, company))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Render the whole report, including summaries and warnings, as JSON.
///
/// # Errors
/// Fails if serialization fails.
pub fn render_json(report: &CalendarReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
