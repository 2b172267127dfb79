//! Tickers come either from free text (`"ENI.MI, ENEL.MI"`) or from a CSV
//! file with a header row and a column named exactly `Ticker`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cedola_core::CedolaError;

/// Header of the CSV column holding ticker symbols.
pub const TICKER_COLUMN: &str = "Ticker";

/// Split comma-separated text into tickers.
///
/// Entries are trimmed and empty entries dropped. Order and duplicates are kept.
#[must_use]
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read tickers from CSV data with a [`TICKER_COLUMN`] header.
///
/// Blank cells are skipped; rows shorter than the header are tolerated.
///
/// # Errors
/// `MissingColumn` when the header lacks `Ticker`; `Parse` when the data is
/// not readable CSV.
pub fn read_ticker_csv<R: Read>(reader: R) -> Result<Vec<String>, CedolaError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let idx = rdr
        .headers()
        .map_err(|e| CedolaError::Parse(e.to_string()))?
        .iter()
        .position(|h| h == TICKER_COLUMN)
        .ok_or_else(|| CedolaError::missing_column(TICKER_COLUMN))?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| CedolaError::Parse(e.to_string()))?;
        if let Some(cell) = record.get(idx)
            && !cell.is_empty()
        {
            out.push(cell.to_string());
        }
    }
    Ok(out)
}

/// Read tickers from a CSV file on disk. See [`read_ticker_csv`].
///
/// # Errors
/// `Parse` when the file cannot be opened, otherwise as [`read_ticker_csv`].
pub fn read_ticker_file(path: impl AsRef<Path>) -> Result<Vec<String>, CedolaError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| CedolaError::Parse(format!("cannot open {}: {e}", path.display())))?;
    read_ticker_csv(file)
}
