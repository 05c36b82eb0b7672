//! Ledger CSV codec
//!
//! The persisted layout is a metadata block followed by a header and one
//! record per entry:
//!
//! ```text
//! #META:EXCHANGE_RATE,1.38
//! #META:BABU_INCOME,4500
//! #META:MAMU_INCOME,3200
//! ID,Description,Amount,Category,Currency,Timestamp
//! 1,Rent,800,Housing,GBP,2025-01-15 09:30:00
//! ```
//!
//! Fields containing a comma, double quote or line break are quoted with
//! internal quotes doubled. Loading is lenient: records that do not decode
//! into a valid entry are skipped and loading carries on, so a partially
//! corrupt file still yields every readable entry.

use std::io::{Read, Write};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{parse_timestamp, Category, Currency};

/// Marker that introduces a metadata record
pub const METADATA_PREFIX: &str = "#META:";

/// Column names of the entry header record
pub const HEADER: [&str; 6] = ["ID", "Description", "Amount", "Category", "Currency", "Timestamp"];

const KEY_EXCHANGE_RATE: &str = "EXCHANGE_RATE";
const KEY_INCOME_A: &str = "BABU_INCOME";
const KEY_INCOME_B: &str = "MAMU_INCOME";

/// Outcome of a lenient load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries added to the ledger
    pub loaded: usize,
    /// Records dropped because they did not decode into an entry
    pub skipped: usize,
}

/// Serialize settings and entries to `writer`
pub fn write_ledger<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for (key, value) in [
        (KEY_EXCHANGE_RATE, ledger.exchange_rate()),
        (KEY_INCOME_A, ledger.income_a()),
        (KEY_INCOME_B, ledger.income_b()),
    ] {
        csv.write_record([format!("{METADATA_PREFIX}{key}"), value.to_string()])?;
    }

    csv.write_record(HEADER)?;

    for entry in ledger.entries() {
        csv.write_record([
            entry.id().to_string(),
            entry.description.clone(),
            entry.amount.to_string(),
            entry.category.to_string(),
            entry.currency.to_string(),
            entry.timestamp_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Replace the contents of `ledger` with what can be decoded from `reader`.
///
/// The ledger is cleared first, so ids restart at 1. Metadata is applied
/// through the ledger's setters; values they reject are ignored. Entry records
/// that fail to decode are counted in [`LoadReport::skipped`] and otherwise
/// dropped.
///
/// A record that fails to decode after running across several physical lines
/// (an unbalanced quote, for instance) is decoded again one line at a time, so
/// a single stray quote costs one line rather than the rest of the file.
pub fn read_ledger<R: Read>(ledger: &mut Ledger, mut reader: R) -> LedgerResult<LoadReport> {
    ledger.clear();

    let mut data = Vec::new();
    if let Err(e) = reader.read_to_end(&mut data) {
        tracing::warn!(error = %e, read = data.len(), "stopped reading ledger early");
    }

    let mut fold = Fold {
        ledger,
        report: LoadReport::default(),
        header_skipped: false,
    };

    let mut csv = record_reader(&data);
    let mut record = StringRecord::new();

    loop {
        let start = byte_offset(&csv);
        let read = csv.read_record(&mut record);
        let end = byte_offset(&csv);

        let decoded = match read {
            Ok(false) => break,
            Ok(true) => fold.apply(&record),
            Err(e) => {
                tracing::debug!(error = %e, "unreadable record");
                false
            }
        };

        if !decoded {
            fold.recover(&data[start..end.max(start)]);
        }
        if end <= start {
            break;
        }
    }

    Ok(fold.report)
}

fn record_reader(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data)
}

fn byte_offset(csv: &csv::Reader<&[u8]>) -> usize {
    usize::try_from(csv.position().byte()).unwrap_or(usize::MAX)
}

/// Running state of one load
struct Fold<'a> {
    ledger: &'a mut Ledger,
    report: LoadReport,
    header_skipped: bool,
}

impl Fold<'_> {
    /// Apply one record. Returns `false` if it should have been an entry but
    /// did not decode.
    fn apply(&mut self, record: &StringRecord) -> bool {
        let first = record.get(0).unwrap_or_default();

        if let Some(key) = first.strip_prefix(METADATA_PREFIX) {
            apply_metadata(self.ledger, key, record);
            return true;
        }

        if !self.header_skipped && first == HEADER[0] {
            self.header_skipped = true;
            return true;
        }

        if add_record(self.ledger, record) {
            self.report.loaded += 1;
            true
        } else {
            false
        }
    }

    /// Handle the raw bytes of a record that did not decode
    fn recover(&mut self, raw: &[u8]) {
        let lines: Vec<&[u8]> = raw
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() <= 1 {
            let text = String::from_utf8_lossy(raw);
            tracing::debug!(line = %text.trim_end(), "skipping malformed entry");
            self.report.skipped += 1;
            return;
        }

        tracing::debug!(lines = lines.len(), "re-reading malformed multi-line record line by line");
        for line in lines {
            let mut csv = record_reader(line);
            let mut record = StringRecord::new();
            let decoded = match csv.read_record(&mut record) {
                Ok(true) => self.apply(&record),
                Ok(false) => true,
                Err(_) => false,
            };
            if !decoded {
                let text = String::from_utf8_lossy(line);
                tracing::debug!(line = %text, "skipping malformed entry");
                self.report.skipped += 1;
            }
        }
    }
}

fn apply_metadata(ledger: &mut Ledger, key: &str, record: &StringRecord) {
    if record.len() != 2 {
        return;
    }
    let Some(value) = record.get(1).and_then(|v| v.trim().parse::<f64>().ok()) else {
        return;
    };

    let applied = match key {
        KEY_EXCHANGE_RATE => ledger.set_exchange_rate(value),
        KEY_INCOME_A => ledger.set_income_a(value),
        KEY_INCOME_B => ledger.set_income_b(value),
        _ => return,
    };

    if let Err(e) = applied {
        tracing::debug!(key, error = %e, "ignoring metadata value");
    }
}

fn add_record(ledger: &mut Ledger, record: &StringRecord) -> bool {
    if record.len() != HEADER.len() {
        return false;
    }

    // Any value `f64` formats back to, including "inf" and "NaN", is accepted
    let Ok(amount) = record[2].trim().parse::<f64>() else {
        return false;
    };
    let (Ok(category), Ok(currency)) = (Category::parse(&record[3]), Currency::parse(&record[4]))
    else {
        return false;
    };
    let description = &record[1];

    match parse_timestamp(&record[5]) {
        Some(created_at) => {
            ledger.add_entry_at(description, amount, category, currency, created_at);
        }
        None => {
            ledger.add_entry(description, amount, category, currency);
        }
    }
    true
}
