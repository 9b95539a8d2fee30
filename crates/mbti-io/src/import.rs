use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use thiserror::Error;

use mbti_model::{CountryRecord, MbtiType, Table};

use crate::ColumnMergeRule;

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Header of the column holding country names.
    pub country_column: String,
    /// How to decode raw CSV bytes into text fields.
    pub encoding: TextEncoding,
    /// Raw header → canonical type mapping; see [`ColumnMergeRule`].
    pub merge: ColumnMergeRule,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            country_column: "Country".to_string(),
            encoding: TextEncoding::Auto,
            merge: ColumnMergeRule::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    /// Attempt to decode as UTF-8; if a field contains invalid UTF-8, fall
    /// back to Windows-1252. Matches common Excel CSV exports.
    Auto,
    /// Decode as UTF-8 and reject invalid byte sequences.
    Utf8,
    /// Decode as Windows-1252 (aka CP-1252).
    Windows1252,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv input was empty")]
    EmptyInput,
    #[error("csv header has no {0:?} column")]
    MissingCountryColumn(String),
    #[error("csv parse error at row {row}: {reason}")]
    Parse { row: u64, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What each CSV column contributes to the table.
#[derive(Clone, Copy, Debug)]
enum ColumnTarget {
    Country,
    Share(MbtiType),
    Ignored,
}

/// Load a CSV stream into an immutable [`Table`].
///
/// The first record must be a header row naming the country column and the
/// type columns. Columns the merge rule does not cover are skipped with a
/// warning; duplicate country rows fold by summation inside
/// [`Table::new`].
pub fn load_table<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Table, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        // Headers are handled manually so row numbers in errors stay consistent.
        .has_headers(false)
        // Accept rows with varying column counts; short rows read as missing.
        .flexible(true)
        .from_reader(reader);

    let mut record = ByteRecord::new();
    let mut row: u64 = 0;

    let has_header = csv_reader
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(e, row + 1))?;
    if !has_header {
        return Err(LoadError::EmptyInput);
    }
    row += 1;

    let targets = resolve_header(&record, row, options)?;

    let country_at = targets
        .iter()
        .position(|t| matches!(t, ColumnTarget::Country))
        .ok_or_else(|| LoadError::MissingCountryColumn(options.country_column.clone()))?;

    if !targets.iter().any(|t| matches!(t, ColumnTarget::Share(_))) {
        log::warn!("csv header maps no MBTI type columns; every share will be missing");
    }

    let mut rows: Vec<CountryRecord> = Vec::new();
    loop {
        record.clear();
        match csv_reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                row += 1;
                let country = decode_field(
                    record.get(country_at).unwrap_or(b""),
                    row,
                    country_at as u64 + 1,
                    options.encoding,
                )?;
                let country = country.trim();
                if country.is_empty() {
                    log::warn!("row {row} has an empty country name, skipping");
                    continue;
                }

                let mut rec = CountryRecord::new(country);
                for (at, target) in targets.iter().enumerate() {
                    let ColumnTarget::Share(mbti) = target else {
                        continue;
                    };
                    let raw = record.get(at).unwrap_or(b"");
                    let field = decode_field(raw, row, at as u64 + 1, options.encoding)?;
                    if let Some(value) = parse_share(field.as_ref()) {
                        rec.merge_share(*mbti, value);
                    }
                }
                rows.push(rec);
            }
            Err(e) => return Err(map_csv_error(e, row + 1)),
        }
    }

    Ok(Table::new(rows))
}

/// Convenience wrapper over [`load_table`] for filesystem paths.
pub fn load_table_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Table, LoadError> {
    let file = File::open(path)?;
    load_table(BufReader::new(file), options)
}

fn resolve_header(
    record: &ByteRecord,
    row: u64,
    options: &LoadOptions,
) -> Result<Vec<ColumnTarget>, LoadError> {
    let mut targets = Vec::with_capacity(record.len());
    for (at, raw) in record.iter().enumerate() {
        let header = decode_field(raw, row, at as u64 + 1, options.encoding)?;
        let header = header.trim();
        let target = if header.eq_ignore_ascii_case(&options.country_column) {
            ColumnTarget::Country
        } else if let Some(mbti) = options.merge.resolve(header) {
            ColumnTarget::Share(mbti)
        } else {
            log::warn!("ignoring unmapped csv column {header:?}");
            ColumnTarget::Ignored
        };
        targets.push(target);
    }
    Ok(targets)
}

/// Coerce one cell to a percentage share.
///
/// Empty and non-numeric cells (including literal NaN/inf) are missing, not
/// zero and not an error. A trailing `%` is tolerated.
fn parse_share(field: &str) -> Option<f64> {
    let v = field.trim();
    if v.is_empty() {
        return None;
    }
    let v = v.strip_suffix('%').map(str::trim_end).unwrap_or(v);
    match v.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

fn decode_field<'a>(
    field: &'a [u8],
    row: u64,
    column: u64,
    encoding: TextEncoding,
) -> Result<Cow<'a, str>, LoadError> {
    // Handle a UTF-8 BOM at the start of the file; common in Excel exports.
    let field = if row == 1 && column == 1 && field.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &field[3..]
    } else {
        field
    };

    match encoding {
        TextEncoding::Utf8 => {
            std::str::from_utf8(field)
                .map(Cow::Borrowed)
                .map_err(|e| LoadError::Parse {
                    row,
                    reason: format!("invalid UTF-8 in column {column}: {e}"),
                })
        }
        TextEncoding::Windows1252 => {
            let (cow, _, _) = WINDOWS_1252.decode(field);
            Ok(cow)
        }
        TextEncoding::Auto => match std::str::from_utf8(field) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(_) => {
                let (cow, _, _) = WINDOWS_1252.decode(field);
                Ok(cow)
            }
        },
    }
}

fn map_csv_error(err: csv::Error, fallback_row: u64) -> LoadError {
    let reason = err.to_string();
    let pos = err.position().cloned();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => LoadError::Io(e),
        _ => {
            let row = pos
                .map(|p| p.record())
                .filter(|r| *r > 0)
                .unwrap_or(fallback_row);
            LoadError::Parse { row, reason }
        }
    }
}
