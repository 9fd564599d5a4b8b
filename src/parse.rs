use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{CompareError, Result};
use crate::types::{Record, RowSet};
use crate::utils::or_empty;

const INLINE_SOURCE: &str = "<inline>";

/// Read CSV text with a header line into a row-set.
///
/// Every data field is a present value, so an empty CSV field is the empty
/// string. Headers and values are kept exactly as written. Fields past the header are dropped and short rows leave their
/// trailing fields missing.
pub fn read_csv_str(csv_content: &str) -> Result<RowSet> {
    read_csv_from(csv_content.as_bytes(), Path::new(INLINE_SOURCE))
}

pub fn read_csv_file(path: impl AsRef<Path>) -> Result<RowSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_csv_from(file, path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read CSV row set");
    Ok(rows)
}

fn read_csv_from<R: Read>(reader: R, origin: &Path) -> Result<RowSet> {
    let csv_error = |source: csv::Error| CompareError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        let row: Record = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.as_str(), Some(value.to_string())))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Render a row-set as CSV text, using the first record's fields as header.
///
/// Missing values become empty fields. An empty row-set renders nothing.
pub fn to_csv_string(rows: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, rows, Path::new(INLINE_SOURCE))?;
    String::from_utf8(buffer).map_err(|e| CompareError::Io {
        path: PathBuf::from(INLINE_SOURCE),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

/// Write a row-set to a CSV file. Nothing is created for an empty row-set.
pub fn write_csv(path: impl AsRef<Path>, rows: &[Record]) -> Result<()> {
    let path = path.as_ref();
    if rows.is_empty() {
        return Ok(());
    }
    let file = File::create(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, rows, path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote CSV row set");
    Ok(())
}

fn write_csv_to<W: Write>(writer: W, rows: &[Record], origin: &Path) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let csv_error = |source: csv::Error| CompareError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let headers: Vec<&str> = first.keys().collect();
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
    wtr.write_record(&headers).map_err(csv_error)?;
    for row in rows {
        wtr.write_record(headers.iter().map(|h| or_empty(row.get(h))))
            .map_err(csv_error)?;
    }
    wtr.flush().map_err(|source| CompareError::Io {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(())
}
