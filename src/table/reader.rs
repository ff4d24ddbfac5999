use std::{fs::File, io::Read, path::Path};

use crate::foundation::{
    core::Row,
    error::{FacepipeError, FacepipeResult},
};

/// Options for splitting delimited text into rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReaderOptions {
    /// Options for a single-byte delimiter given as a `char`.
    pub fn with_delimiter(delimiter: char) -> FacepipeResult<Self> {
        if !delimiter.is_ascii() {
            return Err(FacepipeError::io(format!(
                "delimiter must be a single ASCII character, got {delimiter:?}"
            )));
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }
}

/// Streaming row source over any reader.
///
/// Rows are yielded in input order, the header included. Ragged rows are
/// passed through unchanged; field counts are checked by consumers.
pub struct TableReader<R: Read> {
    inner: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> TableReader<R> {
    pub fn new(src: R, opts: ReaderOptions) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(opts.delimiter)
            .from_reader(src)
            .into_records();
        Self { inner }
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = FacepipeResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        Some(
            record
                .map(|r| r.iter().map(str::to_owned).collect())
                .map_err(csv_error),
        )
    }
}

/// Read every row from `src`.
pub fn read_rows<R: Read>(src: R, opts: ReaderOptions) -> FacepipeResult<Vec<Row>> {
    let rows = TableReader::new(src, opts).collect::<FacepipeResult<Vec<_>>>()?;
    tracing::debug!(rows = rows.len(), "read csv table");
    Ok(rows)
}

/// Open `path` and read every row. The file handle is dropped on every exit path.
pub fn read_rows_from_path(path: &Path, opts: ReaderOptions) -> FacepipeResult<Vec<Row>> {
    let file = File::open(path)
        .map_err(|e| FacepipeError::io(format!("open csv '{}': {e}", path.display())))?;
    read_rows(file, opts)
}

fn csv_error(err: csv::Error) -> FacepipeError {
    match err.kind() {
        csv::ErrorKind::Utf8 { pos, err: source } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
            FacepipeError::io(format!("csv is not valid utf-8 near line {line}: {source}"))
        }
        _ => FacepipeError::io(format!("read csv: {err}")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/reader.rs"]
mod tests;
