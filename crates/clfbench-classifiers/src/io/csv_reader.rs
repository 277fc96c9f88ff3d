//! Comma-separated dataset reader.
use std::path::Path;

use crate::error::{HarnessError, Result};

/// One raw input row: feature fields followed by the label field.
pub type Record = Vec<String>;

/// Read every record of a comma-separated file.
///
/// When `has_header` is set the first row is discarded. All rows, the header
/// included, must have the same number of fields.
pub fn read_records<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(has_header)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| map_csv_error(path, e))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    log::debug!(
        "Read {} records from {} (header: {})",
        records.len(),
        path.display(),
        has_header
    );
    Ok(records)
}

fn map_csv_error(path: &Path, err: csv::Error) -> HarnessError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => HarnessError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => HarnessError::Parse {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn header_row_is_discarded() {
        let file = write_tmp("a,b,label\n1,2,0\n3,4,1\n");
        let records = read_records(file.path(), true).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["1", "2", "0"]);
    }

    #[test]
    fn header_row_is_kept_when_absent() {
        let file = write_tmp("1,2,0\n3,4,1\n");
        let records = read_records(file.path(), false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], vec!["3", "4", "1"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_records("/nonexistent/clfbench/data.csv", true).unwrap_err();
        assert!(matches!(err, HarnessError::Io { .. }));
    }

    #[test]
    fn ragged_rows_are_parse_error() {
        let file = write_tmp("a,b,label\n1,2,0\n3,1\n");
        let err = read_records(file.path(), true).unwrap_err();
        assert!(matches!(err, HarnessError::Parse { .. }));
    }
}
