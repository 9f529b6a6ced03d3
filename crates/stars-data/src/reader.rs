//! CSV line loading and row extraction.
//!
//! The star-history file is two label-prefixed rows, so it is read as raw
//! lines and split by hand rather than through a record parser.

use std::io::{BufRead, BufReader};
use std::path::Path;

use stars_core::error::{Result, StarsError};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every line of `path`, in file order, with line terminators kept.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let file_err = |source| StarsError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(file_err)?;
    let lines = read_lines(BufReader::new(file)).map_err(file_err)?;

    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split line `index` on commas, drop the leading label cell and strip the
/// line terminator from the last cell.
///
/// A line holding only its label yields an empty row.
pub fn extract_row(lines: &[String], index: usize) -> Result<Vec<String>> {
    let line = lines.get(index).ok_or(StarsError::RowIndexOutOfRange {
        index,
        len: lines.len(),
    })?;

    let mut values: Vec<String> = line.split(',').skip(1).map(str::to_string).collect();
    if let Some(last) = values.last_mut() {
        *last = last.replace('\n', "").trim_end_matches('\r').to_string();
    }
    Ok(values)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    // ── load_lines ────────────────────────────────────────────────────────────

    #[test]
    fn test_load_lines_keeps_terminators() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "stars.csv", "Date,1/4/2021\nStars,100\n");

        let lines = load_lines(&path).unwrap();
        assert_eq!(lines, vec!["Date,1/4/2021\n", "Stars,100\n"]);
    }

    #[test]
    fn test_load_lines_without_final_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "stars.csv", "a,b\nc,d");

        let lines = load_lines(&path).unwrap();
        assert_eq!(lines, vec!["a,b\n", "c,d"]);
    }

    #[test]
    fn test_load_lines_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "empty.csv", "");
        assert!(load_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        let err = load_lines(&path).unwrap_err();
        match err {
            StarsError::FileRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ── extract_row ───────────────────────────────────────────────────────────

    #[test]
    fn test_extract_row_drops_label_and_newline() {
        let lines = owned(&["label,a,b,c\n"]);
        assert_eq!(extract_row(&lines, 0).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_row_crlf() {
        let lines = owned(&["Stars,1,2\r\n"]);
        assert_eq!(extract_row(&lines, 0).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_extract_row_length_is_fields_minus_one() {
        let lines = owned(&["Date,1/4/2021,1/5/2021,1/6/2021\n", "Stars,100,110,125"]);
        assert_eq!(extract_row(&lines, 0).unwrap().len(), 3);
        assert_eq!(extract_row(&lines, 1).unwrap(), vec!["100", "110", "125"]);
    }

    #[test]
    fn test_extract_row_label_only() {
        let lines = owned(&["Date\n"]);
        assert!(extract_row(&lines, 0).unwrap().is_empty());
    }

    #[test]
    fn test_extract_row_keeps_empty_cells() {
        let lines = owned(&["Stars,1,,3\n"]);
        assert_eq!(extract_row(&lines, 0).unwrap(), vec!["1", "", "3"]);
    }

    #[test]
    fn test_extract_row_out_of_range() {
        let lines = owned(&["Date,1/4/2021\n"]);
        let err = extract_row(&lines, 1).unwrap_err();
        assert!(matches!(
            err,
            StarsError::RowIndexOutOfRange { index: 1, len: 1 }
        ));
    }
}
