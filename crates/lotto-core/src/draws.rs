//! Loading draw records from delimited text.
//!
//! Each row is one draw and each column one drawn number. The first row is a
//! header. Cells that are empty or not numeric are dropped while flattening,
//! so ragged rows and gaps are tolerated.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::error::{LottoError, LottoResult};

/// Parsed cells of a draw file, one inner vector per row.
/// `None` marks a cell that was empty or did not parse as a number.
#[derive(Debug, Clone, Default)]
pub struct RawRecordSet {
    pub rows: Vec<Vec<Option<f64>>>,
}

impl RawRecordSet {
    /// Row-major flattening that keeps only numeric cells.
    pub fn flatten(self) -> Vec<f64> {
        self.rows.into_iter().flatten().flatten().collect()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Clean up a path as typed (or pasted) at the prompt.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed.trim_matches('"').trim_matches('\'');

    let normalized: String = unquoted
        .chars()
        .map(|c| if c == '\\' || c == '/' { MAIN_SEPARATOR } else { c })
        .collect();
    PathBuf::from(normalized)
}

/// Directory that derived artifacts are written next to.
pub fn output_dir_for(input: &Path) -> PathBuf {
    match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Parse a single cell. Whitespace is ignored; NaN counts as missing.
fn parse_cell(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Any failure to open the file means it is not a readable file.
fn open_error(path: &Path, e: csv::Error) -> LottoError {
    match e.kind() {
        csv::ErrorKind::Io(io) => {
            debug!("cannot open {}: {io}", path.display());
            LottoError::FileNotFound(path.to_path_buf())
        }
        _ => LottoError::Csv(e.to_string()),
    }
}

/// Read the draw table at `path` without flattening it.
pub fn read_records(path: &Path) -> LottoResult<RawRecordSet> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(LottoError::FileNotFound(path.to_path_buf()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| open_error(path, e))?;

    let mut set = RawRecordSet::default();
    for result in rdr.records() {
        let record = result.map_err(|e| LottoError::Csv(e.to_string()))?;
        set.rows.push(record.iter().map(parse_cell).collect());
    }

    debug!(
        "read {} rows ({} cells) from {}",
        set.rows.len(),
        set.cell_count(),
        path.display()
    );
    Ok(set)
}

/// Load every numeric cell of the draw table at `path`, row by row.
pub fn load_draws(path: &Path) -> LottoResult<Vec<f64>> {
    let values = read_records(path)?.flatten();
    debug!("{} numeric values loaded", values.len());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_normalize_strips_quotes_and_whitespace() {
        let p = normalize_path("  \"draws.csv\"\n");
        assert_eq!(p, PathBuf::from("draws.csv"));

        let p = normalize_path("'draws.csv'");
        assert_eq!(p, PathBuf::from("draws.csv"));
    }

    #[test]
    fn test_normalize_strips_repeated_quotes() {
        assert_eq!(normalize_path("\"\"draws.csv\"\""), PathBuf::from("draws.csv"));
        assert_eq!(normalize_path("''draws.csv'"), PathBuf::from("draws.csv"));
    }

    #[test]
    fn test_unreadable_file_is_not_found() {
        let path = Path::new("/data/draws.csv");
        let denied = csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        let err = open_error(path, denied);
        assert!(matches!(err, LottoError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_normalize_separators() {
        let p = normalize_path(r"data\2024\draws.csv");
        let expected: PathBuf = ["data", "2024", "draws.csv"].iter().collect();
        assert_eq!(p, expected);
    }

    #[test]
    fn test_output_dir_for_bare_file_name() {
        assert_eq!(output_dir_for(Path::new("draws.csv")), PathBuf::from("."));
        assert_eq!(
            output_dir_for(Path::new("/tmp/x/draws.csv")),
            PathBuf::from("/tmp/x")
        );
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(" 7 "), Some(7.0));
        assert_eq!(parse_cell("12.0"), Some(12.0));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("abc"), None);
        assert_eq!(parse_cell("NaN"), None);
    }

    #[test]
    fn test_load_skips_header_and_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "draws.csv",
            "n1,n2,n3\n1,2,3\n4,,6\n7,x\n",
        );
        let values = load_draws(&path).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 6.0, 7.0]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_draws(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LottoError::FileNotFound(_)));
    }

    #[test]
    fn test_load_empty_path() {
        let err = load_draws(Path::new("")).unwrap_err();
        assert!(matches!(err, LottoError::FileNotFound(_)));
    }

    #[test]
    fn test_load_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_draws(dir.path()).unwrap_err();
        assert!(matches!(err, LottoError::FileNotFound(_)));
    }

    #[test]
    fn test_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "empty.csv", "a,b,c\n");
        assert!(load_draws(&path).unwrap().is_empty());
    }
}
