//! Color file loading
//!
//! A color file holds one candidate color per line. `\n`, `\r\n` and a
//! lone `\r` all end a line. Reading stops at the first line that is not
//! valid UTF-8; the lines before it are kept.

use std::fs;
use std::path::Path;

use crate::error::{ColorError, Result};

/// Read every non-empty line of a color file
///
/// # Errors
///
/// Returns `ColorError::FileUnavailable` if the file cannot be opened.
pub fn read_color_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read(path).map_err(|err| ColorError::file_unavailable(path, err))?;

    let mut lines = Vec::new();
    // Multi-byte UTF-8 sequences never contain `\r` or `\n` bytes.
    for raw in content.split(|&byte| byte == b'\n' || byte == b'\r') {
        match std::str::from_utf8(raw) {
            Ok("") => {}
            Ok(line) => lines.push(line.to_string()),
            Err(err) => {
                log::warn!("{}: stopping at undecodable line: {err}", path.display());
                break;
            }
        }
    }

    log::info!("read {} candidate colors from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read a color file, treating a missing or unreadable file as empty.
///
/// The failure is reported on the log.
pub fn read_color_file_or_empty(path: &Path) -> Vec<String> {
    read_color_file(path).unwrap_or_else(|err| {
        if err.is_recoverable() {
            log::warn!("{err}: {}", source_message(&err));
        } else {
            log::error!("{err}: {}", source_message(&err));
        }
        Vec::new()
    })
}

fn source_message(err: &ColorError) -> String {
    std::error::Error::source(err)
        .map(|source| source.to_string())
        .unwrap_or_else(|| "unknown cause".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ff0000ff\n10,20,30,40\n\ngarbage\n").unwrap();

        let lines = read_color_file(file.path()).unwrap();
        assert_eq!(lines, ["ff0000ff", "10,20,30,40", "garbage"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,2,3,4\n5,6,7,8").unwrap();

        assert_eq!(read_color_file(file.path()).unwrap(), ["1,2,3,4", "5,6,7,8"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,2,3,4\r\n").unwrap();

        assert_eq!(read_color_file(file.path()).unwrap(), ["1,2,3,4"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,2,3,4\r5,6,7,8\r").unwrap();

        assert_eq!(read_color_file(file.path()).unwrap(), ["1,2,3,4", "5,6,7,8"]);
    }

    #[test]
    fn test_invalid_utf8_keeps_earlier_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1,2,3,4\n\xff\xfe\n5,6,7,8\n").unwrap();

        assert_eq!(read_color_file(file.path()).unwrap(), ["1,2,3,4"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_color_file(&path).unwrap_err();
        assert!(matches!(err, ColorError::FileUnavailable { .. }));
        assert!(read_color_file_or_empty(&path).is_empty());
    }
}
