//! Input helpers.

use std::fs;
use std::io::Read;

/// Read the whole of `path`, treating `-` as `stdin`.
pub fn read_input(path: &str, stdin: &mut dyn Read) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dash_reads_stdin() {
        let mut stdin: &[u8] = b"{\"gameID\":\"x\"}";
        assert_eq!(read_input("-", &mut stdin).unwrap(), "{\"gameID\":\"x\"}");
    }

    #[test]
    fn reads_files_and_reports_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        fs::File::create(&path)
            .unwrap()
            .write_all(b"{}")
            .unwrap();
        let mut stdin: &[u8] = b"";
        let p = path.to_str().unwrap();
        assert_eq!(read_input(p, &mut stdin).unwrap(), "{}");

        let missing = dir.path().join("missing.json");
        let err = read_input(missing.to_str().unwrap(), &mut stdin).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }
}
