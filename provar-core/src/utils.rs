//! Shared utilities: timestamps and append-only error logs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

/// Log file for UniProt records that could not be downloaded.
pub const UNIPROT_ERROR_LOG: &str = "error_uniprot.log";

/// Log file for variants dropped on reference-residue mismatch.
pub const VARIANTS_ERROR_LOG: &str = "error_variants.log";

/// Log file for REST calls that failed with an unexpected status.
pub const URL_ERROR_LOG: &str = "error_url.log";

/// Formatted local time for log lines.
pub fn current_time() -> String {
    Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Appends one message line to a log file, creating it if needed.
pub fn append_log(path: &Path, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;

    #[test]
    fn append_log_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join(URL_ERROR_LOG);

        append_log(&log, "first").unwrap();
        append_log(&log, "second").unwrap();

        assert_eq!(read_to_string(&log).unwrap(), "first\nsecond\n");
    }
}
