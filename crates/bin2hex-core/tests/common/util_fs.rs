use std::io::Write;

use tempfile::NamedTempFile;

/// Write `bytes` to a fresh temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn input_file(bytes: &[u8]) -> NamedTempFile {
    let mut file =
        NamedTempFile::new().unwrap_or_else(|e| panic!("failed to create temp file: {e}"));
    file.write_all(bytes)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", file.path().display()));
    file.flush().unwrap();
    file
}
