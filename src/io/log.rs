//! Quality-issue log sink.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::QualityIssue;
use crate::error::AppError;

/// Write one rendered issue per line, or remove a stale log from a prior run
/// when the current run is clean.
pub fn write_issue_log(path: &Path, issues: &[QualityIssue]) -> Result<(), AppError> {
    if issues.is_empty() {
        return match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::new(
                2,
                format!("Failed to remove stale issue log '{}': {e}", path.display()),
            )),
        };
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create issue log '{}': {e}", path.display()))
    })?;
    for issue in issues {
        writeln!(file, "{issue}")
            .map_err(|e| AppError::new(2, format!("Failed to write issue log: {e}")))?;
    }

    Ok(())
}
