use crate::convert::{self, OutputArtifact};
use crate::settings::Settings;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of converting every argument.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<OutputArtifact>,
    pub failed: Vec<PathBuf>,
}

/// Converts each input in order; a failed file is reported and skipped.
pub fn run_batch<R: BufRead, W: Write>(
    inputs: &[PathBuf],
    settings: Settings,
    outputs_dir: &Path,
    wait_for_enter: bool,
    input: &mut R,
    out: &mut W,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for path in inputs {
        match convert::convert(path, settings, outputs_dir) {
            Ok(artifact) => {
                writeln!(
                    out,
                    "Converted {} to {}",
                    path.display(),
                    artifact.path.display()
                )?;
                report.converted.push(artifact);
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                debug!(cause = ?std::error::Error::source(&e), "{e}");
                report.failed.push(path.clone());
            }
        }
    }

    if wait_for_enter {
        write!(out, "All good! Press Enter to exit...")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }
    Ok(report)
}
