pub mod gather;
pub mod header;

use crate::constants::HEADER_EXTENSION;
use crate::settings::Settings;
use std::{
    fmt, fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Debug)]
pub enum ConvertError {
    InputOpen { path: PathBuf, source: io::Error },
    OutputOpen { path: PathBuf, source: io::Error },
    OutputWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ConvertError::InputOpen { path, .. } => write!(f, "Failed to open {}", path.display()),
            ConvertError::OutputOpen { path, .. } => {
                write!(f, "Failed to create {}", path.display())
            }
            ConvertError::OutputWrite { path, .. } => {
                write!(f, "Failed to write {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputOpen { source, .. }
            | ConvertError::OutputOpen { source, .. }
            | ConvertError::OutputWrite { source, .. } => Some(source),
        }
    }
}

/// A generated header on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub path: PathBuf,
    /// Number of array elements, equal to the input length.
    pub size: usize,
}

/// One input file converted with a snapshot of the settings.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub settings: Settings,
}

impl ConversionJob {
    pub fn new(
        input: impl Into<PathBuf>,
        settings: Settings,
    ) -> Self {
        Self {
            input: input.into(),
            settings,
        }
    }

    /// `<outputs_dir>/<stem>.h`
    pub fn output_path(
        &self,
        outputs_dir: &Path,
    ) -> PathBuf {
        let stem = gather::stem_of(&self.input);
        outputs_dir.join(format!("{stem}.{HEADER_EXTENSION}"))
    }

    pub fn run(
        &self,
        outputs_dir: &Path,
    ) -> Result<OutputArtifact, ConvertError> {
        let bytes = gather::read_input(&self.input).map_err(|source| ConvertError::InputOpen {
            path: self.input.clone(),
            source,
        })?;

        // A failure here shows up as the output open failing below
        let _ = fs::create_dir_all(outputs_dir);

        let path = self.output_path(outputs_dir);
        let file = fs::File::create(&path).map_err(|source| ConvertError::OutputOpen {
            path: path.clone(),
            source,
        })?;
        let stem = gather::stem_of(&self.input);
        write_or_discard(BufWriter::new(file), &path, &stem, &bytes, self.settings)?;

        debug!(
            input = %self.input.display(),
            output = %path.display(),
            size = bytes.len(),
            "converted"
        );
        Ok(OutputArtifact {
            path,
            size: bytes.len(),
        })
    }
}

/// Convert `input` into a header under `outputs_dir`.
pub fn convert(
    input: &Path,
    settings: Settings,
    outputs_dir: &Path,
) -> Result<OutputArtifact, ConvertError> {
    ConversionJob::new(input, settings).run(outputs_dir)
}

/// Writes the header to `out`; on failure the partially written `path` is removed.
fn write_or_discard<W: Write>(
    mut out: W,
    path: &Path,
    stem: &str,
    bytes: &[u8],
    settings: Settings,
) -> Result<(), ConvertError> {
    let written = header::write_header(&mut out, stem, bytes, settings).and_then(|_| out.flush());
    if let Err(source) = written {
        drop(out);
        if let Err(e) = fs::remove_file(path) {
            debug!("Could not remove partial {}: {e}", path.display());
        }
        return Err(ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
