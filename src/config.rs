use crate::cli::Cli;
use crate::constants::{OUTPUT_DIR_NAME, SETTINGS_FILE_NAME};
use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<String>,
    /// Directory the settings file and the outputs directory live in.
    pub home: PathBuf,
    pub wait_for_enter: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_parsed(Cli::parse())
    }

    pub fn from_parsed(cli: Cli) -> Result<Self> {
        let home = match cli.home {
            Some(dir) => dir,
            None => executable_dir()?,
        };
        Ok(Config {
            paths: cli.paths,
            home,
            wait_for_enter: !cli.no_wait,
        })
    }

    pub fn settings_path(&self) -> PathBuf {
        self.home.join(SETTINGS_FILE_NAME)
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.home.join(OUTPUT_DIR_NAME)
    }

    /// No file arguments means the settings prompt.
    pub fn is_interactive(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable path {} has no parent directory", exe.display()))
}
