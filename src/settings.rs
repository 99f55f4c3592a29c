use anyhow::Result;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Number formatting used for array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Decimal,
}

impl Radix {
    pub fn as_str(self) -> &'static str {
        match self {
            Radix::Hex => "HEX",
            Radix::Decimal => "DECIMAL",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub radix: Radix,
    /// Insert a newline after every 16th element.
    pub line_breaks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            radix: Radix::Hex,
            line_breaks: true,
        }
    }
}

impl Settings {
    /// Parse `Key=Value` lines. Unknown lines are ignored and missing keys keep
    /// their defaults; `Mode` other than `HEX` means decimal, `LineBreaks` other
    /// than `1` means off.
    pub fn parse(text: &str) -> Self {
        let mut settings = Settings::default();
        for line in text.lines() {
            if let Some(value) = line.strip_prefix("Mode=") {
                settings.radix = if value == "HEX" {
                    Radix::Hex
                } else {
                    Radix::Decimal
                };
            } else if let Some(value) = line.strip_prefix("LineBreaks=") {
                settings.line_breaks = value == "1";
            }
        }
        settings
    }

    pub fn render(&self) -> String {
        format!(
            "Mode={}\nLineBreaks={}\n",
            self.radix,
            if self.line_breaks { "1" } else { "0" }
        )
    }
}

/// The flat settings file kept next to the executable.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, writing a default file first if none exists.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            let settings = Settings::default();
            if let Err(e) = self.save(settings) {
                warn!("Could not create {}: {e}", self.path.display());
            }
            return settings;
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let settings = Settings::parse(&text);
                debug!(?settings, path = %self.path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(
                    "Could not read {}, using defaults: {e}",
                    self.path.display()
                );
                Settings::default()
            }
        }
    }

    /// Overwrite the file with the two current values.
    pub fn save(
        &self,
        settings: Settings,
    ) -> Result<()> {
        fs::write(&self.path, settings.render())?;
        debug!(?settings, path = %self.path.display(), "saved settings");
        Ok(())
    }
}
