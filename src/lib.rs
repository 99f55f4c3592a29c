pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod settings;
pub mod ui;

pub use convert::header;
pub use settings::{Radix, Settings, SettingsStore};
