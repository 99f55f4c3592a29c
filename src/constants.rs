// Centralized file names, layout numbers and fixed text
pub const SETTINGS_FILE_NAME: &str = "settings.ini";
pub const OUTPUT_DIR_NAME: &str = "outputs";
pub const HEADER_EXTENSION: &str = "h";
pub const ELEMENTS_PER_LINE: usize = 16;

pub const CONSOLE_TITLE: &str = "luynar's software | github.com/luynrs | Files-to-Bytes";
pub const BANNER: &str = "https://github.com/luynrs";

/// Comment block written at the top of every generated header.
pub const ATTRIBUTION: &[&str] = &[
    "Created by luynar software named file-to-bytes",
    "You can download it from https://github.com/luynrs",
    "files-to-bytes licensed under Apache License 2.0",
    "https://www.apache.org/licenses/LICENSE-2.0",
];
