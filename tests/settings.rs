use files_to_bytes::{Radix, Settings, SettingsStore};
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips_every_combination() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.ini"));
    for radix in [Radix::Hex, Radix::Decimal] {
        for line_breaks in [true, false] {
            let s = Settings { radix, line_breaks };
            store.save(s).unwrap();
            assert_eq!(store.load(), s);
        }
    }
}

#[test]
fn missing_file_yields_defaults_and_creates_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.ini");
    let store = SettingsStore::new(&path);

    let first = store.load();
    assert_eq!(
        first,
        Settings {
            radix: Radix::Hex,
            line_breaks: true
        }
    );
    assert!(path.exists());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Mode=HEX\nLineBreaks=1\n");
    assert_eq!(store.load(), first);
}

#[test]
fn unknown_lines_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.ini");
    std::fs::write(&path, "# comment\nMode=DECIMAL\nTheme=dark\nLineBreaks=1\n").unwrap();
    let s = SettingsStore::new(&path).load();
    assert_eq!(s.radix, Radix::Decimal);
    assert!(s.line_breaks);
}
