#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

/// Builds a fixture tree:
/// root/
///   home/              (settings.ini and outputs/ land here)
///   input/counting.bin (bytes 0..20)
///   input/empty.dat    (zero bytes)
///   input/sprite sheet.png (non-identifier stem)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("home").create_dir_all().unwrap();
    let input = td.child("input");
    input
        .child("counting.bin")
        .write_binary(&(0u8..20).collect::<Vec<_>>())
        .unwrap();
    input.child("empty.dat").write_binary(&[]).unwrap();
    input
        .child("sprite sheet.png")
        .write_binary(&[0x89, b'P', b'N', b'G'])
        .unwrap();
    td
}

/// Binary invocation pinned to the fixture's home directory.
pub fn ftb(td: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("files-to-bytes");
    cmd.current_dir(td.path())
        .env_remove("RUST_LOG")
        .arg("--home")
        .arg(td.child("home").path());
    cmd
}
