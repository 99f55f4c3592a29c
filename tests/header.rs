use files_to_bytes::convert::{ConvertError, convert};
use files_to_bytes::header::render_header;
use files_to_bytes::{Radix, Settings};

#[test]
fn twenty_byte_hex_header_snapshot() {
    let bytes: Vec<u8> = (0..20).collect();
    let text = render_header(
        "counting",
        &bytes,
        Settings {
            radix: Radix::Hex,
            line_breaks: true,
        },
    );
    insta::assert_snapshot!(text, @r"
    /*
     * Created by luynar software named file-to-bytes
     * You can download it from https://github.com/luynrs
     * files-to-bytes licensed under Apache License 2.0
     * https://www.apache.org/licenses/LICENSE-2.0
     */

    #ifndef FILE_counting_H
    #define FILE_counting_H

    unsigned char counting_data[] = {0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13};

    unsigned int counting_size = 20;

    #endif
    ");
}

#[test]
fn convert_reports_artifact() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.path().join("blob.bin");
    std::fs::write(&input, [7u8; 33]).unwrap();
    let outputs = dir.path().join("outputs");

    let artifact = convert(&input, Settings::default(), &outputs).unwrap();
    assert_eq!(artifact.path, outputs.join("blob.h"));
    assert_eq!(artifact.size, 33);
    let text = std::fs::read_to_string(&artifact.path).unwrap();
    assert!(text.ends_with("0x07,\n0x07};\n\nunsigned int blob_size = 33;\n\n#endif"));
}

#[test]
fn convert_missing_input_creates_nothing() {
    let dir = assert_fs::TempDir::new().unwrap();
    let outputs = dir.path().join("outputs");

    let err = convert(&dir.path().join("ghost.bin"), Settings::default(), &outputs).unwrap_err();
    assert!(matches!(err, ConvertError::InputOpen { .. }));
    assert!(err.to_string().starts_with("Failed to open "));
    assert!(!outputs.join("ghost.h").exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.path().join("data.bin");
    std::fs::write(&input, [1u8]).unwrap();
    // A regular file where the outputs directory should be
    let outputs = dir.path().join("outputs");
    std::fs::write(&outputs, "not a directory").unwrap();

    let err = convert(&input, Settings::default(), &outputs).unwrap_err();
    assert!(matches!(err, ConvertError::OutputOpen { .. }));
    assert!(err.to_string().starts_with("Failed to create "));
}
