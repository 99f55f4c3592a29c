use crate::constants::{ATTRIBUTION, ELEMENTS_PER_LINE};
use crate::settings::{Radix, Settings};
use std::io::{self, Write};

/// Turns a file stem into a C identifier: anything outside `[A-Za-z0-9_]`
/// becomes `_` and a leading digit gets a `_` prefix.
pub fn identifier_for(stem: &str) -> String {
    let mut id: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}

/// Writes the comma-separated array elements.
pub fn write_array_body<W: Write>(
    out: &mut W,
    bytes: &[u8],
    settings: Settings,
) -> io::Result<()> {
    let last = bytes.len().saturating_sub(1);
    for (i, byte) in bytes.iter().enumerate() {
        match settings.radix {
            Radix::Hex => write!(out, "0x{byte:02x}")?,
            Radix::Decimal => write!(out, "{byte}")?,
        }
        if i < last {
            out.write_all(b",")?;
        }
        if settings.line_breaks && i % ELEMENTS_PER_LINE == ELEMENTS_PER_LINE - 1 {
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Writes the full header: attribution, include guard, data array and size.
pub fn write_header<W: Write>(
    out: &mut W,
    stem: &str,
    bytes: &[u8],
    settings: Settings,
) -> io::Result<()> {
    let id = identifier_for(stem);

    writeln!(out, "/*")?;
    for line in ATTRIBUTION {
        writeln!(out, " * {line}")?;
    }
    writeln!(out, " */\n")?;
    writeln!(out, "#ifndef FILE_{id}_H\n#define FILE_{id}_H\n")?;
    write!(out, "unsigned char {id}_data[] = {{")?;
    write_array_body(out, bytes, settings)?;
    writeln!(out, "}};\n")?;
    writeln!(out, "unsigned int {id}_size = {};\n", bytes.len())?;
    write!(out, "#endif")?;
    Ok(())
}

/// In-memory variant of [`write_header`].
pub fn render_header(
    stem: &str,
    bytes: &[u8],
    settings: Settings,
) -> String {
    let mut buf = Vec::with_capacity(bytes.len() * 5 + 512);
    // Writing into a Vec cannot fail
    let _ = write_header(&mut buf, stem, bytes, settings);
    String::from_utf8_lossy(&buf).into_owned()
}

/// The array body alone, as text.
pub fn render_array_body(
    bytes: &[u8],
    settings: Settings,
) -> String {
    let mut buf = Vec::with_capacity(bytes.len() * 5);
    let _ = write_array_body(&mut buf, bytes, settings);
    String::from_utf8_lossy(&buf).into_owned()
}
