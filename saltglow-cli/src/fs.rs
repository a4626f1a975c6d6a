//! Filesystem helpers built on `cap-std` and `camino`.

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file as text.
pub(crate) fn read_text(path: &Utf8Path) -> io::Result<String> {
    let mut text = String::new();
    open_utf8_file(path)?.read_to_string(&mut text)?;
    Ok(text)
}

/// Read a whole file as bytes.
pub(crate) fn read_bytes(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    open_utf8_file(path)?.read_to_end(&mut bytes)?;
    Ok(bytes)
}
