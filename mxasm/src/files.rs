use crate::error::Error;
use std::fs;

pub const EXT_SOURCE: &str = ".as";
pub const EXT_MACRO: &str = ".am";
pub const EXT_OBJECT: &str = ".ob";
pub const EXT_ENTRY: &str = ".ent";
pub const EXT_EXTERN: &str = ".ext";

/// Base names longer than this cannot grow an extension on most filesystems.
pub const MAX_FILE_NAME_LENGTH: usize = 255;

pub fn with_extension(name: &str, ext: &str) -> String {
    format!("{name}{ext}")
}

pub fn read(name: &str, ext: &str) -> Result<String, Error> {
    let path = with_extension(name, ext);
    fs::read_to_string(&path).map_err(|e| Error::FileRead(path, e))
}

pub fn write(name: &str, ext: &str, contents: &str) -> Result<(), Error> {
    let path = with_extension(name, ext);
    fs::write(&path, contents).map_err(|e| Error::FileWrite(path, e))
}
