use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CharcountError;

/// Read text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read all text from `path`, or from stdin when `path` is `None`
    pub fn read_text(path: Option<&Path>) -> Result<String, CharcountError> {
        match path {
            Some(file_path) => Self::read_from(File::open(file_path)?),
            None => Self::read_from(io::stdin().lock()),
        }
    }

    /// Read everything from `reader`, rejecting bytes that are not UTF-8
    pub fn read_from<R: Read>(mut reader: R) -> Result<String, CharcountError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        String::from_utf8(bytes).map_err(|e| CharcountError::InvalidInput(e.to_string()))
    }
}
