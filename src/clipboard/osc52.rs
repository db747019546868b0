//! OSC 52 clipboard backend
//!
//! Asks the terminal emulator to set the clipboard through an escape
//! sequence. Works over SSH and inside tmux when the terminal allows it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardResult, CopyError};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_TERMINATOR: &str = "\x07";

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout().lock();
    write_sequence(&mut stdout, text)
}

/// Write the full OSC 52 sequence for `text` and flush
fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|_| CopyError::WriteError)
}

/// `\x1b]52;c;{base64}\x07`, where `c` selects the clipboard (not primary)
pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), OSC52_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_osc52_simple() {
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_osc52_preserves_newlines() {
        let encoded = encode_osc52("a\nb");
        let payload = &encoded[OSC52_PREFIX.len()..encoded.len() - OSC52_TERMINATOR.len()];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "a\nb");
    }

    #[test]
    fn test_write_sequence_to_buffer() {
        let mut buffer = Vec::new();
        assert!(write_sequence(&mut buffer, "日本語").is_ok());

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, encode_osc52("日本語"));
    }

    #[test]
    fn test_write_failure_maps_to_write_error() {
        let result = write_sequence(&mut BrokenPipe, "text");
        assert_eq!(result, Err(CopyError::WriteError));
    }
}
