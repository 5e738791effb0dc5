//! OSC 52 clipboard backend
//!
//! Asks the terminal to set the clipboard. The escape sequence goes to
//! stderr so that suggestions printed on stdout stay clean when piped.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_osc52(&mut io::stderr(), text)
}

pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    out.flush().map_err(|_| ClipboardError::WriteError)
}

pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}
