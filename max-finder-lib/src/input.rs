//! Reads the single input line the pipeline runs on.

use crate::error::MaxFinderError;
use std::io::BufRead;

/// Reads one line from `reader` without its terminator.
///
/// End of input yields an empty string. Bytes that are not valid UTF-8 are
/// replaced rather than reported, so they surface as unparsable tokens.
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String, MaxFinderError> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
