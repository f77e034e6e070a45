//! Marshal engine: decode a fixed-width line into a record and encode it back.
//!
//! Both directions walk [`Layout::fields`] in table order. Columns are sliced by
//! character position, so a line containing multi-byte characters is still cut at the
//! published column boundaries (and then rejected by the text character class).

use crate::coerce;
use crate::error::{ErrorKind, Fault, RecordError};
use crate::layout::Layout;

/// Decode `line` into `record`. Returns the number of characters consumed (the record
/// width) so a caller can advance over a stream of records.
///
/// The line is decoded into a fresh record which replaces `record` only on success: a
/// short line or a rejected column leaves `record` exactly as it was.
pub fn decode<R: Default>(layout: &Layout<R>, record: &mut R, line: &str) -> Result<usize, RecordError> {
    let bounds = char_bounds(line, layout.width);
    if bounds.len() <= layout.width {
        return Err(RecordError::Length {
            record: layout.name,
            expected: layout.width,
            found: bounds.len().saturating_sub(1),
        });
    }
    let mut scratch = R::default();
    for f in &layout.fields {
        let (from, to) = match (bounds.get(f.start), bounds.get(f.end())) {
            (Some(&from), Some(&to)) => (from, to),
            _ => {
                return Err(Fault::new(
                    ErrorKind::SchemaMismatch,
                    format!("span {}..{} exceeds record width {}", f.start, f.end(), layout.width),
                )
                .at(layout.name, f.name)
                .into())
            }
        };
        let value = coerce::decode(f.kind, &line[from..to]).map_err(|e| e.at(layout.name, f.name))?;
        f.write(&mut scratch, value).map_err(|e| e.at(layout.name, f.name))?;
    }
    *record = scratch;
    Ok(layout.width)
}

/// Encode `record` as exactly `layout.width` characters.
pub fn encode<R>(layout: &Layout<R>, record: &R) -> String {
    let mut out = String::with_capacity(layout.width);
    let mut written = 0usize;
    for f in &layout.fields {
        out.push_str(&coerce::encode(f.kind, &f.read(record), f.length));
        written += f.length;
    }
    // only reachable with an unverified table
    if written < layout.width {
        out.extend(std::iter::repeat(' ').take(layout.width - written));
    } else if written > layout.width {
        out = out.chars().take(layout.width).collect();
    }
    out
}

/// Byte offsets of the first `width + 1` character boundaries of `line` (fewer when
/// the line is short). Index `i` is where character `i` starts.
fn char_bounds(line: &str, width: usize) -> Vec<usize> {
    let mut bounds: Vec<usize> = line.char_indices().map(|(i, _)| i).take(width + 1).collect();
    if bounds.len() <= width {
        bounds.push(line.len());
    }
    bounds
}
