//! Stream handling: decode a buffer holding one or more records of the same type.
//!
//! Records are fixed width, so a record whose columns are rejected still occupies
//! its width and the walk continues after it. Line breaks between records are
//! skipped; a line that breaks before the record width is removed as too short and
//! the walk resumes on the next line. A trailing fragment shorter than the record
//! width ends the walk.

use crate::error::RecordError;
use crate::segments::Segment;

/// Result of decoding a stream: records that decoded (and, when asked, validated)
/// and the spans that were rejected.
#[derive(Debug)]
pub struct StreamDecodeResult<R> {
    pub records: Vec<DecodedRecord<R>>,
    pub removed: Vec<RemovedRecord>,
}

#[derive(Debug)]
pub struct DecodedRecord<R> {
    pub record: R,
    /// Byte range of the record within the input.
    pub byte_range: (usize, usize),
}

#[derive(Debug)]
pub struct RemovedRecord {
    pub byte_range: (usize, usize),
    pub error: RecordError,
}

/// Decode every record of type `R` in `input`. With `validate` set, records that
/// decode but fail validation are moved to `removed` as well.
pub fn decode_stream<R: Segment>(input: &str, validate: bool) -> StreamDecodeResult<R> {
    let mut records = Vec::new();
    let mut removed = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];
        let skipped = rest.len() - rest.trim_start_matches(&['\r', '\n'][..]).len();
        if skipped > 0 {
            offset += skipped;
            continue;
        }

        if let Some((found, at)) = line_break_within(rest, R::width()) {
            removed.push(RemovedRecord {
                byte_range: (offset, offset + at),
                error: RecordError::Length {
                    record: R::layout().name,
                    expected: R::width(),
                    found,
                },
            });
            offset += at;
            continue;
        }

        let mut record = R::default();
        let result = match record.decode(rest) {
            Err(error @ RecordError::Length { .. }) => {
                removed.push(RemovedRecord {
                    byte_range: (offset, input.len()),
                    error,
                });
                break;
            }
            other => other,
        };
        let consumed = byte_len(rest, R::width());
        let byte_range = (offset, offset + consumed);
        match result.and_then(|_| if validate { record.validate() } else { Ok(()) }) {
            Ok(()) => records.push(DecodedRecord { record, byte_range }),
            Err(error) => removed.push(RemovedRecord { byte_range, error }),
        }
        offset += consumed;
    }

    StreamDecodeResult { records, removed }
}

/// Re-encode only the records that survived, one per line.
pub fn encode_compliant<R: Segment>(result: &StreamDecodeResult<R>) -> String {
    let mut out = String::with_capacity(result.records.len() * (R::width() + 1));
    for decoded in &result.records {
        out.push_str(&decoded.record.encode());
        out.push('\n');
    }
    out
}

/// Character count and byte offset of the first line break among the first `width`
/// characters of `s`.
fn line_break_within(s: &str, width: usize) -> Option<(usize, usize)> {
    s.char_indices()
        .take(width)
        .enumerate()
        .find(|(_, (_, c))| matches!(c, '\r' | '\n'))
        .map(|(n, (i, _))| (n, i))
}

/// Bytes taken by the first `chars` characters of `s`.
fn byte_len(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::segments::K1Segment;

    fn k1(name: &str, classification: &str) -> String {
        format!("K1{:<30}{}", name, classification)
    }

    #[test]
    fn walks_records_separated_by_newlines() {
        let input = format!("{}\n{}\r\n", k1("FIRST NATIONAL BANK", "01"), k1("ACME RETAIL", "05"));
        let result = decode_stream::<K1Segment>(&input, true);
        assert!(result.removed.is_empty());
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].byte_range, (0, 34));
        assert_eq!(result.records[1].byte_range, (35, 69));
        assert_eq!(result.records[1].record.original_creditor_name, "ACME RETAIL");
    }

    #[test]
    fn undecodable_record_is_skipped_by_width() {
        let input = format!("{}{}{}", k1("A", "01"), k1("B", "X1"), k1("C", "02"));
        let result = decode_stream::<K1Segment>(&input, false);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].byte_range, (34, 68));
        assert_eq!(result.removed[0].error.field(), Some("creditor_classification"));
    }

    #[test]
    fn invalid_record_removed_only_when_validating() {
        let input = format!("{}{}", k1("A", "01"), k1("B", "99"));
        assert_eq!(decode_stream::<K1Segment>(&input, false).records.len(), 2);

        let result = decode_stream::<K1Segment>(&input, true);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.removed[0].error.kind(), Some(ErrorKind::InvalidValue));
        assert_eq!(encode_compliant(&result), format!("{}\n", k1("A", "01")));
    }

    #[test]
    fn short_line_does_not_shift_later_records() {
        let input = format!("K1SHORT\n{}\n{}\r\n", k1("A", "01"), k1("B", "02"));
        let result = decode_stream::<K1Segment>(&input, true);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].byte_range, (0, 7));
        assert!(matches!(
            result.removed[0].error,
            RecordError::Length {
                expected: 34,
                found: 7,
                ..
            }
        ));
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].byte_range, (8, 42));
        assert_eq!(result.records[1].record.original_creditor_name, "B");
    }

    #[test]
    fn short_tail_ends_the_walk() {
        let input = format!("{}K1SHORT", k1("A", "01"));
        let result = decode_stream::<K1Segment>(&input, true);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].byte_range, (34, 41));
        assert!(matches!(result.removed[0].error, RecordError::Length { found: 7, .. }));
    }
}
