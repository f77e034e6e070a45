//! Record types of the Metro 2 fixed-length (426) format.
//!
//! Every record type is a plain struct plus a [`Layout`] table; the shared
//! [`Segment`] contract (describe, decode, encode, validate) is provided by the
//! generic engine and never re-implemented per type.

pub mod base;
pub mod codes;
pub mod header;
pub mod j1;
pub mod j2;
pub mod k1;
pub mod k2;
pub mod k3;
pub mod k4;
pub mod l1;
pub mod n1;
pub mod trailer;

pub use base::BaseSegment;
pub use header::HeaderRecord;
pub use j1::J1Segment;
pub use j2::J2Segment;
pub use k1::K1Segment;
pub use k2::K2Segment;
pub use k3::K3Segment;
pub use k4::K4Segment;
pub use l1::L1Segment;
pub use n1::N1Segment;
pub use trailer::TrailerRecord;

use crate::codec;
use crate::error::{RecordError, SchemaError};
use crate::layout::Layout;
use crate::validate;

/// Operations shared by every record type.
pub trait Segment: Default + Sized + 'static {
    /// The record type's field table.
    fn layout() -> &'static Layout<Self>;

    /// Human-readable record type label.
    fn describe(&self) -> &'static str {
        Self::layout().description
    }

    /// Fixed width in characters.
    fn width() -> usize {
        Self::layout().width
    }

    /// Decode `line` into `self`, returning the characters consumed. On error `self`
    /// is left unchanged.
    fn decode(&mut self, line: &str) -> Result<usize, RecordError> {
        codec::decode(Self::layout(), self, line)
    }

    /// Decode into a new record.
    fn parse(line: &str) -> Result<Self, RecordError> {
        let mut record = Self::default();
        record.decode(line)?;
        Ok(record)
    }

    /// Fixed-width text, always exactly [`Segment::width`] characters.
    fn encode(&self) -> String {
        codec::encode(Self::layout(), self)
    }

    /// Structural then business-rule validation. Does not mutate.
    fn validate(&self) -> Result<(), RecordError> {
        validate::validate(Self::layout(), self)
    }
}

/// Every supported record type, for callers that choose the type at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Header,
    Base,
    J1,
    J2,
    K1,
    K2,
    K3,
    K4,
    L1,
    N1,
    Trailer,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 11] = [
        SegmentKind::Header,
        SegmentKind::Base,
        SegmentKind::J1,
        SegmentKind::J2,
        SegmentKind::K1,
        SegmentKind::K2,
        SegmentKind::K3,
        SegmentKind::K4,
        SegmentKind::L1,
        SegmentKind::N1,
        SegmentKind::Trailer,
    ];

    /// Short label used in errors (`J1`, `BASE`, ...).
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Header => HeaderRecord::layout().name,
            SegmentKind::Base => BaseSegment::layout().name,
            SegmentKind::J1 => J1Segment::layout().name,
            SegmentKind::J2 => J2Segment::layout().name,
            SegmentKind::K1 => K1Segment::layout().name,
            SegmentKind::K2 => K2Segment::layout().name,
            SegmentKind::K3 => K3Segment::layout().name,
            SegmentKind::K4 => K4Segment::layout().name,
            SegmentKind::L1 => L1Segment::layout().name,
            SegmentKind::N1 => N1Segment::layout().name,
            SegmentKind::Trailer => TrailerRecord::layout().name,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            SegmentKind::Header => HeaderRecord::layout().description,
            SegmentKind::Base => BaseSegment::layout().description,
            SegmentKind::J1 => J1Segment::layout().description,
            SegmentKind::J2 => J2Segment::layout().description,
            SegmentKind::K1 => K1Segment::layout().description,
            SegmentKind::K2 => K2Segment::layout().description,
            SegmentKind::K3 => K3Segment::layout().description,
            SegmentKind::K4 => K4Segment::layout().description,
            SegmentKind::L1 => L1Segment::layout().description,
            SegmentKind::N1 => N1Segment::layout().description,
            SegmentKind::Trailer => TrailerRecord::layout().description,
        }
    }

    pub fn width(self) -> usize {
        match self {
            SegmentKind::Header => HeaderRecord::width(),
            SegmentKind::Base => BaseSegment::width(),
            SegmentKind::J1 => J1Segment::width(),
            SegmentKind::J2 => J2Segment::width(),
            SegmentKind::K1 => K1Segment::width(),
            SegmentKind::K2 => K2Segment::width(),
            SegmentKind::K3 => K3Segment::width(),
            SegmentKind::K4 => K4Segment::width(),
            SegmentKind::L1 => L1Segment::width(),
            SegmentKind::N1 => N1Segment::width(),
            SegmentKind::Trailer => TrailerRecord::width(),
        }
    }

    /// Check this record type's table.
    pub fn verify(self) -> Result<(), SchemaError> {
        match self {
            SegmentKind::Header => HeaderRecord::layout().verify(),
            SegmentKind::Base => BaseSegment::layout().verify(),
            SegmentKind::J1 => J1Segment::layout().verify(),
            SegmentKind::J2 => J2Segment::layout().verify(),
            SegmentKind::K1 => K1Segment::layout().verify(),
            SegmentKind::K2 => K2Segment::layout().verify(),
            SegmentKind::K3 => K3Segment::layout().verify(),
            SegmentKind::K4 => K4Segment::layout().verify(),
            SegmentKind::L1 => L1Segment::layout().verify(),
            SegmentKind::N1 => N1Segment::layout().verify(),
            SegmentKind::Trailer => TrailerRecord::layout().verify(),
        }
    }
}

/// Verify every record type's table. Call once at program start; an error is a
/// configuration defect in this crate, not bad input.
pub fn verify_layouts() -> Result<(), SchemaError> {
    SegmentKind::ALL.iter().try_for_each(|kind| kind.verify())
}

/// A record of any supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnySegment {
    Header(HeaderRecord),
    Base(BaseSegment),
    J1(J1Segment),
    J2(J2Segment),
    K1(K1Segment),
    K2(K2Segment),
    K3(K3Segment),
    K4(K4Segment),
    L1(L1Segment),
    N1(N1Segment),
    Trailer(TrailerRecord),
}

impl AnySegment {
    /// Decode `line` as a record of type `kind`. Returns the record and the characters
    /// consumed.
    pub fn decode(kind: SegmentKind, line: &str) -> Result<(AnySegment, usize), RecordError> {
        let segment = match kind {
            SegmentKind::Header => AnySegment::Header(HeaderRecord::parse(line)?),
            SegmentKind::Base => AnySegment::Base(BaseSegment::parse(line)?),
            SegmentKind::J1 => AnySegment::J1(J1Segment::parse(line)?),
            SegmentKind::J2 => AnySegment::J2(J2Segment::parse(line)?),
            SegmentKind::K1 => AnySegment::K1(K1Segment::parse(line)?),
            SegmentKind::K2 => AnySegment::K2(K2Segment::parse(line)?),
            SegmentKind::K3 => AnySegment::K3(K3Segment::parse(line)?),
            SegmentKind::K4 => AnySegment::K4(K4Segment::parse(line)?),
            SegmentKind::L1 => AnySegment::L1(L1Segment::parse(line)?),
            SegmentKind::N1 => AnySegment::N1(N1Segment::parse(line)?),
            SegmentKind::Trailer => AnySegment::Trailer(TrailerRecord::parse(line)?),
        };
        Ok((segment, kind.width()))
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            AnySegment::Header(_) => SegmentKind::Header,
            AnySegment::Base(_) => SegmentKind::Base,
            AnySegment::J1(_) => SegmentKind::J1,
            AnySegment::J2(_) => SegmentKind::J2,
            AnySegment::K1(_) => SegmentKind::K1,
            AnySegment::K2(_) => SegmentKind::K2,
            AnySegment::K3(_) => SegmentKind::K3,
            AnySegment::K4(_) => SegmentKind::K4,
            AnySegment::L1(_) => SegmentKind::L1,
            AnySegment::N1(_) => SegmentKind::N1,
            AnySegment::Trailer(_) => SegmentKind::Trailer,
        }
    }

    pub fn describe(&self) -> &'static str {
        self.kind().describe()
    }

    pub fn encode(&self) -> String {
        match self {
            AnySegment::Header(s) => s.encode(),
            AnySegment::Base(s) => s.encode(),
            AnySegment::J1(s) => s.encode(),
            AnySegment::J2(s) => s.encode(),
            AnySegment::K1(s) => s.encode(),
            AnySegment::K2(s) => s.encode(),
            AnySegment::K3(s) => s.encode(),
            AnySegment::K4(s) => s.encode(),
            AnySegment::L1(s) => s.encode(),
            AnySegment::N1(s) => s.encode(),
            AnySegment::Trailer(s) => s.encode(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        match self {
            AnySegment::Header(s) => s.validate(),
            AnySegment::Base(s) => s.validate(),
            AnySegment::J1(s) => s.validate(),
            AnySegment::J2(s) => s.validate(),
            AnySegment::K1(s) => s.validate(),
            AnySegment::K2(s) => s.validate(),
            AnySegment::K3(s) => s.validate(),
            AnySegment::K4(s) => s.validate(),
            AnySegment::L1(s) => s.validate(),
            AnySegment::N1(s) => s.validate(),
            AnySegment::Trailer(s) => s.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_layouts_verify() {
        assert_eq!(verify_layouts(), Ok(()));
    }

    #[test]
    fn widths_match_published_lengths() {
        let widths: Vec<(SegmentKind, usize)> = SegmentKind::ALL.iter().map(|k| (*k, k.width())).collect();
        assert_eq!(
            widths,
            vec![
                (SegmentKind::Header, 426),
                (SegmentKind::Base, 426),
                (SegmentKind::J1, 100),
                (SegmentKind::J2, 200),
                (SegmentKind::K1, 34),
                (SegmentKind::K2, 34),
                (SegmentKind::K3, 40),
                (SegmentKind::K4, 30),
                (SegmentKind::L1, 54),
                (SegmentKind::N1, 146),
                (SegmentKind::Trailer, 426),
            ]
        );
    }

    #[test]
    fn labels_are_distinct() {
        let mut names: Vec<&str> = SegmentKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SegmentKind::ALL.len());
        assert!(SegmentKind::J1.describe().starts_with("J1 Segment"));
    }

    #[test]
    fn any_segment_dispatches_by_kind() {
        let line = format!("K1{:<30}01", "FIRST NATIONAL BANK");
        let (segment, consumed) = AnySegment::decode(SegmentKind::K1, &line).expect("k1");
        assert_eq!(consumed, 34);
        assert_eq!(segment.kind(), SegmentKind::K1);
        assert_eq!(segment.validate(), Ok(()));
        assert_eq!(segment.encode(), line);
        assert!(AnySegment::decode(SegmentKind::J1, &line).is_err());
    }
}
