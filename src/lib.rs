//! # metro2 — Metro 2 fixed-width record codec and validation
//!
//! Table-driven marshaling of the Metro 2 credit reporting format: every record
//! type is a plain struct plus a static field table, and one generic engine
//! decodes, encodes and validates them all.
//!
//! ## Field table
//!
//! Each [`FieldSpec`] names a column (0-based start, length), its wire kind and
//! whether it is required:
//!
//! - `Text`: printable ASCII, left-justified and space-filled
//! - `NumericText`: digits, right-justified and zero-filled; identifiers such as
//!   the SSN also accept the all-zeros / all-nines "not available" fill
//! - `Date`: `MMDDYYYY`, or `MMDDYYYYHHMMSS` for the base segment time stamp;
//!   all zeros means not reported
//! - `EnumCode`: a code from a fixed set, checked by the field's rule
//!
//! Tables are checked once by [`verify_layouts`]: spans are contiguous, start at
//! column 0 and sum to the record width.
//!
//! ## Validation
//!
//! [`Segment::validate`] runs a structural pass (required fields present) and
//! then each field's business rule. The first failure is reported as a
//! [`RecordError`] naming the record and field.
//!
//! ## Example
//!
//! ```
//! use metro2::{J1Segment, Segment};
//!
//! let line = format!(
//!     "J1 {:<25}{:<20}{:<20} {}{}{}1   ",
//!     "SMITH-JONES", "ROBERT", "", "999999999", "01151980", "2125551234"
//! );
//! let j1 = J1Segment::parse(&line).unwrap();
//! assert_eq!(j1.surname, "SMITH-JONES");
//! assert!(j1.validate().is_ok());
//! assert_eq!(j1.encode(), line);
//! ```

pub mod codec;
pub mod coerce;
pub mod error;
pub mod frame;
pub mod layout;
pub mod segments;
pub mod validate;
pub mod value;

pub use error::{ErrorKind, FieldError, Fault, RecordError, SchemaError};
pub use frame::{decode_stream, encode_compliant, DecodedRecord, RemovedRecord, StreamDecodeResult};
pub use layout::{DateFormat, FieldKind, FieldSpec, Layout, Requirement};
pub use segments::{
    verify_layouts, AnySegment, BaseSegment, HeaderRecord, J1Segment, J2Segment, K1Segment, K2Segment,
    K3Segment, K4Segment, L1Segment, N1Segment, Segment, SegmentKind, TrailerRecord,
};
pub use value::TypedValue;
