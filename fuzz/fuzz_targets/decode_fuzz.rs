//! Decode fuzz target: feed arbitrary text to every record type's decoder.
//! Decoding must not panic; a record that decodes must re-encode to its full width
//! and validate without panicking.
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    for kind in metro2::SegmentKind::ALL {
        if let Ok((segment, consumed)) = metro2::AnySegment::decode(kind, s) {
            assert_eq!(consumed, kind.width());
            assert_eq!(segment.encode().chars().count(), kind.width());
            let _ = segment.validate();
        }
    }
    let _ = metro2::frame::decode_stream::<metro2::J1Segment>(s, true);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
