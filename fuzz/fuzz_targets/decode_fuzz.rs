//! Decode fuzz target: feed arbitrary bytes to Msg::decode.
//! Decode must not panic or over-allocate; it returns Ok(Msg) or Err(DecodeError).
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    if let Ok(msg) = msg_codec::Msg::decode(data) {
        // A successfully decoded message must re-encode.
        let _ = msg.encode();
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
