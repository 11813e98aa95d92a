#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode — must never panic
    let _ = retrobitmaps::decode_auto(data);

    // Each format explicitly — must never panic
    let _ = retrobitmaps::decode_art(data);
    let _ = retrobitmaps::decode_mac(data);
    let _ = retrobitmaps::decode_pic(data);
    let _ = retrobitmaps::decode_pcx(data);
});
