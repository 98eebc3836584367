#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whole-file decode must never panic
    let _ = zenpgm::decode(data);

    // Header-only parse must never panic either
    let mut stream = zenpgm::ByteReader::new(data);
    let _ = zenpgm::read_properties(&mut stream);
});
