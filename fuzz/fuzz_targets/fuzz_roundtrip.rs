#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpgm::*;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding and decoding again must be a fixpoint
    let Ok((props, pixels)) = decode(data) else {
        return;
    };

    let reencoded = encode(&props, &pixels).expect("decoded properties must re-encode");
    let (props2, pixels2) = decode(&reencoded).expect("re-encoded data failed to decode");

    assert_eq!(props, props2, "roundtrip header mismatch");
    assert_eq!(pixels, pixels2, "roundtrip pixel mismatch");
});
