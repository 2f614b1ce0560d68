#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = shannon::encoding::TextDetector::default().load_slice(data);
    assert_eq!(content.byte_count(), data.len());
    if data.is_empty() {
        assert!(content.is_text());
    }
});
