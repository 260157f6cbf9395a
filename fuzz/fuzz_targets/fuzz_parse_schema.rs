#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    if let Ok(schema) = metakey::parse_schema(&input) {
        let _ = metakey::key_parts(&schema);
    }
});
