#![no_main]

use libfuzzer_sys::fuzz_target;
use metakey::types::{KeyPartSpec, KeyPartValues};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use the first byte to determine the split point between part bytes
    // and value bytes.
    let split = data[0] as usize % data.len();
    let (part_bytes, value_bytes) = data.split_at(split);

    // Small name pool so parts and values collide often.
    let parts: Vec<KeyPartSpec> = part_bytes
        .chunks(3)
        .map(|chunk| KeyPartSpec {
            name: format!("part{}", chunk[0] % 8),
            order: chunk.get(1).copied().unwrap_or(0) as i64 - 128,
            required: chunk.get(2).copied().unwrap_or(0) & 1 == 1,
        })
        .collect();

    let mut values = KeyPartValues::new();
    for chunk in value_bytes.chunks(2) {
        let name = format!("part{}", chunk[0] % 8);
        let value = match chunk.get(1) {
            Some(b) if b % 3 == 0 => None,
            Some(b) => Some(format!("v{}", b)),
            None => None,
        };
        values.insert(name, value);
    }

    let result = metakey::resolve(&parts, &values);
    let _ = result.partial_message();
    let _ = result.key.part_names();
});
