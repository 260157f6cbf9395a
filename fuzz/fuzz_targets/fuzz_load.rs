#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use the first byte to determine the split point between the schema
    // document and the declaration document.
    let split = data[0] as usize % data.len();
    let (schema_bytes, declaration_bytes) = data.split_at(split);

    let schema = String::from_utf8_lossy(schema_bytes);
    let declaration = String::from_utf8_lossy(declaration_bytes);
    let _ = metakey::load(&schema, &declaration);
});
