#![no_main]

use libfuzzer_sys::fuzz_target;
use metakey::types::ParameterValue;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(parameter) = ParameterValue::from_value(&value) {
            let _ = metakey::simple_value(&parameter);
        }
    }
});
