#![no_main]
use ciborium::de::from_reader;
use libfuzzer_sys::fuzz_target;
use sortviz_core::TraceFile;

fuzz_target!(|data: &[u8]| {
    let _ = from_reader::<TraceFile, _>(data);
});
