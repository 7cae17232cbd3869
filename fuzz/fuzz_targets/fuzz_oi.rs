#![no_main]
use fuzz::{run_fuzz_oi, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_oi(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
