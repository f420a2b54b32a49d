// Copyright (c) 2026 Corpusrun
// Licensed under the Apache-2.0 License.

#![no_main]

use std::os::raw::c_int;

use corpusrun::target::{self, RawTestOneInput};
use libfuzzer_sys::fuzz_target;

extern "C" fn length_probe(_data: *const u8, len: usize) -> c_int {
    len as c_int
}

fuzz_target!(|inputs: Vec<Vec<u8>>| {
    // The raw-ABI seam must pass exact lengths through, including zero.
    let mut target = target::from_raw(length_probe as RawTestOneInput);
    for input in &inputs {
        assert_eq!(target(input), input.len() as c_int);
    }
});
