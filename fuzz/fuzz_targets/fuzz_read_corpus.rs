// Copyright (c) 2026 Corpusrun
// Licensed under the Apache-2.0 License.

#![no_main]
#![forbid(unsafe_code)]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Exact-length loading must reproduce a seekable source byte for byte
    // and must never panic, whatever the contents.
    let mut cursor = Cursor::new(data);
    let loaded = corpusrun::corpus::read_corpus(&mut cursor).expect("cursor reads cannot be short");
    assert_eq!(loaded, data);
});
