// Copyright (c) 2026 Corpusrun
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![deny(missing_docs)]

//! The fuzz-target boundary.
//!
//! The driver consumes a target, it never defines one. A target is anything
//! callable as `(bytes) -> status`; the driver ignores the status beyond
//! logging it. Targets compiled to the libFuzzer C ABI
//! (`LLVMFuzzerTestOneInput`) are wrapped by [`from_raw`], the one place in
//! this crate where `unsafe` is allowed.

use std::os::raw::c_int;

/// Raw libFuzzer-compatible entry point: `(data, len) -> status`.
///
/// The callee receives a pointer/length pair valid only for the duration of
/// the call and must not retain the pointer.
pub type RawTestOneInput = unsafe extern "C" fn(data: *const u8, len: usize) -> c_int;

/// Wrap a raw C-ABI entry point as a driver target.
///
/// A zero-length input passes a non-null (dangling but aligned) pointer with
/// length 0, which the C side must treat as empty.
#[allow(unsafe_code)]
pub fn from_raw(raw: RawTestOneInput) -> impl FnMut(&[u8]) -> i32 {
    move |data: &[u8]| {
        // SAFETY: `data` is a live slice for the whole call, so the pointer
        // is valid for exactly `data.len()` bytes. The boundary contract
        // forbids the callee from retaining the pointer past the call.
        unsafe { raw(data.as_ptr(), data.len()) }
    }
}
