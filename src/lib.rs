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

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Corpusrun - standalone replay driver for fuzz-target corpus files.
//!
//! This crate provides:
//! - A strict left-to-right file-replay loop with fail-fast error handling
//! - Exact-length corpus loading (seek probe, fallible allocation, full read)
//! - A safe seam over the libFuzzer C ABI (`LLVMFuzzerTestOneInput`)
//!
//! The `corpusrun` binary (cargo feature `extern-target`) links the raw entry
//! point and replays the files named on its command line:
//! `corpusrun <file1> [file2 ...]`. Exit status 0 means every file was
//! replayed; any failure exits with a uniform status 1.

/// Exact-length corpus loading (size probe, full reads, fingerprints).
pub mod corpus;
/// The file-replay loop and its error taxonomy.
pub mod driver;
/// Fuzz-target boundary (safe seam plus raw C ABI adapter).
pub mod target;
