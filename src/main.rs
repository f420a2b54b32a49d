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

//! Replay driver CLI.
//!
//! Feeds each file named on the command line to the externally linked
//! `LLVMFuzzerTestOneInput`, left to right, stopping at the first failure.
//! No flags, no environment variables. Exit status 0 on success, 1 on any
//! failure. Link a target object when building, e.g.:
//! `RUSTFLAGS="-C link-arg=target.o" cargo build --features extern-target`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use corpusrun::driver::{self, FAILURE_EXIT_CODE};
use corpusrun::target::{self, RawTestOneInput};
use tracing::{error, info};

extern "C" {
    fn LLVMFuzzerTestOneInput(data: *const u8, len: usize) -> std::os::raw::c_int;
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .try_init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        git = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
        "corpusrun starting"
    );

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: corpusrun <file1> [file2 ...]");
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    let raw: RawTestOneInput = LLVMFuzzerTestOneInput;
    match driver::run(&paths, target::from_raw(raw)).context("replay failed") {
        Ok(summary) => {
            info!(
                files = summary.files,
                bytes = summary.bytes,
                "all corpus files replayed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "replay aborted");
            eprintln!("corpusrun: {e:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
