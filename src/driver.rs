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

#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! The file-replay loop.
//!
//! Paths are processed strictly left to right, one at a time. Each file is
//! loaded in full and handed to the target exactly once; the buffer is
//! dropped as soon as the call returns. Any failure (empty path list,
//! unopenable file, failed allocation, short read) aborts the whole run at
//! that point; remaining paths are not opened. No retry anywhere.
//!
//! The target's return status is logged and otherwise ignored. Crashes,
//! aborts, and sanitizer traps inside the target terminate the process and
//! are the actual signal of a replay run; a hang inside the target blocks the
//! driver indefinitely (hang detection belongs to an external supervisor).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::corpus::{self, CorpusError};

/// Process exit status for every driver failure. The error taxonomy is kept
/// in [`DriverError`]; the exit status is deliberately uniform.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Replay driver errors. Every variant is fatal to the whole run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// No corpus files were given.
    #[error("no corpus files given")]
    Usage,
    /// A corpus file could not be opened.
    #[error("open {}", .path.display())]
    Open {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A corpus file could not be loaded after opening.
    #[error("read {}", .path.display())]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying corpus error.
        #[source]
        source: CorpusError,
    },
}

/// Totals for a completed replay run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Corpus files replayed.
    pub files: u64,
    /// Total bytes delivered to the target.
    pub bytes: u64,
}

/// Replay every path, in argument order, against `target`.
///
/// An empty `paths` is a usage error and the target is never invoked. On
/// success the run totals are returned; on failure the first error is
/// returned and paths after the failing one are untouched.
pub fn run<F>(paths: &[PathBuf], mut target: F) -> Result<ReplaySummary, DriverError>
where
    F: FnMut(&[u8]) -> i32,
{
    if paths.is_empty() {
        return Err(DriverError::Usage);
    }

    let mut summary = ReplaySummary::default();
    for path in paths {
        let delivered = replay_file(path, &mut target)?;
        summary.files += 1;
        summary.bytes += delivered;
    }
    info!(files = summary.files, bytes = summary.bytes, "replay complete");
    Ok(summary)
}

/// Replay a single corpus file, returning the number of bytes delivered.
///
/// The buffer handed to the target holds the file's verbatim on-disk contents
/// at read time and is valid only for the duration of the call.
pub fn replay_file<F>(path: &Path, target: &mut F) -> Result<u64, DriverError>
where
    F: FnMut(&[u8]) -> i32,
{
    let mut file = File::open(path).map_err(|source| DriverError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let data = corpus::read_corpus(&mut file).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = data.len(), "replaying corpus file");
    let started = Instant::now();
    let status = target(&data);
    debug!(
        path = %path.display(),
        sha256 = %corpus::fingerprint(&data),
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "target returned"
    );
    Ok(data.len() as u64)
}
