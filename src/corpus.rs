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

//! Exact-length corpus loading.
//!
//! A corpus input must come from a seekable, finite source. The length is
//! probed by seeking to the end and back, the buffer is allocated to exactly
//! that length, and anything short of a full read is an error: the source
//! changed between probe and read. Pipes and other non-seekable sources are
//! unsupported and fail at the probe.

use std::io::{self, Read, Seek, SeekFrom};

use thiserror::Error;

/// Corpus loading errors.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Seek or read failed at the I/O layer.
    #[error("corpus i/o")]
    Io(#[source] io::Error),
    /// The probed length could not be allocated (or does not fit an address).
    #[error("corpus allocation of {len} bytes")]
    Allocation {
        /// Probed length in bytes.
        len: u64,
    },
    /// Fewer bytes than the probed length were available.
    #[error("short corpus read, expected {expected} bytes")]
    ShortRead {
        /// Probed length in bytes.
        expected: u64,
    },
}

/// Probe the total length of a seekable source, leaving it positioned at the
/// start.
pub fn probe_len<S: Seek>(source: &mut S) -> io::Result<u64> {
    let len = source.seek(SeekFrom::End(0))?;
    source.seek(SeekFrom::Start(0))?;
    Ok(len)
}

/// Read an entire corpus input into a freshly allocated buffer of exactly the
/// probed length.
///
/// Zero-length sources are valid and yield an empty buffer. Allocation is
/// fallible and reported as [`CorpusError::Allocation`] rather than aborting
/// the process.
pub fn read_corpus<S: Read + Seek>(source: &mut S) -> Result<Vec<u8>, CorpusError> {
    let len = probe_len(source).map_err(CorpusError::Io)?;
    let size = usize::try_from(len).map_err(|_| CorpusError::Allocation { len })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| CorpusError::Allocation { len })?;
    buf.resize(size, 0);

    match source.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(CorpusError::ShortRead { expected: len })
        }
        Err(e) => Err(CorpusError::Io(e)),
    }
}

/// SHA-256 fingerprint of an input, hex-encoded.
///
/// libFuzzer names corpus files after their content hash; logging the same
/// fingerprint lets a replayed input be correlated with the corpus entry.
pub fn fingerprint(data: &[u8]) -> String {
    let digest = ring::digest::digest(&ring::digest::SHA256, data);
    hex::encode(digest.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Seekable source that claims `padding` more bytes than it can produce,
    /// simulating a file truncated between size probe and read.
    struct Truncated {
        inner: Cursor<Vec<u8>>,
        padding: u64,
    }

    impl Read for Truncated {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Seek for Truncated {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            match pos {
                SeekFrom::End(off) => {
                    let claimed = self.inner.get_ref().len() as u64 + self.padding;
                    Ok((claimed as i64 + off) as u64)
                }
                other => self.inner.seek(other),
            }
        }
    }

    #[test]
    fn probe_restores_start_position() {
        let mut cur = Cursor::new(vec![1u8, 2, 3, 4]);
        cur.set_position(3);
        assert_eq!(probe_len(&mut cur).expect("probe"), 4);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn reads_entire_source_verbatim() {
        let bytes = vec![0u8, 255, 10, 13, 7];
        let mut cur = Cursor::new(bytes.clone());
        assert_eq!(read_corpus(&mut cur).expect("read"), bytes);
    }

    #[test]
    fn zero_length_source_yields_empty_buffer() {
        let mut cur = Cursor::new(Vec::new());
        let buf = read_corpus(&mut cur).expect("read");
        assert!(buf.is_empty());
    }

    /// Seekable source that claims an absurd length and errors mid-read.
    struct Claims {
        len: u64,
        read_result: fn() -> io::Result<usize>,
    }

    impl Read for Claims {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            (self.read_result)()
        }
    }

    impl Seek for Claims {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            match pos {
                SeekFrom::End(_) => Ok(self.len),
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn unallocatable_length_is_an_allocation_error_not_an_abort() {
        let mut src = Claims {
            len: u64::MAX,
            read_result: || unreachable!("allocation must fail before any read"),
        };
        match read_corpus(&mut src) {
            Err(CorpusError::Allocation { len }) => assert_eq!(len, u64::MAX),
            other => panic!("expected allocation error, got {other:?}"),
        }
    }

    #[test]
    fn mid_read_io_error_is_not_a_short_read() {
        let mut src = Claims {
            len: 8,
            read_result: || Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        match read_corpus(&mut src) {
            Err(CorpusError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected i/o error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_source_is_a_short_read() {
        let mut src = Truncated {
            inner: Cursor::new(vec![9u8; 16]),
            padding: 8,
        };
        match read_corpus(&mut src) {
            Err(CorpusError::ShortRead { expected }) => assert_eq!(expected, 24),
            other => panic!("expected short read, got {other:?}"),
        }
    }

    #[test]
    fn fingerprint_is_stable_hex_sha256() {
        // SHA-256 of the empty input is a well-known constant.
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(fingerprint(b"abc"), fingerprint(b"abc"));
        assert_ne!(fingerprint(b"abc"), fingerprint(b"abd"));
    }
}
