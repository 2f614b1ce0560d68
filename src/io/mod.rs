//! Bounded loading of whole files and streams.
//!
//! Content is always read to completion before it is handed to the text
//! detector or the entropy engine; a failed load never yields partial data.
//! Files are memory-mapped and copied once into a [`Bytes`] buffer, with the
//! size checked against [`IOLimits`] before anything is read.

pub mod error;

use crate::encoding::{DecodedContent, TextDetector};
use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defines the resource limits for loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum file size that can be loaded.
    pub max_file_size: u64,
    /// The maximum number of bytes accepted from a stream such as stdin.
    pub max_read_bytes: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_read_bytes: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// A file read entirely into memory.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    path: PathBuf,
    bytes: Bytes,
}

impl LoadedFile {
    /// Opens and reads the whole file at `path`.
    ///
    /// Fails with [`IoError::FileTooLarge`] before reading if the file
    /// exceeds `limits.max_file_size`. Files without a reported size are
    /// read to the end under the same limit and fail with
    /// [`IoError::ReadLimitExceeded`] past it.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = file.metadata()?;
        let file_size = metadata.len();

        debug!(
            path = %path.display(),
            size = file_size,
            regular = metadata.is_file(),
            limits.max_file_size = limits.max_file_size,
            "Loading file"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        // Pipes, procfs entries and empty files report no usable size and
        // cannot be mapped, so they are read as streams.
        let bytes = if metadata.is_file() && file_size > 0 {
            // Safety: read-only map of a regular file, copied out immediately.
            let map = unsafe { Mmap::map(&file)? };
            Bytes::copy_from_slice(&map)
        } else {
            let stream_limits = IOLimits {
                max_read_bytes: limits.max_file_size,
                ..limits.clone()
            };
            read_to_end(file, &stream_limits)?
        };

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Path given on open.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of bytes read.
    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }

    /// The file content.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Runs `detector` over the content. The buffer is shared, not copied.
    pub fn decode(&self, detector: &TextDetector) -> DecodedContent {
        detector.load(self.bytes.clone())
    }
}

/// Reads `reader` to completion, failing if it yields more than
/// `limits.max_read_bytes`.
pub fn read_to_end<R: Read>(reader: R, limits: &IOLimits) -> Result<Bytes> {
    let limit = limits.max_read_bytes;
    let mut data = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut data)?;

    if data.len() as u64 > limit {
        warn!(limit, "Read limit exceeded");
        return Err(IoError::ReadLimitExceeded { limit });
    }

    debug!(len = data.len(), "Read stream to end");
    Ok(Bytes::from(data))
}
