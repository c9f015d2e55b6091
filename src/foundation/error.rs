use std::path::PathBuf;

use crate::decode::DecoderError;
use crate::host::HostError;

/// Convenience result type used across the source adapter.
pub type JpgrResult<T> = Result<T, JpgrError>;

/// Construction-time failures of a JPEG sequence clip.
///
/// The display strings are the messages reported to the host (after the `jpgs: ` prefix added at
/// the plugin boundary), so they are kept stable.
#[derive(thiserror::Error, Debug)]
pub enum JpgrError {
    /// The `files` argument was absent or empty.
    #[error("no source file")]
    NoSource,

    /// One of the `files` entries was an empty string.
    #[error("zero length file name was found")]
    EmptyFileName,

    /// A file failed validation; `path` is the offending file.
    #[error("{source} : {}", .path.display())]
    Probe {
        /// Probe failure reason.
        source: ProbeError,
        /// Path of the file that failed.
        path: PathBuf,
    },

    /// The sequence uses a chroma subsampling with no matching host format.
    #[error("unsupported format")]
    UnsupportedFormat,

    /// The initial read buffer could not be allocated.
    #[error("failed to allocate read buffer")]
    ReadBufferAlloc,

    /// The planar decode buffer could not be allocated.
    #[error("failed to allocate decode buffer")]
    DecodeBufferAlloc,

    /// The decoder context could not be created.
    #[error("{0}")]
    DecoderInit(DecoderError),

    /// The host rejected the clip.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl JpgrError {
    /// Attach the offending path to a probe failure.
    pub fn probe(source: ProbeError, path: impl Into<PathBuf>) -> Self {
        Self::Probe {
            source,
            path: path.into(),
        }
    }
}

/// Per-file validation failures raised while probing the input set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// `stat` failed.
    #[error("source file does not exist")]
    NotFound,

    /// The read buffer could not grow to the file size.
    #[error("failed to allocate read buffer")]
    ReadBufferAlloc,

    /// The file could not be opened for reading.
    #[error("failed to open file")]
    Open,

    /// Fewer bytes than the file size could be read.
    #[error("failed to read file")]
    Read,

    /// The decoder rejected the JPEG header.
    #[error("{0}")]
    Header(DecoderError),

    /// Aligned width or height differs from the first file.
    #[error("file has different resolution from first file")]
    Resolution,

    /// Chroma subsampling differs from the first file.
    #[error("file has different sample type from first file")]
    SampleType,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
