use std::path::Path;

use super::buffer::{LoadError, ReadBuffer};
use crate::decode::{JpegDecoder, Subsampling};
use crate::foundation::core::align_width;
use crate::foundation::error::ProbeError;

/// Frame geometry every file of a clip must share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameShape {
    /// Width rounded up to a multiple of 4.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Chroma subsampling.
    pub subsampling: Subsampling,
}

/// Validate one input file and return its size in bytes.
///
/// The file is loaded into `read_buf` (growing it if needed) and its header decoded. The first
/// call records the shape into `expected`; later calls must match it.
pub(crate) fn probe_file(
    path: &Path,
    read_buf: &mut ReadBuffer,
    decoder: &mut dyn JpegDecoder,
    expected: &mut Option<FrameShape>,
) -> Result<usize, ProbeError> {
    let size = std::fs::metadata(path)
        .map_err(|_| ProbeError::NotFound)?
        .len();
    let size = usize::try_from(size).map_err(|_| ProbeError::ReadBufferAlloc)?;

    read_buf
        .ensure(size)
        .map_err(|_| ProbeError::ReadBufferAlloc)?;
    let jpeg = read_buf.load(path, size).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "probe load failed");
        match err {
            LoadError::Open(_) => ProbeError::Open,
            LoadError::Read(_) | LoadError::Capacity { .. } => ProbeError::Read,
        }
    })?;

    let header = decoder.read_header(jpeg).map_err(ProbeError::Header)?;
    let shape = FrameShape {
        width: align_width(header.width),
        height: header.height,
        subsampling: header.subsampling,
    };

    match expected {
        None => *expected = Some(shape),
        Some(first) => {
            if (first.width, first.height) != (shape.width, shape.height) {
                return Err(ProbeError::Resolution);
            }
            if first.subsampling != shape.subsampling {
                return Err(ProbeError::SampleType);
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        size,
        coded_width = header.width,
        width = shape.width,
        height = shape.height,
        subsampling = ?shape.subsampling,
        "probed"
    );
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/source/probe.rs"]
mod tests;
