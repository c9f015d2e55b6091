//! JPEG decoder seam.
//!
//! Entropy decoding is delegated to an external library behind [`JpegDecoder`]. The adapter only
//! relies on two capabilities: reporting header metadata, and writing planar YUV into a
//! caller-supplied buffer laid out as described by [`PlanarLayout`].

use std::sync::Arc;

pub(crate) mod layout;
pub(crate) mod sampling;
#[cfg(feature = "turbojpeg")]
pub(crate) mod turbo;

pub use layout::{PlanarLayout, PlaneLayout};
pub use sampling::Subsampling;
#[cfg(feature = "turbojpeg")]
pub use turbo::TurboDecoder;

/// Row alignment, in bytes, of every plane the decoder writes.
pub const YUV_ROW_ALIGN: usize = 4;

/// Header metadata of one JPEG image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JpegHeader {
    /// Image width in pixels, as coded.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Chroma subsampling.
    pub subsampling: Subsampling,
}

impl JpegHeader {
    /// Planar layout the decoder produces for this image.
    pub fn layout(&self) -> PlanarLayout {
        PlanarLayout::new(self.width, self.height, self.subsampling, YUV_ROW_ALIGN)
    }
}

/// Error reported by a decoder backend; the message is passed through unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecoderError(String);

impl DecoderError {
    /// Build an error from a backend message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Backend message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A decoder context owned by one clip.
///
/// Calls are never concurrent for one instance; the clip serialises them.
pub trait JpegDecoder: Send {
    /// Parse header metadata from a complete JPEG bitstream.
    fn read_header(&mut self, jpeg: &[u8]) -> Result<JpegHeader, DecoderError>;

    /// Decode `jpeg` into `out` as planar YUV and return the layout that was written.
    ///
    /// `out` must be at least `layout().len()` bytes for this image's header; returning an error
    /// is preferred over partial output when it is not.
    fn decode_planar(&mut self, jpeg: &[u8], out: &mut [u8]) -> Result<PlanarLayout, DecoderError>;

    /// Release the decoder context. Called once when the owning clip is dropped.
    fn close(&mut self) -> Result<(), DecoderError> {
        Ok(())
    }
}

/// Shared constructor for per-clip decoder contexts.
pub type DecoderFactory =
    Arc<dyn Fn() -> Result<Box<dyn JpegDecoder>, DecoderError> + Send + Sync>;

/// Factory for the libjpeg-turbo backend.
#[cfg(feature = "turbojpeg")]
pub fn turbo_factory() -> DecoderFactory {
    Arc::new(|| Ok(Box::new(TurboDecoder::new()?) as Box<dyn JpegDecoder>))
}
