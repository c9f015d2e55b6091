//! `jpgr` exposes an ordered list of JPEG files as a synthetic video clip to a frame-server host.
//!
//! Frames `0..N-1` map to the files in order. Each request decodes the file on demand into planar
//! YUV (or luma-only) at the file's native chroma subsampling and copies it into a host frame.
//!
//! # Pieces
//!
//! - [`plugin_init`] registers `jpgr.Read(files, fpsnum=24, fpsden=1)` with a [`Plugin`].
//! - [`JpegClip::open`] validates that every file shares the first file's width (rounded up to a
//!   multiple of 4), height, and subsampling, then sizes the read and decode buffers once.
//! - [`JpegClip`] implements [`Filter`]; the host serialises frame requests per clip, so both
//!   buffers are reused for every frame.
//! - Entropy decoding is behind [`JpegDecoder`]; [`TurboDecoder`] (feature `turbojpeg`) is the
//!   libjpeg-turbo backend.
//!
//! The [`host`] module is the frame-server surface the plugin is written against.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod decode;
mod foundation;
pub mod host;
mod plugin;
mod source;

pub use decode::{
    DecoderError, DecoderFactory, JpegDecoder, JpegHeader, PlanarLayout, PlaneLayout, Subsampling,
    YUV_ROW_ALIGN,
};
#[cfg(feature = "turbojpeg")]
pub use decode::{TurboDecoder, turbo_factory};
pub use foundation::core::{Fps, align_width};
pub use foundation::error::{JpgrError, JpgrResult, ProbeError};
pub use host::{
    ActivationReason, Core, CoreOpts, Filter, HostError, Map, Node, Plugin, PresetFormat,
    VideoFrame, VideoInfo,
};
#[cfg(feature = "turbojpeg")]
pub use plugin::plugin_init;
pub use plugin::{NAMESPACE, PLUGIN_ID, READ_SIGNATURE, description, plugin_init_with};
pub use source::args::{INITIAL_READ_CAPACITY, ReadArgs, SourceOpts};
pub use source::clip::JpegClip;
pub use source::create::{ERROR_PREFIX, create_source};
pub use source::format::pixel_format_for;
pub use source::probe::FrameShape;
