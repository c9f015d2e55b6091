use std::path::{Path, PathBuf};

use super::args::{ReadArgs, SourceOpts};
use super::buffer::{ReadBuffer, alloc_zeroed};
use super::format::pixel_format_for;
use super::probe::{FrameShape, probe_file};
use crate::decode::{JpegDecoder, PlanarLayout, YUV_ROW_ALIGN};
use crate::foundation::core::Fps;
use crate::foundation::error::{JpgrError, JpgrResult};
use crate::host::{HostError, VideoInfo};

/// Decoder context owned by a clip. Dropping it releases the context through
/// [`JpegDecoder::close`], so every construction error path releases it too.
pub(crate) struct DecoderContext(Box<dyn JpegDecoder>);

impl DecoderContext {
    pub(crate) fn get(&mut self) -> &mut dyn JpegDecoder {
        self.0.as_mut()
    }
}

impl Drop for DecoderContext {
    fn drop(&mut self) {
        if let Err(err) = self.0.close() {
            tracing::error!(error = %err, "failed to release jpeg decoder");
        }
    }
}

/// One clip instance: the file list and the buffers frames are decoded through.
pub struct JpegClip {
    pub(crate) decode_buf: Vec<u8>,
    pub(crate) read_buf: ReadBuffer,
    pub(crate) files: Vec<PathBuf>,
    pub(crate) sizes: Vec<usize>,
    // Declared after the buffers: released last.
    pub(crate) decoder: DecoderContext,
    pub(crate) shape: FrameShape,
    pub(crate) fps: Fps,
    pub(crate) info: VideoInfo,
}

impl JpegClip {
    /// Probe every file of `args` and size the clip's buffers.
    ///
    /// On error everything allocated so far is released before returning.
    #[tracing::instrument(skip_all, fields(files = args.files.len()))]
    pub fn open(
        args: ReadArgs,
        decoder: Box<dyn JpegDecoder>,
        opts: &SourceOpts,
    ) -> JpgrResult<Self> {
        let mut decoder = DecoderContext(decoder);
        args.validate()?;
        let ReadArgs { files, fps } = args;

        let mut read_buf = ReadBuffer::with_capacity(opts.initial_read_capacity)
            .map_err(|_| JpgrError::ReadBufferAlloc)?;
        let mut sizes = Vec::with_capacity(files.len());
        let mut expected = None;
        for path in &files {
            let size = probe_file(path, &mut read_buf, decoder.get(), &mut expected)
                .map_err(|err| JpgrError::probe(err, path))?;
            sizes.push(size);
        }
        // Non-empty file list, so the first probe recorded a shape.
        let shape = expected.ok_or(JpgrError::NoSource)?;

        let format = pixel_format_for(shape.subsampling).ok_or(JpgrError::UnsupportedFormat)?;
        let info = VideoInfo {
            format,
            width: to_u32(shape.width)?,
            height: to_u32(shape.height)?,
            num_frames: files.len(),
            fps_num: fps.num,
            fps_den: fps.den,
        };

        let layout = PlanarLayout::new(shape.width, shape.height, shape.subsampling, YUV_ROW_ALIGN);
        let decode_buf = alloc_zeroed(layout.len()).map_err(|_| JpgrError::DecodeBufferAlloc)?;

        tracing::info!(
            frames = info.num_frames,
            format = format.format().name,
            width = info.width,
            height = info.height,
            fps_num = fps.num,
            fps_den = fps.den,
            "jpeg sequence opened"
        );

        Ok(Self {
            decode_buf,
            read_buf,
            files,
            sizes,
            decoder,
            shape,
            fps,
            info,
        })
    }

    /// Clip description handed to the host.
    pub fn info(&self) -> &VideoInfo {
        &self.info
    }

    /// Frame files in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// File sizes captured while probing, one per file.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Shape shared by every file.
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Current read buffer capacity in bytes.
    pub fn read_capacity(&self) -> usize {
        self.read_buf.capacity()
    }

    /// How many times the read buffer has been allocated.
    pub fn read_allocations(&self) -> usize {
        self.read_buf.allocations()
    }

    /// Size of the planar decode buffer in bytes.
    pub fn decode_capacity(&self) -> usize {
        self.decode_buf.len()
    }

    pub(crate) fn path(&self, index: usize) -> &Path {
        &self.files[index]
    }
}

fn to_u32(v: usize) -> JpgrResult<u32> {
    u32::try_from(v).map_err(|_| {
        HostError::InvalidVideoInfo(format!("frame dimension {v} does not fit in 32 bits")).into()
    })
}

impl Drop for JpegClip {
    fn drop(&mut self) {
        self.decode_buf = Vec::new();
        drop(std::mem::take(&mut self.read_buf));
        self.files.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/clip.rs"]
mod tests;
