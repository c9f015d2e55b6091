use super::buffer::LoadError;
use super::clip::JpegClip;
use crate::decode::{DecoderError, PlanarLayout};
use crate::host::{ActivationReason, Core, Filter, VideoFrame, VideoInfo};

/// Why a frame request produced no frame.
#[derive(thiserror::Error, Debug)]
enum FrameError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("decode failed: {0}")]
    Decode(#[from] DecoderError),

    #[error("decoded {decoded} planes, clip format has {expected}")]
    Planes { decoded: usize, expected: usize },
}

impl JpegClip {
    /// Index actually served for a request of frame `n`: past-the-end requests get the last frame.
    pub fn clamp_frame(&self, n: usize) -> usize {
        n.min(self.files.len() - 1)
    }

    fn decode_frame(&mut self, index: usize) -> Result<PlanarLayout, FrameError> {
        let size = self.sizes[index];
        let jpeg = self.read_buf.load(&self.files[index], size)?;
        let layout = self.decoder.get().decode_planar(jpeg, &mut self.decode_buf)?;

        let expected = self.info.format.format().num_planes;
        if layout.planes().len() != expected {
            return Err(FrameError::Planes {
                decoded: layout.planes().len(),
                expected,
            });
        }
        Ok(layout)
    }

    fn fill_frame(&self, layout: &PlanarLayout, frame: &mut VideoFrame) {
        for (plane, src) in layout.planes().iter().enumerate() {
            let row_bytes = frame.row_bytes(plane);
            let rows = frame.height(plane);
            let stride = frame.stride(plane);
            copy_plane(
                frame.plane_mut(plane),
                stride,
                row_bytes,
                rows,
                src.slice(&self.decode_buf),
                src.stride,
            );
        }
    }
}

impl Filter for JpegClip {
    fn video_info(&self) -> VideoInfo {
        self.info
    }

    fn get_frame(
        &mut self,
        n: usize,
        reason: ActivationReason,
        core: &Core,
    ) -> Option<VideoFrame> {
        if reason != ActivationReason::Initial {
            return None;
        }

        let index = self.clamp_frame(n);
        let layout = match self.decode_frame(index) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::warn!(
                    frame = n,
                    path = %self.path(index).display(),
                    error = %err,
                    "jpeg frame unavailable"
                );
                return None;
            }
        };

        let mut frame = core.new_video_frame(self.info.format, self.info.width, self.info.height);
        let (duration_num, duration_den) = self.fps.frame_duration();
        let props = frame.props_mut();
        props.set_int("_DurationNum", duration_num);
        props.set_int("_DurationDen", duration_den);

        self.fill_frame(&layout, &mut frame);
        Some(frame)
    }
}

/// Copy `rows` rows of `row_bytes` from a source plane with `src_stride` into a destination
/// plane with `dst_stride`.
///
/// Rows and row bytes are bounded by what the source holds. When neither side has padding the
/// plane is copied in one transfer.
pub(crate) fn copy_plane(
    dst: &mut [u8],
    dst_stride: usize,
    row_bytes: usize,
    rows: usize,
    src: &[u8],
    src_stride: usize,
) {
    if src_stride == 0 || dst_stride == 0 {
        return;
    }
    let rows = rows.min(src.len() / src_stride);
    let row_bytes = row_bytes.min(src_stride);

    if src_stride == dst_stride && row_bytes == dst_stride {
        let len = dst_stride * rows;
        dst[..len].copy_from_slice(&src[..len]);
        return;
    }

    for (dst_row, src_row) in dst
        .chunks_mut(dst_stride)
        .zip(src.chunks(src_stride))
        .take(rows)
    {
        dst_row[..row_bytes].copy_from_slice(&src_row[..row_bytes]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/produce.rs"]
mod tests;
