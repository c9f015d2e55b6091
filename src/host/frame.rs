use smallvec::SmallVec;

use super::map::Map;
use super::video::PresetFormat;
use crate::foundation::core::align_up;

#[derive(Clone, Debug)]
struct FramePlane {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

/// A host-allocated video frame.
///
/// Each plane's rows start `stride` bytes apart, where `stride` is the row size rounded up to the
/// host's frame alignment. Plane bytes start zeroed.
#[derive(Clone, Debug)]
pub struct VideoFrame {
    format: PresetFormat,
    width: u32,
    height: u32,
    planes: SmallVec<[FramePlane; 3]>,
    props: Map,
}

impl VideoFrame {
    pub(crate) fn new(format: PresetFormat, width: u32, height: u32, alignment: usize) -> Self {
        let fmt = format.format();
        let planes = (0..fmt.num_planes)
            .map(|plane| {
                let (w, h) = fmt.plane_dimensions(plane, width, height);
                let row_bytes = w as usize * usize::from(fmt.bytes_per_sample);
                let stride = align_up(row_bytes, alignment.max(1));
                FramePlane {
                    width: w as usize,
                    height: h as usize,
                    stride,
                    data: vec![0; stride * h as usize],
                }
            })
            .collect();

        Self {
            format,
            width,
            height,
            planes,
            props: Map::new(),
        }
    }

    /// Pixel format.
    pub fn format(&self) -> PresetFormat {
        self.format
    }

    /// Luma width in pixels.
    pub fn frame_width(&self) -> u32 {
        self.width
    }

    /// Luma height in pixels.
    pub fn frame_height(&self) -> u32 {
        self.height
    }

    /// Number of planes.
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    /// Width of `plane` in samples.
    pub fn width(&self, plane: usize) -> usize {
        self.planes[plane].width
    }

    /// Height of `plane` in rows.
    pub fn height(&self, plane: usize) -> usize {
        self.planes[plane].height
    }

    /// Bytes occupied by the visible samples of one row of `plane`.
    pub fn row_bytes(&self, plane: usize) -> usize {
        self.planes[plane].width * usize::from(self.format.format().bytes_per_sample)
    }

    /// Bytes between row starts of `plane`.
    pub fn stride(&self, plane: usize) -> usize {
        self.planes[plane].stride
    }

    /// All bytes of `plane`, including row padding.
    pub fn plane(&self, plane: usize) -> &[u8] {
        &self.planes[plane].data
    }

    /// Mutable bytes of `plane`, including row padding.
    pub fn plane_mut(&mut self, plane: usize) -> &mut [u8] {
        &mut self.planes[plane].data
    }

    /// Visible samples of row `y` in `plane`.
    pub fn row(&self, plane: usize, y: usize) -> &[u8] {
        let p = &self.planes[plane];
        let start = y * p.stride;
        &p.data[start..start + self.row_bytes(plane)]
    }

    /// Frame properties.
    pub fn props(&self) -> &Map {
        &self.props
    }

    /// Mutable frame properties.
    pub fn props_mut(&mut self) -> &mut Map {
        &mut self.props
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/frame.rs"]
mod tests;
