use smallvec::SmallVec;

use super::sampling::Subsampling;
use crate::foundation::core::align_up;

/// Geometry of one plane inside a planar decode buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Plane width in samples.
    pub width: usize,
    /// Plane height in rows.
    pub height: usize,
    /// Bytes between consecutive rows (width padded to the row alignment).
    pub stride: usize,
    /// Byte offset of the first row from the start of the buffer.
    pub offset: usize,
}

impl PlaneLayout {
    /// Total bytes occupied by the plane.
    pub fn len(&self) -> usize {
        self.stride * self.height
    }

    /// Return `true` for a plane with no rows or columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow this plane out of a buffer holding the whole image.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.offset..self.offset + self.len()]
    }
}

/// Planes of one decoded image, packed back to back in component order.
///
/// Plane dimensions follow libjpeg-turbo's rules: the luma plane is the image width padded to the
/// horizontal MCU factor, chroma planes are that width divided by the factor, and likewise for
/// height. Rows are padded to `align` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanarLayout {
    planes: SmallVec<[PlaneLayout; 3]>,
    len: usize,
}

impl PlanarLayout {
    /// Compute the layout for an 8-bit image of the given dimensions.
    pub fn new(width: usize, height: usize, subsampling: Subsampling, align: usize) -> Self {
        let (mcu_w, mcu_h) = subsampling.mcu_size();
        let (hf, vf) = (mcu_w / 8, mcu_h / 8);
        let luma_w = align_up(width, hf);
        let luma_h = align_up(height, vf);

        let mut planes = SmallVec::new();
        let mut offset = 0;
        for component in 0..subsampling.num_components() {
            let (w, h) = if component == 0 {
                (luma_w, luma_h)
            } else {
                (luma_w / hf, luma_h / vf)
            };
            let plane = PlaneLayout {
                width: w,
                height: h,
                stride: align_up(w, align),
                offset,
            };
            offset += plane.len();
            planes.push(plane);
        }

        Self {
            planes,
            len: offset,
        }
    }

    /// Planes in component order (Y, Cb, Cr).
    pub fn planes(&self) -> &[PlaneLayout] {
        &self.planes
    }

    /// Total buffer size in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` for a zero-sized image.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/layout.rs"]
mod tests;
