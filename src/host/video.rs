use super::HostError;

/// Colour family of a host pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Luma only.
    Gray,
    /// Luma plus two chroma planes.
    Yuv,
}

/// Planar 8-bit pixel formats known to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetFormat {
    /// Single luma plane.
    Gray8,
    /// YUV 4:2:0.
    Yuv420P8,
    /// YUV 4:2:2.
    Yuv422P8,
    /// YUV 4:4:4.
    Yuv444P8,
    /// YUV 4:4:0.
    Yuv440P8,
}

/// Description of a host pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoFormat {
    /// Short format name.
    pub name: &'static str,
    /// Colour family.
    pub color_family: ColorFamily,
    /// Bits per sample.
    pub bits_per_sample: u8,
    /// Bytes per sample.
    pub bytes_per_sample: u8,
    /// log2 horizontal chroma subsampling.
    pub sub_sampling_w: u8,
    /// log2 vertical chroma subsampling.
    pub sub_sampling_h: u8,
    /// Number of planes.
    pub num_planes: usize,
}

impl PresetFormat {
    /// Full description of the preset.
    pub fn format(self) -> VideoFormat {
        let (name, color_family, sub_sampling_w, sub_sampling_h) = match self {
            Self::Gray8 => ("Gray8", ColorFamily::Gray, 0, 0),
            Self::Yuv420P8 => ("YUV420P8", ColorFamily::Yuv, 1, 1),
            Self::Yuv422P8 => ("YUV422P8", ColorFamily::Yuv, 1, 0),
            Self::Yuv444P8 => ("YUV444P8", ColorFamily::Yuv, 0, 0),
            Self::Yuv440P8 => ("YUV440P8", ColorFamily::Yuv, 0, 1),
        };
        VideoFormat {
            name,
            color_family,
            bits_per_sample: 8,
            bytes_per_sample: 1,
            sub_sampling_w,
            sub_sampling_h,
            num_planes: match color_family {
                ColorFamily::Gray => 1,
                ColorFamily::Yuv => 3,
            },
        }
    }
}

impl VideoFormat {
    /// Width and height in samples of `plane` for a frame of `width`×`height`.
    pub fn plane_dimensions(&self, plane: usize, width: u32, height: u32) -> (u32, u32) {
        if plane == 0 {
            (width, height)
        } else {
            (width >> self.sub_sampling_w, height >> self.sub_sampling_h)
        }
    }
}

/// Clip-level video description exposed to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoInfo {
    /// Pixel format of every frame.
    pub format: PresetFormat,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames.
    pub num_frames: usize,
    /// Frame rate numerator.
    pub fps_num: i64,
    /// Frame rate denominator.
    pub fps_den: i64,
}

impl VideoInfo {
    /// Check that the clip is representable: non-empty and divisible by its subsampling.
    pub fn validate(&self) -> Result<(), HostError> {
        if self.width == 0 || self.height == 0 {
            return Err(HostError::InvalidVideoInfo(format!(
                "zero-sized frames ({}x{})",
                self.width, self.height
            )));
        }
        if self.num_frames == 0 {
            return Err(HostError::InvalidVideoInfo("clip has no frames".to_string()));
        }
        let fmt = self.format.format();
        let w_mask = (1u32 << fmt.sub_sampling_w) - 1;
        let h_mask = (1u32 << fmt.sub_sampling_h) - 1;
        if self.width & w_mask != 0 || self.height & h_mask != 0 {
            return Err(HostError::InvalidVideoInfo(format!(
                "{}x{} is not divisible by the {} subsampling",
                self.width, self.height, fmt.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/video.rs"]
mod tests;
