/// JPEG chroma subsampling, as reported by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsampling {
    /// 4:4:4, no chroma subsampling.
    S444,
    /// 4:2:2, chroma halved horizontally.
    S422,
    /// 4:2:0, chroma halved in both directions.
    S420,
    /// Luma only.
    Gray,
    /// 4:4:0, chroma halved vertically.
    S440,
    /// 4:1:1, chroma quartered horizontally.
    S411,
    /// 4:4:1, chroma quartered vertically.
    S441,
}

impl Subsampling {
    /// MCU block size `(width, height)` in pixels.
    pub fn mcu_size(self) -> (usize, usize) {
        match self {
            Self::S444 | Self::Gray => (8, 8),
            Self::S422 => (16, 8),
            Self::S420 => (16, 16),
            Self::S440 => (8, 16),
            Self::S411 => (32, 8),
            Self::S441 => (8, 32),
        }
    }

    /// Number of image components (and therefore planes).
    pub fn num_components(self) -> usize {
        match self {
            Self::Gray => 1,
            _ => 3,
        }
    }
}
