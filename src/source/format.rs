use crate::decode::Subsampling;
use crate::host::PresetFormat;

/// Host pixel format for an 8-bit JPEG with the given chroma subsampling.
///
/// Returns `None` for subsamplings the host has no planar preset for.
pub fn pixel_format_for(subsampling: Subsampling) -> Option<PresetFormat> {
    match subsampling {
        Subsampling::S444 => Some(PresetFormat::Yuv444P8),
        Subsampling::S422 => Some(PresetFormat::Yuv422P8),
        Subsampling::S420 => Some(PresetFormat::Yuv420P8),
        Subsampling::S440 => Some(PresetFormat::Yuv440P8),
        Subsampling::Gray => Some(PresetFormat::Gray8),
        Subsampling::S411 | Subsampling::S441 => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/format.rs"]
mod tests;
