use turbojpeg::{Decompressor, Subsamp, YuvImage};

use super::{DecoderError, JpegDecoder, JpegHeader, PlanarLayout, Subsampling, YUV_ROW_ALIGN};

/// [`JpegDecoder`] backed by libjpeg-turbo through the `turbojpeg` crate.
pub struct TurboDecoder {
    inner: Decompressor,
}

impl TurboDecoder {
    /// Initialise a decompressor context.
    pub fn new() -> Result<Self, DecoderError> {
        let inner = Decompressor::new().map_err(to_decoder_error)?;
        Ok(Self { inner })
    }
}

impl std::fmt::Debug for TurboDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurboDecoder").finish_non_exhaustive()
    }
}

impl JpegDecoder for TurboDecoder {
    fn read_header(&mut self, jpeg: &[u8]) -> Result<JpegHeader, DecoderError> {
        let header = self.inner.read_header(jpeg).map_err(to_decoder_error)?;
        Ok(JpegHeader {
            width: header.width,
            height: header.height,
            subsampling: subsampling_from_turbo(header.subsamp)?,
        })
    }

    fn decode_planar(&mut self, jpeg: &[u8], out: &mut [u8]) -> Result<PlanarLayout, DecoderError> {
        let header = self.inner.read_header(jpeg).map_err(to_decoder_error)?;
        let layout = PlanarLayout::new(
            header.width,
            header.height,
            subsampling_from_turbo(header.subsamp)?,
            YUV_ROW_ALIGN,
        );
        if out.len() < layout.len() {
            return Err(DecoderError::new(format!(
                "decode buffer too small: {} < {}",
                out.len(),
                layout.len()
            )));
        }

        let image = YuvImage {
            pixels: &mut out[..layout.len()],
            width: header.width,
            align: YUV_ROW_ALIGN,
            height: header.height,
            subsamp: header.subsamp,
        };
        self.inner
            .decompress_to_yuv(jpeg, image)
            .map_err(to_decoder_error)?;
        Ok(layout)
    }
}

fn to_decoder_error(err: turbojpeg::Error) -> DecoderError {
    DecoderError::new(err.to_string())
}

// Any value libjpeg-turbo reports beyond these is a header error.
#[allow(unreachable_patterns)]
fn subsampling_from_turbo(subsamp: Subsamp) -> Result<Subsampling, DecoderError> {
    match subsamp {
        Subsamp::None => Ok(Subsampling::S444),
        Subsamp::Sub2x1 => Ok(Subsampling::S422),
        Subsamp::Sub2x2 => Ok(Subsampling::S420),
        Subsamp::Gray => Ok(Subsampling::Gray),
        Subsamp::Sub1x2 => Ok(Subsampling::S440),
        Subsamp::Sub4x1 => Ok(Subsampling::S411),
        Subsamp::Sub1x4 => Ok(Subsampling::S441),
        other => Err(DecoderError::new(format!(
            "unrecognised chroma subsampling {other:?}"
        ))),
    }
}
