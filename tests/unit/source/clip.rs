use super::*;

#[test]
fn dimensions_that_fit_convert() {
    assert_eq!(to_u32(644).unwrap(), 644);
    assert_eq!(to_u32(u32::MAX as usize).unwrap(), u32::MAX);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn oversized_dimensions_are_invalid_video_info() {
    let err = to_u32(u32::MAX as usize + 1).unwrap_err();
    assert!(matches!(err, JpgrError::Host(HostError::InvalidVideoInfo(_))));
    assert!(err.to_string().starts_with("invalid video info: frame dimension"));
}

#[test]
fn empty_arguments_still_release_the_decoder() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::decode::{DecoderError, JpegHeader};

    struct Counting(Arc<AtomicUsize>);

    impl JpegDecoder for Counting {
        fn read_header(&mut self, _: &[u8]) -> Result<JpegHeader, DecoderError> {
            Err(DecoderError::new("unused"))
        }

        fn decode_planar(&mut self, _: &[u8], _: &mut [u8]) -> Result<PlanarLayout, DecoderError> {
            Err(DecoderError::new("unused"))
        }

        fn close(&mut self) -> Result<(), DecoderError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    let closes = Arc::new(AtomicUsize::new(0));
    let err = JpegClip::open(
        ReadArgs::new(Vec::<PathBuf>::new()),
        Box::new(Counting(closes.clone())),
        &SourceOpts::default(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, JpgrError::NoSource));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}
