use super::*;

#[test]
fn probe_errors_append_the_offending_path() {
    let err = JpgrError::probe(ProbeError::Resolution, "/seq/b_720x480.jpg");
    assert_eq!(
        err.to_string(),
        "file has different resolution from first file : /seq/b_720x480.jpg"
    );
}

#[test]
fn header_errors_keep_the_decoder_message() {
    let err = JpgrError::probe(
        ProbeError::Header(DecoderError::new("Not a JPEG file")),
        "x.jpg",
    );
    assert_eq!(err.to_string(), "Not a JPEG file : x.jpg");
}

#[test]
fn configuration_messages_are_stable() {
    assert_eq!(JpgrError::NoSource.to_string(), "no source file");
    assert_eq!(
        JpgrError::EmptyFileName.to_string(),
        "zero length file name was found"
    );
    assert_eq!(JpgrError::UnsupportedFormat.to_string(), "unsupported format");
    assert_eq!(
        JpgrError::DecodeBufferAlloc.to_string(),
        "failed to allocate decode buffer"
    );
    assert_eq!(
        ProbeError::SampleType.to_string(),
        "file has different sample type from first file"
    );
}

#[test]
fn host_errors_are_transparent() {
    let err = JpgrError::from(HostError::InvalidVideoInfo("zero frames".to_string()));
    assert!(err.to_string().contains("zero frames"));
}
