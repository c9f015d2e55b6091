use std::path::PathBuf;

use super::*;
use crate::decode::{DecoderError, JpegHeader, PlanarLayout};

/// Reads headers written as `WIDTHxHEIGHT:SUBSAMPLING` text.
struct TextHeaders;

impl JpegDecoder for TextHeaders {
    fn read_header(&mut self, jpeg: &[u8]) -> Result<JpegHeader, DecoderError> {
        let text = std::str::from_utf8(jpeg).map_err(|_| DecoderError::new("not text"))?;
        let (dims, ss) = text
            .trim()
            .split_once(':')
            .ok_or_else(|| DecoderError::new("Not a JPEG file"))?;
        let (w, h) = dims
            .split_once('x')
            .ok_or_else(|| DecoderError::new("bad dims"))?;
        let subsampling = match ss {
            "444" => Subsampling::S444,
            "420" => Subsampling::S420,
            "gray" => Subsampling::Gray,
            _ => return Err(DecoderError::new("bad subsampling")),
        };
        Ok(JpegHeader {
            width: w.parse().map_err(|_| DecoderError::new("bad width"))?,
            height: h.parse().map_err(|_| DecoderError::new("bad height"))?,
            subsampling,
        })
    }

    fn decode_planar(&mut self, _: &[u8], _: &mut [u8]) -> Result<PlanarLayout, DecoderError> {
        Err(DecoderError::new("headers only"))
    }
}

struct Dir(PathBuf);

impl Dir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "jpgr_probe_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for Dir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

#[test]
fn first_file_sets_the_expected_shape() {
    let dir = Dir::new("first");
    let a = dir.file("a.jpg", "641x480:444");
    let mut buf = ReadBuffer::with_capacity(4).unwrap();
    let mut expected = None;

    let size = probe_file(&a, &mut buf, &mut TextHeaders, &mut expected).unwrap();
    assert_eq!(size, 11);
    assert_eq!(buf.capacity(), 11);
    assert_eq!(
        expected,
        Some(FrameShape {
            width: 644,
            height: 480,
            subsampling: Subsampling::S444,
        })
    );
}

#[test]
fn widths_that_align_to_the_same_value_match() {
    let dir = Dir::new("align");
    let a = dir.file("a.jpg", "641x480:420");
    let b = dir.file("b.jpg", "644x480:420");
    let mut buf = ReadBuffer::with_capacity(64).unwrap();
    let mut expected = None;

    probe_file(&a, &mut buf, &mut TextHeaders, &mut expected).unwrap();
    probe_file(&b, &mut buf, &mut TextHeaders, &mut expected).unwrap();
}

#[test]
fn mismatches_are_reported_resolution_first() {
    let dir = Dir::new("mismatch");
    let a = dir.file("a.jpg", "640x480:420");
    let wider = dir.file("b.jpg", "720x480:444");
    let gray = dir.file("c.jpg", "640x480:gray");
    let mut buf = ReadBuffer::with_capacity(64).unwrap();
    let mut expected = None;

    probe_file(&a, &mut buf, &mut TextHeaders, &mut expected).unwrap();
    assert_eq!(
        probe_file(&wider, &mut buf, &mut TextHeaders, &mut expected),
        Err(ProbeError::Resolution)
    );
    assert_eq!(
        probe_file(&gray, &mut buf, &mut TextHeaders, &mut expected),
        Err(ProbeError::SampleType)
    );
}

#[test]
fn missing_files_and_bad_headers() {
    let dir = Dir::new("errors");
    let junk = dir.file("junk.jpg", "hello");
    let mut buf = ReadBuffer::with_capacity(64).unwrap();
    let mut expected = None;

    assert_eq!(
        probe_file(
            &dir.0.join("nope.jpg"),
            &mut buf,
            &mut TextHeaders,
            &mut expected
        ),
        Err(ProbeError::NotFound)
    );
    assert_eq!(
        probe_file(&junk, &mut buf, &mut TextHeaders, &mut expected),
        Err(ProbeError::Header(DecoderError::new("Not a JPEG file")))
    );
    assert_eq!(expected, None);
}
