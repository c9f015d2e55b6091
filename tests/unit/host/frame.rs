use super::*;

#[test]
fn strides_are_rounded_to_the_alignment() {
    let frame = VideoFrame::new(PresetFormat::Yuv420P8, 644, 480, 32);
    assert_eq!(frame.num_planes(), 3);
    assert_eq!((frame.width(0), frame.height(0), frame.stride(0)), (644, 480, 672));
    assert_eq!((frame.width(1), frame.height(1), frame.stride(1)), (322, 240, 352));
    assert_eq!(frame.plane(2).len(), 352 * 240);
}

#[test]
fn unit_alignment_leaves_rows_unpadded() {
    let frame = VideoFrame::new(PresetFormat::Yuv444P8, 641, 3, 1);
    for plane in 0..3 {
        assert_eq!(frame.stride(plane), frame.row_bytes(plane));
    }
}

#[test]
fn row_skips_padding() {
    let mut frame = VideoFrame::new(PresetFormat::Gray8, 3, 2, 8);
    frame.plane_mut(0).copy_from_slice(&[1, 2, 3, 0, 0, 0, 0, 0, 4, 5, 6, 0, 0, 0, 0, 0]);
    assert_eq!(frame.row(0, 0), &[1, 2, 3]);
    assert_eq!(frame.row(0, 1), &[4, 5, 6]);
}

#[test]
fn props_start_empty() {
    let mut frame = VideoFrame::new(PresetFormat::Gray8, 4, 4, 32);
    assert!(frame.props().is_empty());
    frame.props_mut().set_int("_DurationNum", 1);
    assert_eq!(frame.props().get_int("_DurationNum", 0).unwrap(), 1);
}
