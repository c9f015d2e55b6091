use super::*;

fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn unpadded_planes_copy_in_one_piece() {
    let src = ramp(8 * 4);
    let mut dst = vec![0u8; 8 * 4];
    copy_plane(&mut dst, 8, 8, 4, &src, 8);
    assert_eq!(dst, src);
}

#[test]
fn padded_destination_rows_receive_source_rows() {
    let (w, h, stride) = (6, 3, 16);
    let src = ramp(w * h);
    let mut dst = vec![0xAAu8; stride * h];
    copy_plane(&mut dst, stride, w, h, &src, w);

    for y in 0..h {
        assert_eq!(&dst[y * stride..y * stride + w], &src[y * w..(y + 1) * w]);
        assert!(dst[y * stride + w..(y + 1) * stride].iter().all(|&b| b == 0xAA));
    }
}

#[test]
fn wider_source_rows_are_truncated_to_the_destination() {
    // 642-wide chroma decoded with 4-byte row padding into an unpadded 322-byte row.
    let (src_stride, row_bytes, rows) = (324, 322, 2);
    let src = ramp(src_stride * rows);
    let mut dst = vec![0u8; row_bytes * rows];
    copy_plane(&mut dst, row_bytes, row_bytes, rows, &src, src_stride);

    assert_eq!(&dst[..row_bytes], &src[..row_bytes]);
    assert_eq!(&dst[row_bytes..], &src[src_stride..src_stride + row_bytes]);
}

#[test]
fn destination_rows_beyond_the_source_stay_untouched() {
    let src = ramp(4 * 2);
    let mut dst = vec![9u8; 4 * 3];
    copy_plane(&mut dst, 4, 4, 3, &src, 4);
    assert_eq!(&dst[..8], &src[..]);
    assert_eq!(&dst[8..], &[9, 9, 9, 9]);
}

#[test]
fn empty_planes_are_ignored() {
    let mut dst = vec![1u8; 4];
    copy_plane(&mut dst, 4, 0, 0, &[], 0);
    assert_eq!(dst, vec![1u8; 4]);
}
