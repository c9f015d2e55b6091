use super::*;

fn temp_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "jpgr_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn ensure_grows_only_when_needed() {
    let mut buf = ReadBuffer::with_capacity(8).unwrap();
    assert_eq!((buf.capacity(), buf.allocations()), (8, 1));

    buf.ensure(4).unwrap();
    buf.ensure(8).unwrap();
    assert_eq!(buf.allocations(), 1);

    buf.ensure(20).unwrap();
    assert_eq!((buf.capacity(), buf.allocations()), (20, 2));

    buf.ensure(10).unwrap();
    assert_eq!((buf.capacity(), buf.allocations()), (20, 2));
}

#[test]
fn load_reads_exactly_len_bytes() {
    let path = temp_file("load_exact", b"0123456789");
    let mut buf = ReadBuffer::with_capacity(16).unwrap();
    assert_eq!(buf.load(&path, 4).unwrap(), b"0123");
    assert_eq!(buf.load(&path, 10).unwrap(), b"0123456789");
    std::fs::remove_file(&path).ok();
}

#[test]
fn short_files_fail_to_read() {
    let path = temp_file("load_short", b"abc");
    let mut buf = ReadBuffer::with_capacity(16).unwrap();
    assert!(matches!(buf.load(&path, 8), Err(LoadError::Read(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_files_fail_to_open() {
    let mut buf = ReadBuffer::with_capacity(16).unwrap();
    let missing = std::env::temp_dir().join("jpgr_definitely_missing.jpg");
    assert!(matches!(buf.load(&missing, 1), Err(LoadError::Open(_))));
}

#[test]
fn load_beyond_capacity_is_an_error() {
    let path = temp_file("load_capacity", b"0123456789");
    let mut buf = ReadBuffer::with_capacity(4).unwrap();
    assert!(matches!(
        buf.load(&path, 10),
        Err(LoadError::Capacity {
            needed: 10,
            capacity: 4
        })
    ));
    std::fs::remove_file(&path).ok();
}
