use std::path::PathBuf;

use crate::foundation::core::Fps;
use crate::foundation::error::{JpgrError, JpgrResult};
use crate::host::Map;

/// Read buffer capacity allocated before the first file is probed.
pub const INITIAL_READ_CAPACITY: usize = 2 * 1024 * 1024;

/// Adapter tuning knobs.
#[derive(Clone, Copy, Debug)]
pub struct SourceOpts {
    /// Bytes allocated for the read buffer up front; it grows to the largest file.
    pub initial_read_capacity: usize,
}

impl Default for SourceOpts {
    fn default() -> Self {
        Self {
            initial_read_capacity: INITIAL_READ_CAPACITY,
        }
    }
}

/// Typed arguments of `Read(files, fpsnum?, fpsden?)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadArgs {
    /// Frame files in presentation order.
    pub files: Vec<PathBuf>,
    /// Nominal frame rate.
    pub fps: Fps,
}

impl ReadArgs {
    /// Build arguments for `files` at the default rate.
    pub fn new(files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            fps: Fps::default(),
        }
    }

    /// Read `files`, `fpsnum`, and `fpsden` from a host argument map.
    pub fn from_map(args: &Map) -> JpgrResult<Self> {
        let count = args.num_elements("files").unwrap_or(0);
        if count == 0 {
            return Err(JpgrError::NoSource);
        }

        let mut files = Vec::with_capacity(count);
        for index in 0..count {
            let raw = args
                .get_data("files", index)
                .map_err(|_| JpgrError::EmptyFileName)?;
            if raw.is_empty() {
                return Err(JpgrError::EmptyFileName);
            }
            files.push(path_from_bytes(raw));
        }

        let fps = Fps::new(
            args.get_int("fpsnum", 0).unwrap_or(Fps::DEFAULT_NUM),
            args.get_int("fpsden", 0).unwrap_or(Fps::DEFAULT_DEN),
        );
        Ok(Self { files, fps })
    }

    /// Check the invariants [`ReadArgs::from_map`] enforces, for directly built arguments.
    pub fn validate(&self) -> JpgrResult<()> {
        if self.files.is_empty() {
            return Err(JpgrError::NoSource);
        }
        if self.files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err(JpgrError::EmptyFileName);
        }
        Ok(())
    }
}

#[cfg(unix)]
fn path_from_bytes(raw: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(raw))
}

#[cfg(not(unix))]
fn path_from_bytes(raw: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(raw).into_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/source/args.rs"]
mod tests;
