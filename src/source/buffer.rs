use std::collections::TryReserveError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Allocate `len` zeroed bytes, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<u8>, TryReserveError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Growable buffer that holds one compressed file at a time.
///
/// Capacity only ever grows, and each growth replaces the allocation with one of exactly the
/// requested size.
#[derive(Debug, Default)]
pub(crate) struct ReadBuffer {
    bytes: Vec<u8>,
    allocations: usize,
}

impl ReadBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            bytes: alloc_zeroed(capacity)?,
            allocations: 1,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of allocations made so far, including the initial one.
    pub(crate) fn allocations(&self) -> usize {
        self.allocations
    }

    /// Make room for `len` bytes.
    pub(crate) fn ensure(&mut self, len: usize) -> Result<(), TryReserveError> {
        if self.bytes.len() >= len {
            return Ok(());
        }
        tracing::trace!(from = self.bytes.len(), to = len, "growing read buffer");
        self.bytes = Vec::new();
        self.bytes = alloc_zeroed(len)?;
        self.allocations += 1;
        Ok(())
    }

    /// Read exactly `len` bytes of `path` into the buffer and borrow them.
    ///
    /// The caller must have called [`ReadBuffer::ensure`] for `len`.
    pub(crate) fn load(&mut self, path: &Path, len: usize) -> Result<&[u8], LoadError> {
        let mut file = File::open(path).map_err(LoadError::Open)?;
        let capacity = self.bytes.len();
        let dst = self.bytes.get_mut(..len).ok_or(LoadError::Capacity {
            needed: len,
            capacity,
        })?;
        file.read_exact(dst).map_err(LoadError::Read)?;
        Ok(dst)
    }
}

/// Failure to load a file into the read buffer.
#[derive(thiserror::Error, Debug)]
pub(crate) enum LoadError {
    #[error("open failed: {0}")]
    Open(io::Error),

    #[error("read failed: {0}")]
    Read(io::Error),

    #[error("read buffer holds {capacity} bytes, {needed} needed")]
    Capacity { needed: usize, capacity: usize },
}

#[cfg(test)]
#[path = "../../tests/unit/source/buffer.rs"]
mod tests;
