use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use super::frame::VideoFrame;
use super::runtime::Core;
use super::video::VideoInfo;

/// Why the host is calling a filter's frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationReason {
    /// First request for the frame; the filter should produce it.
    Initial,
    /// Frames the filter requested upstream are ready.
    AllFramesReady,
    /// An upstream request failed.
    Error,
}

/// A clip implementation registered with the host.
///
/// `get_frame` takes `&mut self`: the host never runs two requests against the same filter at
/// once, so a filter may keep mutable scratch state. Dropping the filter is its destructor.
pub trait Filter: Send {
    /// Clip description; constant for the filter's lifetime.
    fn video_info(&self) -> VideoInfo;

    /// Produce frame `n`, or `None` on failure or when `reason` needs no work.
    fn get_frame(&mut self, n: usize, reason: ActivationReason, core: &Core)
    -> Option<VideoFrame>;
}

struct NodeInner {
    name: String,
    info: VideoInfo,
    filter: Mutex<Box<dyn Filter>>,
}

/// Shared handle to a filter instance. Cloning shares the same filter.
#[derive(Clone)]
pub struct Node {
    inner: Arc<NodeInner>,
}

impl Node {
    pub(crate) fn new(name: &str, info: VideoInfo, filter: Box<dyn Filter>) -> Self {
        Self {
            inner: Arc::new(NodeInner {
                name: name.to_string(),
                info,
                filter: Mutex::new(filter),
            }),
        }
    }

    /// Filter name given at creation.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Clip description.
    pub fn video_info(&self) -> &VideoInfo {
        &self.inner.info
    }

    /// Request frame `n` the way the host does on first access.
    pub fn get_frame(&self, n: usize, core: &Core) -> Option<VideoFrame> {
        self.request(n, ActivationReason::Initial, core)
    }

    /// Forward a request with an explicit activation reason.
    pub fn request(&self, n: usize, reason: ActivationReason, core: &Core) -> Option<VideoFrame> {
        self.lock().get_frame(n, reason, core)
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Filter>> {
        // Filters keep only scratch state across requests.
        match self.inner.filter.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.inner.name)
            .field("info", &self.inner.info)
            .finish_non_exhaustive()
    }
}
