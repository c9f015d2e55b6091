use std::collections::BTreeMap;

use super::HostError;
use super::frame::VideoFrame;
use super::map::Map;
use super::node::{Filter, Node};
use super::plugin::Plugin;
use super::video::PresetFormat;

/// Host configuration.
#[derive(Clone, Copy, Debug)]
pub struct CoreOpts {
    /// Row alignment in bytes applied to every plane of allocated frames.
    pub frame_alignment: usize,
}

impl Default for CoreOpts {
    fn default() -> Self {
        Self {
            frame_alignment: 32,
        }
    }
}

/// The host runtime: loaded plugins, frame allocation, and node creation.
#[derive(Debug, Default)]
pub struct Core {
    opts: CoreOpts,
    plugins: BTreeMap<String, Plugin>,
}

impl Core {
    /// Create a host with no plugins loaded.
    pub fn new(opts: CoreOpts) -> Self {
        Self {
            opts,
            plugins: BTreeMap::new(),
        }
    }

    /// Host configuration.
    pub fn opts(&self) -> CoreOpts {
        self.opts
    }

    /// Run a plugin's init hook and make its functions available under its namespace.
    pub fn load_plugin(&mut self, init: impl FnOnce(&mut Plugin)) -> Result<(), HostError> {
        let mut plugin = Plugin::new();
        init(&mut plugin);
        let info = plugin.info().ok_or(HostError::NotConfigured)?;
        let namespace = info.namespace.clone();
        if self.plugins.contains_key(&namespace) {
            return Err(HostError::DuplicateNamespace(namespace));
        }
        tracing::debug!(
            identifier = %info.identifier,
            namespace = %namespace,
            functions = plugin.functions().count(),
            "plugin loaded"
        );
        self.plugins.insert(namespace, plugin);
        Ok(())
    }

    /// Loaded plugin by namespace.
    pub fn plugin(&self, namespace: &str) -> Option<&Plugin> {
        self.plugins.get(namespace)
    }

    /// Call `namespace.function(args)` and return its output map.
    ///
    /// Argument mismatches are reported in the output map's error slot without calling the
    /// function.
    pub fn invoke(&self, namespace: &str, function: &str, args: &Map) -> Map {
        let mut out = Map::new();
        let resolved = self
            .plugins
            .get(namespace)
            .ok_or_else(|| HostError::UnknownNamespace(namespace.to_string()))
            .and_then(|p| {
                p.function(function)
                    .ok_or_else(|| HostError::UnknownFunction(function.to_string()))
            })
            .and_then(|f| f.check_args(args).map(|()| f));
        match resolved {
            Ok(f) => f.call(args, &mut out, self),
            Err(err) => out.set_error(err.to_string()),
        }
        out
    }

    /// Allocate a zeroed frame with this host's row alignment.
    pub fn new_video_frame(&self, format: PresetFormat, width: u32, height: u32) -> VideoFrame {
        VideoFrame::new(format, width, height, self.opts.frame_alignment)
    }

    /// Wrap `filter` into a node after validating its video info.
    ///
    /// The filter is dropped (its destructor runs) when validation fails.
    pub fn create_filter(&self, name: &str, filter: Box<dyn Filter>) -> Result<Node, HostError> {
        let info = filter.video_info();
        info.validate()?;
        Ok(Node::new(name, info, filter))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/runtime.rs"]
mod tests;
