//! Minimal model of the frame-server host the source plugin is written against.
//!
//! The host owns plugins, argument/property maps, frame allocation, and clip nodes. Filters see
//! it only through [`Core`], [`Map`], [`VideoFrame`], and the [`Filter`] trait.

pub(crate) mod frame;
pub(crate) mod map;
pub(crate) mod node;
pub(crate) mod plugin;
pub(crate) mod runtime;
pub(crate) mod video;

pub use frame::VideoFrame;
pub use map::{Map, PropError, Value, ValueKind};
pub use node::{ActivationReason, Filter, Node};
pub use plugin::{ArgSpec, Function, Plugin, PluginInfo, PublicFunction};
pub use runtime::{Core, CoreOpts};
pub use video::{ColorFamily, PresetFormat, VideoFormat, VideoInfo};

/// Host-side failures: plugin registration, invocation, and filter creation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A function signature could not be parsed.
    #[error("invalid signature '{signature}': {reason}")]
    InvalidSignature {
        /// Signature text as registered.
        signature: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A plugin registered functions without calling `configure`.
    #[error("plugin was not configured")]
    NotConfigured,

    /// Two plugins claimed the same namespace.
    #[error("namespace '{0}' is already in use")]
    DuplicateNamespace(String),

    /// A function name was registered twice in one plugin.
    #[error("function '{0}' is already registered")]
    DuplicateFunction(String),

    /// No plugin is loaded under the namespace.
    #[error("no plugin with namespace '{0}'")]
    UnknownNamespace(String),

    /// The plugin has no such function.
    #[error("no function named '{0}'")]
    UnknownFunction(String),

    /// Arguments did not match the function signature.
    #[error("{function}: {reason}")]
    Arguments {
        /// Function being invoked.
        function: String,
        /// Mismatch description.
        reason: String,
    },

    /// A filter reported video info the host cannot represent.
    #[error("invalid video info: {0}")]
    InvalidVideoInfo(String),
}
