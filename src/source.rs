//! The JPEG sequence clip: argument parsing, input probing, and frame production.

pub(crate) mod args;
pub(crate) mod buffer;
pub(crate) mod clip;
pub(crate) mod create;
pub(crate) mod format;
pub(crate) mod probe;
pub(crate) mod produce;
