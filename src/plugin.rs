//! Plugin registration.

use crate::decode::DecoderFactory;
use crate::host::Plugin;
use crate::source::args::SourceOpts;
use crate::source::create::create_source;

/// Unique plugin identifier.
pub const PLUGIN_ID: &str = "chikuzen.does.not.have.his.own.domain.jpgr";
/// Namespace the `Read` function is invoked under.
pub const NAMESPACE: &str = "jpgr";
/// Signature of `Read`.
pub const READ_SIGNATURE: &str = "files:data[];fpsnum:int:opt;fpsden:int:opt";

/// Description banner, including the crate version.
pub fn description() -> String {
    format!("JPEG image reader for VapourSynth {}", env!("CARGO_PKG_VERSION"))
}

/// Plugin init hook using the libjpeg-turbo decoder.
#[cfg(feature = "turbojpeg")]
pub fn plugin_init(plugin: &mut Plugin) {
    plugin_init_with(plugin, crate::decode::turbo_factory(), SourceOpts::default());
}

/// Plugin init hook with an explicit decoder backend and adapter options.
pub fn plugin_init_with(plugin: &mut Plugin, decoders: DecoderFactory, opts: SourceOpts) {
    plugin.configure(PLUGIN_ID, NAMESPACE, &description());
    let registered = plugin.register_function("Read", READ_SIGNATURE, move |args, out, core| {
        create_source(args, out, core, &decoders, &opts)
    });
    if let Err(err) = registered {
        tracing::error!(error = %err, "failed to register Read");
    }
}
