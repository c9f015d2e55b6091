use super::args::{ReadArgs, SourceOpts};
use super::clip::JpegClip;
use crate::decode::DecoderFactory;
use crate::foundation::error::{JpgrError, JpgrResult};
use crate::host::{Core, Map, Node};

/// Prefix of every error this plugin reports to the host.
pub const ERROR_PREFIX: &str = "jpgs: ";

/// Host entry point of `Read`: build a clip from `args` and store it in `out` under `"clip"`.
///
/// On failure `out` carries only an error message prefixed with `jpgs: `.
pub fn create_source(
    args: &Map,
    out: &mut Map,
    core: &Core,
    decoders: &DecoderFactory,
    opts: &SourceOpts,
) {
    match build_node(args, core, decoders, opts) {
        Ok(node) => out.set_node("clip", node),
        Err(err) => {
            tracing::debug!(error = %err, "Read failed");
            out.set_error(format!("{ERROR_PREFIX}{err}"));
        }
    }
}

fn build_node(
    args: &Map,
    core: &Core,
    decoders: &DecoderFactory,
    opts: &SourceOpts,
) -> JpgrResult<Node> {
    let args = ReadArgs::from_map(args)?;
    let decoder = (decoders.as_ref())().map_err(JpgrError::DecoderInit)?;
    let clip = JpegClip::open(args, decoder, opts)?;
    Ok(core.create_filter("Read", Box::new(clip))?)
}
