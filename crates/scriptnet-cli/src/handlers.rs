//! Command handlers for CLI subcommands

use crate::cli::ResolveArgs;
use crate::config;
use crate::error::Result;
use crate::output::OutputWriter;
use scriptnet_core::ClientBuilder;

/// Handle the resolve command
pub fn handle_resolve(args: ResolveArgs, output: &mut OutputWriter) -> Result<()> {
    let loaded = match &args.config {
        Some(path) => {
            output.info(&format!("Resolving configuration: {}", path.display()))?;
            Some(config::load_file(path)?)
        }
        None => None,
    };
    let raw = config::apply_overrides(loaded, &args.overrides);

    let builder = ClientBuilder::new();
    let transport = if args.build {
        builder.build(raw.as_ref())?.config().clone()
    } else {
        builder.resolve(raw.as_ref())?
    };

    tracing::info!(built = args.build, "Configuration resolved");
    output.write_transport(&transport, args.build)
}
