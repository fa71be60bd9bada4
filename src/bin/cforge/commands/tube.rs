use anyhow::Result;
use log::debug;

use carbon_forge::StructureKind;

use super::{needs_connectivity, resolve_output, run_pipeline};
use crate::cli::TubeArgs;
use crate::config::build_tube_config;
use crate::display::Context as DisplayContext;

pub fn run_tube(kind: StructureKind, args: TubeArgs, ctx: DisplayContext) -> Result<()> {
    let spec = resolve_output(&args.common)?;
    let config = build_tube_config(kind, &args, needs_connectivity(&spec))?;
    debug!("{kind} request: {config:?}");
    run_pipeline(&config, &spec, ctx)
}
