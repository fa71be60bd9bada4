use anyhow::Result;
use log::debug;

use super::{needs_connectivity, resolve_output, run_pipeline};
use crate::cli::SheetArgs;
use crate::config::build_sheet_config;
use crate::display::Context as DisplayContext;

pub fn run_sheet(args: SheetArgs, ctx: DisplayContext) -> Result<()> {
    let spec = resolve_output(&args.common)?;
    let config = build_sheet_config(&args, needs_connectivity(&spec))?;
    debug!("graphite request: {config:?}");
    run_pipeline(&config, &spec, ctx)
}
