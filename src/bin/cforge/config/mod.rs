use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use carbon_forge::{BuildConfig, Geometry, Periodicity, StructureKind};

use crate::cli::{CommonOptions, SheetArgs, TubeArgs};

pub fn build_tube_config(
    kind: StructureKind,
    args: &TubeArgs,
    connectivity: bool,
) -> Result<BuildConfig> {
    Ok(BuildConfig {
        structure: kind,
        geometry: Geometry::Tube {
            rings: args.rings,
            length: args.length,
        },
        functionalization: args.functionalization.into(),
        periodicity: if args.periodic {
            Periodicity::Y
        } else {
            Periodicity::NONE
        },
        ..common_config(&args.common, connectivity)?
    })
}

pub fn build_sheet_config(args: &SheetArgs, connectivity: bool) -> Result<BuildConfig> {
    Ok(BuildConfig {
        structure: StructureKind::Graphite,
        geometry: Geometry::Sheet {
            width: args.width,
            height: args.height,
        },
        functionalization: args.functionalization.into(),
        periodicity: args.periodic.map(Periodicity::from).unwrap_or(Periodicity::NONE),
        ..common_config(&args.common, connectivity)?
    })
}

fn common_config(opts: &CommonOptions, connectivity: bool) -> Result<BuildConfig> {
    Ok(BuildConfig {
        bond_length: opts.bond_length,
        params: opts.params.as_deref().map(read_params).transpose()?,
        connectivity,
        ..Default::default()
    })
}

fn read_params(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read bonding parameters: {}", path.display()))
}
