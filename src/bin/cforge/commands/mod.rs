mod sheet;
mod tube;

use sheet::run_sheet;
use tube::run_tube;

use anyhow::{Context, Result, bail};

use carbon_forge::io::{Format, StructureWriter};
use carbon_forge::{BuildConfig, BuiltModel, StructureKind, build};

use crate::cli::{Command, CommonOptions};
use crate::display::{
    Context as DisplayContext, Progress, print_element_distribution, print_structure_info,
};
use crate::io::{OutputSpec, create_output, infer_output_format, stdout_is_tty};

const TOTAL_STEPS: u8 = 2;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Armchair(args) => run_tube(StructureKind::Armchair, args, ctx),
        Command::Zigzag(args) => run_tube(StructureKind::Zigzag, args, ctx),
        Command::Sheet(args) => run_sheet(args, ctx),
    }
}

fn resolve_output(opts: &CommonOptions) -> Result<OutputSpec> {
    let Some(path) = &opts.output else {
        if stdout_is_tty() {
            bail!(
                "No output file specified and stdout is a terminal.\n\nUsage: cforge <COMMAND> ... -o <OUTPUT> or pipe output."
            );
        }
        return Ok(OutputSpec {
            path: None,
            format: opts.format.map(Format::from).unwrap_or_default(),
            backup: false,
        });
    };

    let format = match opts.format {
        Some(fmt) => fmt.into(),
        None => infer_output_format(path).with_context(|| {
            format!(
                "Cannot infer format from '{}'. Use --format to specify.",
                path.display()
            )
        })?,
    };

    Ok(OutputSpec {
        path: Some(path.clone()),
        format,
        backup: !opts.no_backup,
    })
}

/// Builds `config`, reports it and writes it to `spec`.
fn run_pipeline(config: &BuildConfig, spec: &OutputSpec, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Building structure");
    let model = build(config).context("Structure generation failed")?;
    progress.complete_step("Building structure", &build_substeps(config, &model));

    if ctx.interactive {
        print_structure_info(&model);
        print_element_distribution(&model.structure);
    }

    progress.step("Writing output");
    let writer = create_output(spec)?;
    StructureWriter::new(writer, spec.format)
        .write(&model)
        .context("Failed to write structure file")?;
    progress.complete_step("Writing output", &[write_substep(spec)]);

    progress.finish();

    Ok(())
}

fn build_substeps(config: &BuildConfig, model: &BuiltModel) -> Vec<String> {
    let s = &model.structure;
    let mut steps = vec![format!(
        "Generate {} lattice ({} atoms)",
        s.kind, s.lattice_atom_count
    )];

    if s.added_atom_count() > 0 {
        steps.push(format!(
            "Saturate borders with {} ({} atoms)",
            config.functionalization,
            s.added_atom_count()
        ));
    } else {
        steps.push("Leave periodic borders open".to_string());
    }

    if config.params.is_some() {
        steps.push("Apply custom bonding parameters".to_string());
    }

    if let Some(conn) = &model.connectivity {
        steps.push(format!(
            "Infer connectivity ({} bonds, {} periodic)",
            conn.bond_count(),
            conn.periodic_bonds.len()
        ));
    }

    steps
}

fn write_substep(spec: &OutputSpec) -> String {
    let target = spec
        .path
        .as_ref()
        .map(|p| {
            p.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| "stdout".to_string());
    format!("Write {} → {}", spec.format, target)
}

/// Connectivity is only computed for formats that list bonds.
fn needs_connectivity(spec: &OutputSpec) -> bool {
    spec.format.needs_connectivity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    fn common(args: &[&str]) -> CommonOptions {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Armchair(a) | Command::Zigzag(a) => a.common,
            Command::Sheet(a) => a.common,
        }
    }

    #[test]
    fn output_format_is_inferred_or_explicit() {
        let opts = common(&["cforge", "armchair", "5", "10", "-o", "cnt.mol2"]);
        let spec = resolve_output(&opts).unwrap();
        assert_eq!(spec.format, Format::Mol2);
        assert!(spec.backup);

        let opts = common(&[
            "cforge", "armchair", "5", "10", "-o", "cnt.dat", "--format", "gro", "--no-backup",
        ]);
        let spec = resolve_output(&opts).unwrap();
        assert_eq!(spec.format, Format::Gro);
        assert!(!spec.backup);
    }

    #[test]
    fn unknown_extension_without_format_fails() {
        let opts = common(&["cforge", "armchair", "5", "10", "-o", "cnt.pdb"]);
        let err = resolve_output(&opts).unwrap_err();
        assert!(err.to_string().contains("Cannot infer format"));
    }

    #[test]
    fn pipeline_writes_tinker_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cnt.txyz");
        let spec = OutputSpec {
            path: Some(path.clone()),
            format: Format::Tinker,
            backup: true,
        };
        let config = BuildConfig {
            connectivity: needs_connectivity(&spec),
            ..Default::default()
        };
        run_pipeline(&config, &spec, DisplayContext { interactive: false }).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(" 120"));
        assert_eq!(text.lines().count(), 121);
        assert!(!Path::new(&format!("{}_bak-1", path.display())).exists());
    }

    #[test]
    fn substeps_describe_the_build() {
        let config = BuildConfig::default();
        let model = build(&config).unwrap();
        let steps = build_substeps(&config, &model);
        assert!(steps[0].contains("100 atoms"));
        assert!(steps[1].contains("hydrogen (20 atoms)"));
        assert!(steps[2].contains("160 bonds"));
    }
}
