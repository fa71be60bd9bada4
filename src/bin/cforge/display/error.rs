use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Hints for the typed library errors in the chain, falling back to
/// keyword matches on the rendered chain.
fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(e) = err.downcast_ref::<carbon_forge::BuildError>() {
        build_hints(e, &mut hints);
    } else if let Some(e) = err.downcast_ref::<carbon_forge::WriteError>() {
        write_hints(e, &mut hints);
    } else if let Some(e) = err.downcast_ref::<std::io::Error>() {
        std_io_hints(e, &mut hints);
    } else {
        fallback_hints(err, &mut hints);
    }

    hints
}

fn build_hints(err: &carbon_forge::BuildError, hints: &mut Vec<String>) {
    use carbon_forge::BuildError;

    match err {
        BuildError::ParameterParse(_) => {
            hints.push("The bonding parameter file has invalid TOML".into());
            hints.push("Expected tables: [radii] C/H/O, [tolerance] carbon_carbon/hetero, [neighbors] max".into());
        }
        BuildError::UnsupportedConfiguration { structure, .. } => {
            hints.push(format!("Carboxyl groups are only placed on nanotube rims, not on {structure}"));
            hints.push("Use -f none or -f oh for graphite sheets".into());
        }
        BuildError::InvalidGeometry(_) => {
            hints.push(format!("Ring counts must be between 1 and {}", carbon_forge::MAX_RINGS));
            hints.push("Lengths, widths and heights must be finite and not negative".into());
            hints.push("The bond length must be positive".into());
        }
    }
}

fn write_hints(err: &carbon_forge::WriteError, hints: &mut Vec<String>) {
    use carbon_forge::WriteError;

    match err {
        WriteError::Io { source } => std_io_hints(source, hints),
        WriteError::MissingConnectivity(format) => {
            hints.push(format!("{format} output lists bonds; build with connectivity enabled"));
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the directory exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("The output consumer exited early".into());
            hints.push("This may occur when piping to commands like `head`".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let msg = error_chain_text(err);

    if msg.contains("terminal") {
        hints.push("Pass -o <FILE> or pipe the output into another command".into());
    } else if msg.contains("infer format") {
        hints.push("Known extensions: .txyz .tnk .arc .xyz .gro .mol2".into());
        hints.push("Or pass --format tinker|xyz|gro|mol2".into());
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use carbon_forge::{BuildConfig, BuildError, Functionalization, Geometry, StructureKind};

    #[test]
    fn build_errors_are_found_behind_context() {
        let config = BuildConfig {
            structure: StructureKind::Graphite,
            geometry: Geometry::Sheet {
                width: 5.0,
                height: 5.0,
            },
            functionalization: Functionalization::Carboxyl,
            ..Default::default()
        };
        let err = carbon_forge::build(&config)
            .context("Structure generation failed")
            .unwrap_err();
        assert!(err.downcast_ref::<BuildError>().is_some());

        let hints = collect_hints(&err);
        assert!(hints.iter().any(|h| h.contains("-f none")));
    }

    #[test]
    fn untyped_errors_get_keyword_hints() {
        let err = anyhow::anyhow!("Cannot infer format from 'cnt.pdb'");
        let hints = collect_hints(&err);
        assert!(hints.iter().any(|h| h.contains("--format")));

        let err = anyhow::anyhow!("something unexpected");
        assert!(collect_hints(&err).is_empty());
    }
}
