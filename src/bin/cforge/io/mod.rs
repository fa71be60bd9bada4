mod infer;
mod spec;

pub use infer::output as infer_output_format;
pub use spec::OutputSpec;

use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, StdoutLock, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdout is a terminal (interactive).
pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

pub enum OutputTarget {
    File(BufWriter<File>),
    Stdout(BufWriter<StdoutLock<'static>>),
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::File(w) => w.write(buf),
            OutputTarget::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::File(w) => w.flush(),
            OutputTarget::Stdout(w) => w.flush(),
        }
    }
}

/// Opens the output described by `spec`, moving an existing file aside
/// first when `spec.backup` is set.
pub fn create_output(spec: &OutputSpec) -> Result<OutputTarget> {
    match spec.path.as_deref() {
        Some(p) => {
            if spec.backup {
                backup_existing(p)?;
            }
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {}", p.display()))?;
            Ok(OutputTarget::File(BufWriter::new(file)))
        }
        None => Ok(OutputTarget::Stdout(BufWriter::new(io::stdout().lock()))),
    }
}

/// Renames an existing `path` to `<path>_bak-<k>` with the smallest free `k`.
///
/// Returns the backup path, or `None` when there was nothing to move.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = (1..)
        .map(|k| backup_path(path, k))
        .find(|candidate| !candidate.exists())
        .context("No free backup name")?;
    fs::rename(path, &backup).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            path.display(),
            backup.display()
        )
    })?;
    info!("backed up {} to {}", path.display(), backup.display());
    Ok(Some(backup))
}

fn backup_path(path: &Path, k: u32) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!("_bak-{k}"));
    PathBuf::from(name)
}
