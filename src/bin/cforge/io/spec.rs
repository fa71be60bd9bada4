use std::path::PathBuf;

use carbon_forge::io::Format;

#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Path to write to, or `None` for stdout.
    pub path: Option<PathBuf>,
    /// Output format.
    pub format: Format,
    /// Rename an existing file at `path` before writing.
    pub backup: bool,
}
