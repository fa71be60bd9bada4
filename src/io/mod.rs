//! Text writers for built models.
//!
//! - [`Format::Tinker`] — TINKER XYZ with per-atom neighbor lists
//! - [`Format::Xyz`] — plain XYZ
//! - [`Format::Gro`] — GROMACS coordinates with a simulation box
//! - [`Format::Mol2`] — TRIPOS MOL2 with partial charges and bonds
//!
//! Tinker and MOL2 need the model's connectivity; writing them from a model
//! built without it fails with [`Error::MissingConnectivity`].

use std::fmt;
use std::io::Write;

pub mod error;

mod gro {
    pub mod writer;
}
mod mol2 {
    pub mod writer;
}
mod tinker {
    pub mod writer;
}
mod xyz {
    pub mod writer;
}

pub use error::Error;

use crate::model::topology::{BuiltModel, Connectivity};

/// Title written by formats that carry a free-text comment line.
pub const TITLE: &str = concat!("Generated by carbon-forge v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Tinker,
    Xyz,
    Gro,
    Mol2,
}

impl Format {
    #[inline]
    pub fn needs_connectivity(&self) -> bool {
        matches!(self, Format::Tinker | Format::Mol2)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Tinker => write!(f, "TINKER"),
            Format::Xyz => write!(f, "XYZ"),
            Format::Gro => write!(f, "GRO"),
            Format::Mol2 => write!(f, "MOL2"),
        }
    }
}

/// Writes built models in a fixed [`Format`].
///
/// # Examples
///
/// ```
/// use carbon_forge::{BuildConfig, build};
/// use carbon_forge::io::{Format, StructureWriter};
///
/// let model = build(&BuildConfig::default())?;
/// let mut out = Vec::new();
/// StructureWriter::new(&mut out, Format::Xyz).write(&model)?;
/// assert!(String::from_utf8(out).unwrap().starts_with(" 120\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StructureWriter<W: Write> {
    writer: W,
    format: Format,
}

impl<W: Write> StructureWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(&mut self, model: &BuiltModel) -> Result<(), Error> {
        match self.format {
            Format::Tinker => {
                let conn = require_connectivity(model, Format::Tinker)?;
                tinker::writer::write(&mut self.writer, &model.structure, conn)?;
            }
            Format::Xyz => xyz::writer::write(&mut self.writer, &model.structure)?,
            Format::Gro => gro::writer::write(&mut self.writer, &model.structure)?,
            Format::Mol2 => {
                let conn = require_connectivity(model, Format::Mol2)?;
                mol2::writer::write(&mut self.writer, &model.structure, conn)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn require_connectivity(model: &BuiltModel, format: Format) -> Result<&Connectivity, Error> {
    model
        .connectivity
        .as_ref()
        .ok_or(Error::MissingConnectivity(format))
}
