//! Configuration types for structure generation.
//!
//! - [`BuildConfig`] — Main configuration struct
//! - [`Geometry`] — Tube ring count/length or sheet width/height
//! - [`Functionalization`] — Terminal group placed on open borders

use std::fmt;

use crate::model::structure::{Periodicity, StructureKind};

/// Default aromatic C–C bond length in Å.
pub const DEFAULT_BOND_LENGTH: f64 = 1.3874;

/// Group used to saturate the dangling bonds of an open border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Functionalization {
    /// Plain hydrogen caps.
    #[default]
    None,
    /// Hydroxyl on every even border atom, hydrogen on the rest.
    Hydroxyl,
    /// Deprotonated carboxyl (COO⁻) on every even border atom.
    Carboxylate,
    /// Carboxylic acid (COOH) on every even border atom.
    Carboxyl,
}

impl Functionalization {
    #[inline]
    pub fn is_carboxyl(&self) -> bool {
        matches!(
            self,
            Functionalization::Carboxylate | Functionalization::Carboxyl
        )
    }
}

impl fmt::Display for Functionalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Functionalization::None => "hydrogen",
            Functionalization::Hydroxyl => "hydroxyl",
            Functionalization::Carboxylate => "carboxylate",
            Functionalization::Carboxyl => "carboxyl",
        };
        write!(f, "{name}")
    }
}

/// Requested dimensions of the lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Nanotube with `rings` hexagons around the circumference and an axial
    /// length in Å.
    Tube { rings: usize, length: f64 },
    /// Graphite sheet with width along `x` and height along `y`, in Å.
    Sheet { width: f64, height: f64 },
}

/// Main configuration for [`build`](super::build).
///
/// # Examples
///
/// ```
/// use carbon_forge::{BuildConfig, Functionalization, Geometry, StructureKind};
///
/// let zigzag = BuildConfig {
///     structure: StructureKind::Zigzag,
///     geometry: Geometry::Tube { rings: 8, length: 20.0 },
///     functionalization: Functionalization::Carboxyl,
///     ..Default::default()
/// };
/// assert_eq!(zigzag.bond_length, 1.3874);
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub structure: StructureKind,

    /// Must match `structure`: [`Geometry::Tube`] for nanotubes,
    /// [`Geometry::Sheet`] for graphite.
    pub geometry: Geometry,

    /// Aromatic C–C bond length used to lay out the lattice, in Å.
    pub bond_length: f64,

    pub functionalization: Functionalization,

    /// Periodic axes. Nanotubes ignore `x`; open borders are only saturated
    /// along non-periodic axes.
    pub periodicity: Periodicity,

    /// Custom bonding parameters in TOML format.
    ///
    /// If `None`, uses the embedded `default.bonding.toml`.
    pub params: Option<String>,

    /// Whether to infer bonds and the neighbor table.
    pub connectivity: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            structure: StructureKind::Armchair,
            geometry: Geometry::Tube {
                rings: 5,
                length: 10.0,
            },
            bond_length: DEFAULT_BOND_LENGTH,
            functionalization: Functionalization::None,
            periodicity: Periodicity::NONE,
            params: None,
            connectivity: true,
        }
    }
}
