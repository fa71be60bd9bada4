use std::fmt;
use std::ops::Range;

use super::atom::Atom;

/// The carbon allotrope being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureKind {
    /// Armchair single-wall nanotube, axis along `-y`.
    #[default]
    Armchair,
    /// Zigzag single-wall nanotube, axis along `-y`.
    Zigzag,
    /// Rectangular graphite sheet in the `xy` plane.
    Graphite,
}

impl StructureKind {
    #[inline]
    pub fn is_tube(&self) -> bool {
        matches!(self, StructureKind::Armchair | StructureKind::Zigzag)
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Armchair => write!(f, "armchair CNT"),
            StructureKind::Zigzag => write!(f, "zigzag CNT"),
            StructureKind::Graphite => write!(f, "HOPG graphite"),
        }
    }
}

/// Axes along which the structure is declared periodic.
///
/// Nanotubes only honour `y`; their circumference is closed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Periodicity {
    pub x: bool,
    pub y: bool,
}

impl Periodicity {
    pub const NONE: Periodicity = Periodicity { x: false, y: false };
    pub const Y: Periodicity = Periodicity { x: false, y: true };
    pub const XY: Periodicity = Periodicity { x: true, y: true };

    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Index ranges of the two boundary rings (rows) of the generated lattice.
///
/// Fixed at generation time; atoms appended later never shift them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundaryRanges {
    /// The ring (row) at `y = 0`.
    pub first: Range<usize>,
    /// The last generated ring (row).
    pub last: Range<usize>,
}

/// Lengths along the sheet `x` axis and the tube/sheet `y` axis, in Å.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLengths {
    /// Only defined for sheets.
    pub x: Option<f64>,
    pub y: f64,
}

/// A generated allotrope: lattice atoms followed by any saturation atoms.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub kind: StructureKind,
    pub atoms: Vec<Atom>,
    /// Atoms per ring (tubes) or row (sheets).
    pub ring_size: usize,
    /// Number of lattice atoms; everything past this index was appended.
    pub lattice_atom_count: usize,
    pub boundary: BoundaryRanges,
    pub periodicity: Periodicity,
    /// Achieved extent of the lattice (position of the last ring/row).
    pub extent: AxisLengths,
    /// Repeat lengths to use for periodic boxes.
    pub periodic_lengths: AxisLengths,
    /// Tube diameter in Å.
    pub diameter: Option<f64>,
}

impl Structure {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn added_atom_count(&self) -> usize {
        self.atoms.len() - self.lattice_atom_count
    }

    #[inline]
    pub fn lattice_atoms(&self) -> &[Atom] {
        &self.atoms[..self.lattice_atom_count]
    }

    #[inline]
    pub fn added_atoms(&self) -> &[Atom] {
        &self.atoms[self.lattice_atom_count..]
    }

    pub fn total_charge(&self) -> f64 {
        self.atoms.iter().map(|a| a.charge).sum()
    }
}
