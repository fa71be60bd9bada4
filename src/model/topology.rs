use super::structure::Structure;
use super::types::BondOrder;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2, order }
        } else {
            Self { i: idx2, j: idx1, order }
        }
    }
}

/// Bonds and neighbor lists inferred for a [`Structure`].
#[derive(Debug, Clone, Default)]
pub struct Connectivity {
    /// Distance-derived bonds inside the box, in discovery order.
    pub bonds: Vec<Bond>,
    /// Seam bonds closing a periodic axis.
    pub periodic_bonds: Vec<Bond>,
    /// Neighbors of each atom, in the order they were found.
    pub neighbors: Vec<Vec<usize>>,
    /// Qualifying neighbors left out because an atom was already full.
    pub dropped_neighbors: usize,
}

impl Connectivity {
    pub fn with_atom_count(atom_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); atom_count],
            ..Default::default()
        }
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn degree(&self, atom: usize) -> usize {
        self.neighbors.get(atom).map_or(0, Vec::len)
    }

    pub fn neighbors_of(&self, atom: usize) -> &[usize] {
        self.neighbors.get(atom).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A structure together with its (optional) connectivity.
#[derive(Debug, Clone)]
pub struct BuiltModel {
    pub structure: Structure,
    pub connectivity: Option<Connectivity>,
}

impl BuiltModel {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.structure.atom_count()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.connectivity.as_ref().map_or(0, Connectivity::bond_count)
    }
}
