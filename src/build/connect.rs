//! Distance-based connectivity inference with periodic closure.
//!
//! Lattice atoms are only compared with atoms up to two rings further on,
//! which keeps the search linear in the lattice size. Saturation atoms are
//! compared against everything. A pair is bonded when its distance falls in
//! the [`BondWindow`](super::params::BondWindow) of its element pair.

use log::{debug, warn};

use super::params::BondingParams;
use crate::model::structure::{Structure, StructureKind};
use crate::model::topology::{Bond, Connectivity};
use crate::model::types::BondOrder;

/// Infers bonds and the neighbor table of `structure`.
///
/// Periodic seams are closed along every axis flagged in
/// `structure.periodicity` (nanotubes only along `y`). Seam bonds are
/// recorded in [`Connectivity::periodic_bonds`] and in the neighbor table,
/// never in [`Connectivity::bonds`].
pub fn connect(structure: &Structure, params: &BondingParams) -> Connectivity {
    let mut table = NeighborTable::new(structure.atom_count(), params.max_neighbors());
    let mut bonds = Vec::new();
    let atoms = &structure.atoms;
    let lattice_count = structure.lattice_atom_count;
    let reach = 2 * structure.ring_size;

    for i in 0..lattice_count {
        let end = (i + reach).min(lattice_count);
        for j in i + 1..end {
            let window = params.window(atoms[i].element, atoms[j].element);
            if window.contains(atoms[i].distance_to(&atoms[j])) {
                bonds.push(Bond::new(i, j, BondOrder::Aromatic));
                table.link(i, j);
            }
        }
    }

    if structure.added_atom_count() > 0 {
        for i in 0..atoms.len() {
            for j in (i + 1).max(lattice_count)..atoms.len() {
                let window = params.window(atoms[i].element, atoms[j].element);
                if window.contains(atoms[i].distance_to(&atoms[j])) {
                    bonds.push(Bond::new(i, j, BondOrder::Single));
                    table.link(i, j);
                }
            }
        }
    }

    // Seam bonds are recorded even when the pair is already bonded inside
    // the box: in a one-unit cell the periodic image of a neighbor is the
    // neighbor itself, and it then appears twice in the neighbor table.
    let mut periodic_bonds = Vec::new();
    let mut close = |i: usize, j: usize, table: &mut NeighborTable| {
        periodic_bonds.push(Bond::new(i, j, BondOrder::Aromatic));
        table.link(i, j);
    };

    if structure.periodicity.x && structure.kind == StructureKind::Graphite {
        for i in 0..lattice_count {
            let j = i + structure.ring_size - 1;
            if atoms[i].x() == 0.0 && j < lattice_count {
                close(i, j, &mut table);
            }
        }
    }
    if structure.periodicity.y {
        let bottom = structure.boundary.last.start;
        for (k, i) in structure.boundary.first.clone().enumerate() {
            close(i, bottom + k, &mut table);
        }
    }

    if table.dropped > 0 {
        warn!(
            "{} neighbor(s) exceeded the per-atom capacity of {} and were left out of the neighbor table",
            table.dropped,
            params.neighbors.max
        );
    }
    debug!(
        "connectivity: {} bonds, {} periodic bonds",
        bonds.len(),
        periodic_bonds.len()
    );

    Connectivity {
        bonds,
        periodic_bonds,
        neighbors: table.neighbors,
        dropped_neighbors: table.dropped,
    }
}

struct NeighborTable {
    neighbors: Vec<Vec<usize>>,
    capacity: Option<usize>,
    dropped: usize,
}

impl NeighborTable {
    fn new(atom_count: usize, capacity: Option<usize>) -> Self {
        Self {
            neighbors: vec![Vec::new(); atom_count],
            capacity,
            dropped: 0,
        }
    }

    fn link(&mut self, i: usize, j: usize) {
        self.push(i, j);
        self.push(j, i);
    }

    fn push(&mut self, atom: usize, neighbor: usize) {
        let list = &mut self.neighbors[atom];
        match self.capacity {
            Some(cap) if list.len() >= cap => self.dropped += 1,
            _ => list.push(neighbor),
        }
    }
}
