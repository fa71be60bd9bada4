use log::info;

use super::{RingRole, boundary, cumulative, push_ring, radius_for};
use crate::build::charges::RimCharges;
use crate::model::structure::{AxisLengths, Structure, StructureKind};

/// Builds a zigzag `(n, 0)` nanotube with `rings` atoms per ring, grown along
/// `-y` until `length` is reached.
///
/// A lattice step is four rings: two zigzag rows joined by axial bonds.
pub fn zigzag(rings: usize, length: f64, bond_length: f64, rim: RimCharges) -> Structure {
    let b = bond_length;
    let dy = b * 60f64.to_radians().cos();
    let dx = b * 60f64.to_radians().sin();
    let ring_size = rings;
    let radius = radius_for(rings as f64 * 2.0 * dx);

    let mut steps1 = vec![2.0 * dx; ring_size];
    let mut steps2 = steps1.clone();
    if let Some(first) = steps1.first_mut() {
        *first = 0.0;
    }
    if let Some(first) = steps2.first_mut() {
        *first = dx;
    }
    let arcs1 = cumulative(&steps1);
    let arcs2 = cumulative(&steps2);

    let mut units = Vec::new();
    let mut y = b;
    while y > -length {
        let mut unit = [0.0; 4];
        for (slot, step) in unit.iter_mut().zip([b, dy, b, dy]) {
            y -= step;
            *slot = y;
        }
        units.push(unit);
    }

    let last = units.len().saturating_sub(1);
    let mut atoms = Vec::with_capacity(units.len() * 4 * ring_size);
    for (u, unit) in units.iter().enumerate() {
        use RingRole::*;
        let roles = if u == 0 {
            [Terminal, SubTerminal, Interior, Interior]
        } else if u == last {
            [Interior, Interior, SubTerminal, Terminal]
        } else {
            [Interior; 4]
        };
        let patterns = [&arcs1, &arcs2, &arcs2, &arcs1];
        for ((&ring_y, role), arcs) in unit.iter().zip(roles).zip(patterns) {
            push_ring(&mut atoms, arcs, radius, ring_y, role, &rim);
        }
    }

    let achieved = y.abs();
    let periodic = achieved + b;
    info!(
        "zigzag CNT: n = {rings}, l = {achieved:.4} Å, periodic length = {periodic:.4} Å, diameter = {:.4} Å",
        2.0 * radius
    );

    let lattice_atom_count = atoms.len();
    Structure {
        kind: StructureKind::Zigzag,
        atoms,
        ring_size,
        lattice_atom_count,
        boundary: boundary(ring_size, lattice_atom_count),
        extent: AxisLengths {
            x: None,
            y: achieved,
        },
        periodic_lengths: AxisLengths {
            x: None,
            y: periodic,
        },
        diameter: Some(2.0 * radius),
        ..Default::default()
    }
}
