use log::info;

use super::{RingRole, boundary, cumulative, push_ring, radius_for};
use crate::build::charges::RimCharges;
use crate::model::structure::{AxisLengths, Structure, StructureKind};

/// Builds an armchair `(n, n)` nanotube with `rings` hexagons around the
/// circumference, grown along `-y` until `length` is reached.
///
/// Each lattice step adds two rings of `2n` atoms offset by `b·sin 60°`.
/// The first and last ring pair carry the rim charges.
pub fn armchair(rings: usize, length: f64, bond_length: f64, rim: RimCharges) -> Structure {
    let b = bond_length;
    let dx = b * 60f64.to_radians().cos();
    let dy = b * 60f64.to_radians().sin();
    let ring_size = 2 * rings;
    let radius = radius_for(rings as f64 * (2.0 * dx + b) + rings as f64 * b);

    let mut steps1 = Vec::with_capacity(ring_size);
    let mut steps2 = Vec::with_capacity(ring_size);
    steps1.push(0.0);
    steps2.push(dx);
    for k in 1..ring_size {
        let (long, short) = (2.0 * dx + b, b);
        if k % 2 == 1 {
            steps1.push(long);
            steps2.push(short);
        } else {
            steps1.push(short);
            steps2.push(long);
        }
    }
    let arcs1 = cumulative(&steps1);
    let arcs2 = cumulative(&steps2);

    let mut units = Vec::new();
    let mut y = dy;
    while y > -length {
        y -= dy;
        let upper = y;
        y -= dy;
        units.push((upper, y));
    }

    let last = units.len().saturating_sub(1);
    let mut atoms = Vec::with_capacity(units.len() * 2 * ring_size);
    for (u, &(upper, lower)) in units.iter().enumerate() {
        let roles = if u == 0 {
            [RingRole::Terminal, RingRole::SubTerminal]
        } else if u == last {
            [RingRole::SubTerminal, RingRole::Terminal]
        } else {
            [RingRole::Interior, RingRole::Interior]
        };
        push_ring(&mut atoms, &arcs1, radius, upper, roles[0], &rim);
        push_ring(&mut atoms, &arcs2, radius, lower, roles[1], &rim);
    }

    let achieved = y.abs();
    let periodic = achieved + dy;
    info!(
        "armchair CNT: n = {rings}, l = {achieved:.4} Å, periodic length = {periodic:.4} Å, diameter = {:.4} Å",
        2.0 * radius
    );

    let lattice_atom_count = atoms.len();
    Structure {
        kind: StructureKind::Armchair,
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
