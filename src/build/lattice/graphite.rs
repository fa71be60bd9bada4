use log::info;

use super::boundary;
use crate::model::atom::Atom;
use crate::model::structure::{AxisLengths, Structure, StructureKind};
use crate::model::types::AtomSubtype;

/// Builds a rectangular graphite (HOPG) sheet in the `xy` plane.
///
/// Rows run along `x` and are stacked along `-y` in pairs; the two row
/// patterns are offset by `b·cos 60°`. A zero width or height still yields
/// one row pair.
pub fn graphite(width: f64, height: f64, bond_length: f64) -> Structure {
    let b = bond_length;
    let dx = b * 60f64.to_radians().cos();
    let dy = b * 60f64.to_radians().sin();

    let mut row1 = vec![0.0];
    let mut x = 0.0;
    let mut pairs = 0;
    while x <= width {
        x += b + 2.0 * dx;
        row1.push(x);
        x += b;
        row1.push(x);
        pairs += 1;
    }
    row1.pop();

    let mut row2 = vec![dx];
    let mut x = dx;
    for _ in 0..pairs {
        x += b;
        row2.push(x);
        x += b + 2.0 * dx;
        row2.push(x);
    }
    row2.pop();

    let ring_size = row1.len();
    let mut atoms = Vec::new();
    let mut y = dy;
    while y > -height {
        for row in [&row1, &row2] {
            y -= dy;
            atoms.extend(
                row.iter()
                    .map(|&x| Atom::new(AtomSubtype::AromaticCarbon, [x, y, 0.0], 0.0)),
            );
        }
    }

    let a = row1.last().copied().unwrap_or_default();
    let achieved = y.abs();
    let (a_pbc, b_pbc) = (a + b, achieved + dy);
    info!("HOPG graphite: a = {a:.4} Å, b = {achieved:.4} Å");
    info!("periodic lengths: a = {a_pbc:.4} Å, b = {b_pbc:.4} Å");

    let lattice_atom_count = atoms.len();
    Structure {
        kind: StructureKind::Graphite,
        atoms,
        ring_size,
        lattice_atom_count,
        boundary: boundary(ring_size, lattice_atom_count),
        extent: AxisLengths {
            x: Some(a),
            y: achieved,
        },
        periodic_lengths: AxisLengths {
            x: Some(a_pbc),
            y: b_pbc,
        },
        diameter: None,
        ..Default::default()
    }
}
