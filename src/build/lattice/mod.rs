//! Lattice generators for nanotubes and graphite sheets.
//!
//! Every generator lays its lattice out along `-y`, one ring (or row) at a
//! time, starting at `y = 0`. The first ring is therefore the top boundary
//! and the last ring the bottom boundary; both are recorded as
//! [`BoundaryRanges`] on the returned [`Structure`].

mod armchair;
mod graphite;
mod zigzag;

pub use armchair::armchair;
pub use graphite::graphite;
pub use zigzag::zigzag;

use std::f64::consts::PI;

use super::charges::RimCharges;
use crate::model::atom::Atom;
use crate::model::structure::BoundaryRanges;
use crate::model::types::AtomSubtype;

/// Role of a ring inside a tube, which decides its charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingRole {
    Terminal,
    SubTerminal,
    Interior,
}

impl RingRole {
    fn charge(self, rim: &RimCharges, k: usize) -> f64 {
        match self {
            RingRole::Terminal => rim.terminal(k),
            RingRole::SubTerminal => rim.sub_edge,
            RingRole::Interior => 0.0,
        }
    }
}

/// Cumulative arc positions from a list of arc increments.
fn cumulative(increments: &[f64]) -> Vec<f64> {
    increments
        .iter()
        .scan(0.0, |arc, step| {
            *arc += step;
            Some(*arc)
        })
        .collect()
}

/// Rolls one ring of arc positions onto a cylinder of `radius` around `y`.
fn push_ring(
    atoms: &mut Vec<Atom>,
    arcs: &[f64],
    radius: f64,
    y: f64,
    role: RingRole,
    rim: &RimCharges,
) {
    atoms.extend(arcs.iter().enumerate().map(|(k, arc)| {
        let theta = arc / radius;
        Atom::new(
            AtomSubtype::AromaticCarbon,
            [radius * theta.cos(), y, radius * theta.sin()],
            role.charge(rim, k),
        )
    }));
}

fn boundary(ring_size: usize, lattice_atom_count: usize) -> BoundaryRanges {
    BoundaryRanges {
        first: 0..ring_size,
        last: lattice_atom_count.saturating_sub(ring_size)..lattice_atom_count,
    }
}

#[inline]
fn radius_for(circumference: f64) -> f64 {
    circumference / (2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_sums_increments() {
        assert_eq!(cumulative(&[0.0, 2.0, 1.0, 2.0]), vec![0.0, 2.0, 3.0, 5.0]);
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn push_ring_places_atoms_on_cylinder() {
        let mut atoms = Vec::new();
        let radius = radius_for(4.0);
        push_ring(
            &mut atoms,
            &[0.0, 1.0, 2.0, 3.0],
            radius,
            -1.5,
            RingRole::Terminal,
            &RimCharges {
                edge: -0.2,
                edge_alt: 0.1,
                sub_edge: 0.0,
            },
        );
        assert_eq!(atoms.len(), 4);
        for atom in &atoms {
            let r = (atom.x().powi(2) + atom.z().powi(2)).sqrt();
            assert!((r - radius).abs() < 1e-12);
            assert_eq!(atom.y(), -1.5);
        }
        assert_eq!(atoms[0].charge, 0.1);
        assert_eq!(atoms[1].charge, -0.2);
    }

    #[test]
    fn boundary_spans_first_and_last_ring() {
        let b = boundary(10, 100);
        assert_eq!(b.first, 0..10);
        assert_eq!(b.last, 90..100);
    }
}
