use log::debug;

use super::{Border, CapBonds, axial, open_borders, radial, tilted};
use crate::build::charges::hydrogen_cap_charges;
use crate::build::params::BondingParams;
use crate::model::atom::Atom;
use crate::model::geometry::{azimuth, translate};
use crate::model::structure::{Structure, StructureKind};
use crate::model::types::AtomSubtype;

/// Caps every open border atom with a hydrogen, or with a hydroxyl on even
/// border positions when `hydroxyl` is set.
///
/// Nanotube caps point away from the tube along its axis (zigzag) or tilted
/// 60° out of the ring plane (armchair). Sheet caps lie in the sheet plane;
/// non-periodic sheets additionally get hydrogens on both side edges.
pub fn add_h(structure: &mut Structure, hydroxyl: bool, params: &BondingParams) {
    let bonds = CapBonds::new(params);
    let before = structure.atom_count();

    let mut caps = Vec::new();
    for border in open_borders(structure) {
        cap_border(structure, &border, hydroxyl, &bonds, &mut caps);
    }
    if structure.kind == StructureKind::Graphite && !structure.periodicity.x {
        cap_sides(structure, &bonds, &mut caps);
    }
    structure.atoms.extend(caps);

    debug!(
        "added {} {} atoms to {}",
        structure.atom_count() - before,
        if hydroxyl { "hydroxyl/hydrogen" } else { "hydrogen" },
        structure.kind
    );
}

fn cap_border(
    structure: &Structure,
    border: &Border,
    hydroxyl: bool,
    bonds: &CapBonds,
    caps: &mut Vec<Atom>,
) {
    let charges = hydrogen_cap_charges(structure.kind);
    let plain_h = if hydroxyl {
        charges.hydrogen_beside_hydroxyl
    } else {
        charges.hydrogen
    };
    let sign = border.sign;

    for (k, idx) in border.atoms.clone().enumerate() {
        let p = structure.atoms[idx].position;
        let even = k % 2 == 0;

        // Direction of the dangling bond and of the hydroxyl hydrogen.
        let (to_h, to_o, o_to_h) = match structure.kind {
            StructureKind::Armchair => {
                let phi = azimuth(p);
                (
                    tilted(phi, bonds.ch, sign),
                    tilted(phi, bonds.co, sign),
                    radial(phi, bonds.oh),
                )
            }
            StructureKind::Zigzag => {
                let phi = azimuth(p);
                (
                    axial(bonds.ch, sign),
                    axial(bonds.co, sign),
                    radial(phi, bonds.oh),
                )
            }
            StructureKind::Graphite => {
                // Top row: even atoms point +x; bottom row mirrors that.
                let dir = if even { sign } else { -sign };
                let (s, c) = 60f64.to_radians().sin_cos();
                (
                    [dir * bonds.ch * c, sign * bonds.ch * s, 0.0],
                    [dir * bonds.co * c, sign * bonds.co * s, 0.0],
                    [dir * bonds.oh * c, sign * bonds.oh * s, 0.0],
                )
            }
        };

        if hydroxyl && even {
            let o = translate(p, to_o);
            caps.push(Atom::new(AtomSubtype::HydroxylOxygen, o, charges.oxygen));
            caps.push(Atom::new(
                AtomSubtype::Hydrogen,
                translate(o, o_to_h),
                charges.hydroxyl_hydrogen,
            ));
        } else {
            caps.push(Atom::new(AtomSubtype::Hydrogen, translate(p, to_h), plain_h));
        }
    }
}

/// Hydrogens on the left (`x = 0`) and right (`x = a`) edges of a sheet.
fn cap_sides(structure: &Structure, bonds: &CapBonds, caps: &mut Vec<Atom>) {
    let lattice = structure.lattice_atoms();
    let Some(right) = lattice.get(structure.ring_size.saturating_sub(1)).map(Atom::x) else {
        return;
    };
    for atom in lattice {
        if atom.x() == 0.0 {
            caps.push(Atom::new(
                AtomSubtype::Hydrogen,
                [-bonds.ch, atom.y(), 0.0],
                0.0,
            ));
        } else if atom.x() == right {
            caps.push(Atom::new(
                AtomSubtype::Hydrogen,
                [atom.x() + bonds.ch, atom.y(), 0.0],
                0.0,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::charges::rim_charges;
    use crate::build::config::Functionalization;
    use crate::build::lattice;
    use crate::build::params::get_default_parameters;
    use crate::model::structure::Periodicity;
    use crate::model::types::Element;

    const B: f64 = 1.3874;

    fn armchair(f: Functionalization) -> Structure {
        lattice::armchair(5, 10.0, B, rim_charges(StructureKind::Armchair, f))
    }

    fn zigzag(f: Functionalization) -> Structure {
        lattice::zigzag(6, 10.0, B, rim_charges(StructureKind::Zigzag, f))
    }

    #[test]
    fn armchair_hydrogens_cap_each_border_atom() {
        let mut tube = armchair(Functionalization::None);
        add_h(&mut tube, false, get_default_parameters());
        assert_eq!(tube.added_atom_count(), 2 * tube.ring_size);
        assert!(tube.added_atoms().iter().all(|a| a.element == Element::H));

        // Top caps point up, bottom caps point down, all at C–H distance.
        let n = tube.ring_size;
        for k in 0..n {
            let top = &tube.added_atoms()[k];
            assert!(top.y() > 0.0);
            assert!((top.distance_to(&tube.atoms[k]) - 1.09).abs() < 1e-9);
            let bottom = &tube.added_atoms()[n + k];
            let parent = &tube.atoms[tube.boundary.last.start + k];
            assert!(bottom.y() < parent.y());
            assert!((bottom.distance_to(parent) - 1.09).abs() < 1e-9);
        }
    }

    #[test]
    fn armchair_hydrogen_caps_neutralize_the_rims() {
        let mut tube = armchair(Functionalization::None);
        add_h(&mut tube, false, get_default_parameters());
        assert!(tube.total_charge().abs() < 1e-9);
    }

    #[test]
    fn hydroxyl_adds_one_and_a_half_atoms_per_border_atom() {
        let mut tube = armchair(Functionalization::Hydroxyl);
        add_h(&mut tube, true, get_default_parameters());
        assert_eq!(tube.added_atom_count(), 3 * tube.ring_size);
        let oxygens = tube
            .added_atoms()
            .iter()
            .filter(|a| a.subtype == AtomSubtype::HydroxylOxygen)
            .count();
        assert_eq!(oxygens, tube.ring_size);
        assert!(tube.total_charge().abs() < 1e-9);
    }

    #[test]
    fn zigzag_caps_are_axial() {
        let mut tube = zigzag(Functionalization::None);
        add_h(&mut tube, false, get_default_parameters());
        assert_eq!(tube.added_atom_count(), 12);
        let first = &tube.added_atoms()[0];
        assert_eq!(first.x(), tube.atoms[0].x());
        assert_eq!(first.z(), tube.atoms[0].z());
        assert!((first.y() - 1.09).abs() < 1e-12);
        assert_eq!(first.charge, 0.16);
        assert!(tube.total_charge().abs() < 1e-9);
    }

    #[test]
    fn zigzag_hydroxyl_places_hydrogen_radially_from_oxygen() {
        let mut tube = zigzag(Functionalization::Hydroxyl);
        add_h(&mut tube, true, get_default_parameters());
        assert_eq!(tube.added_atom_count(), 18);
        let oxygen = &tube.added_atoms()[0];
        let hydrogen = &tube.added_atoms()[1];
        assert_eq!(oxygen.subtype, AtomSubtype::HydroxylOxygen);
        assert!((oxygen.distance_to(&tube.atoms[0]) - 1.43).abs() < 1e-12);
        assert!((hydrogen.distance_to(oxygen) - 0.98).abs() < 1e-12);
        assert_eq!(hydrogen.y(), oxygen.y());
        assert!(tube.total_charge().abs() < 1e-9);
    }

    #[test]
    fn odd_zigzag_rims_get_the_same_hydroxyl_count() {
        let mut tube = lattice::zigzag(
            5,
            10.0,
            B,
            rim_charges(StructureKind::Zigzag, Functionalization::Hydroxyl),
        );
        add_h(&mut tube, true, get_default_parameters());
        let oxygens: Vec<_> = tube
            .added_atoms()
            .iter()
            .filter(|a| a.element == Element::O)
            .collect();
        assert_eq!(oxygens.len(), 6);
        assert_eq!(oxygens.iter().filter(|o| o.y() > 0.0).count(), 3);
        // Positions 0, 2 and 4 of each rim carry the hydroxyl.
        let first = &tube.added_atoms()[0];
        assert_eq!(first.subtype, AtomSubtype::HydroxylOxygen);
        assert_eq!(first.x(), tube.atoms[0].x());
        let bottom = tube.boundary.last.start;
        let bottom_first = tube
            .added_atoms()
            .iter()
            .find(|a| a.y() < 0.0)
            .unwrap();
        assert_eq!(bottom_first.subtype, AtomSubtype::HydroxylOxygen);
        assert_eq!(bottom_first.x(), tube.atoms[bottom].x());
    }

    #[test]
    fn periodic_tube_is_left_open() {
        let mut tube = armchair(Functionalization::None);
        tube.periodicity = Periodicity::Y;
        add_h(&mut tube, false, get_default_parameters());
        assert_eq!(tube.added_atom_count(), 0);
    }

    #[test]
    fn sheet_gets_border_and_side_caps() {
        let mut sheet = lattice::graphite(10.0, 10.0, B);
        let n = sheet.ring_size;
        let rows = sheet.lattice_atom_count / n;
        add_h(&mut sheet, false, get_default_parameters());
        // Two borders plus one side hydrogen per row of each side pattern.
        assert_eq!(sheet.added_atom_count(), 2 * n + rows);
        assert!(sheet.added_atoms().iter().all(|a| a.z() == 0.0));
        assert!(sheet.added_atoms().iter().all(|a| a.charge == 0.0));

        // Top row atom 0 caps towards +x, atom 1 towards -x.
        assert!(sheet.added_atoms()[0].x() > sheet.atoms[0].x());
        assert!(sheet.added_atoms()[1].x() < sheet.atoms[1].x());
        // Bottom row mirrors the top.
        let bottom = sheet.boundary.last.start;
        assert!(sheet.added_atoms()[n].x() < sheet.atoms[bottom].x());
        assert!(sheet.added_atoms()[n].y() < sheet.atoms[bottom].y());
    }

    #[test]
    fn sheet_periodic_in_x_skips_side_caps() {
        let mut sheet = lattice::graphite(10.0, 10.0, B);
        sheet.periodicity = Periodicity { x: true, y: false };
        add_h(&mut sheet, false, get_default_parameters());
        assert_eq!(sheet.added_atom_count(), 2 * sheet.ring_size);

        let mut sheet = lattice::graphite(10.0, 10.0, B);
        sheet.periodicity = Periodicity { x: false, y: true };
        add_h(&mut sheet, false, get_default_parameters());
        let rows = sheet.lattice_atom_count / sheet.ring_size;
        assert_eq!(sheet.added_atom_count(), rows);
    }
}
