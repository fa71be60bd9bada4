use std::f64::consts::FRAC_PI_4;

use log::debug;

use super::{CapBonds, axial, open_borders, radial, tilted};
use crate::build::charges::carboxyl_charges;
use crate::build::error::Error;
use crate::build::params::BondingParams;
use crate::model::atom::Atom;
use crate::model::geometry::{azimuth, translate};
use crate::model::structure::{Structure, StructureKind};
use crate::model::types::AtomSubtype;

/// Places a carboxyl (`protonated`) or carboxylate group on every even atom of
/// each open nanotube border and a hydrogen on every odd one.
///
/// The two oxygens straddle the radial direction at ±45°. Sheets are rejected
/// before anything is appended.
pub fn add_coo(
    structure: &mut Structure,
    protonated: bool,
    params: &BondingParams,
) -> Result<(), Error> {
    if !structure.kind.is_tube() {
        let group = if protonated { "carboxyl" } else { "carboxylate" };
        return Err(Error::unsupported(structure.kind, group));
    }

    let bonds = CapBonds::new(params);
    let charges = carboxyl_charges(structure.kind, protonated);
    let before = structure.atom_count();

    let mut caps = Vec::new();
    for border in open_borders(structure) {
        let sign = border.sign;
        for (k, idx) in border.atoms.enumerate() {
            let p = structure.atoms[idx].position;
            if k % 2 != 0 {
                caps.push(Atom::new(
                    AtomSubtype::Hydrogen,
                    translate(p, axial(bonds.ch, sign)),
                    charges.hydrogen,
                ));
                continue;
            }

            let phi = azimuth(p);
            let c = match structure.kind {
                StructureKind::Armchair => translate(p, tilted(phi, bonds.cc, sign)),
                _ => translate(p, axial(bonds.cc, sign)),
            };
            let o1 = translate(c, radial(phi - FRAC_PI_4, bonds.co));
            let o2 = translate(c, radial(phi + FRAC_PI_4, bonds.co));
            caps.push(Atom::new(AtomSubtype::CarboxylCarbon, c, charges.carbon));
            caps.push(Atom::new(AtomSubtype::CarboxylOxygen, o1, charges.oxygen1));
            caps.push(Atom::new(AtomSubtype::CarboxylOxygen, o2, charges.oxygen2));
            if protonated {
                let to_h = match structure.kind {
                    StructureKind::Armchair => radial(phi + FRAC_PI_4, bonds.oh),
                    _ => axial(bonds.oh, sign),
                };
                caps.push(Atom::new(
                    AtomSubtype::Hydrogen,
                    translate(o2, to_h),
                    charges.hydroxyl_hydrogen,
                ));
            }
        }
    }
    structure.atoms.extend(caps);

    debug!(
        "added {} {} atoms to {}",
        structure.atom_count() - before,
        if protonated { "carboxyl" } else { "carboxylate" },
        structure.kind
    );
    Ok(())
}
