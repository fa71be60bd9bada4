//! Partial charge tables for nanotube rims and their terminal groups.
//!
//! All values are in elementary charges. Graphite sheets are neutral
//! everywhere, so every lookup returns zeros for [`StructureKind::Graphite`].

use super::config::Functionalization;
use crate::model::structure::StructureKind;

/// Charges of the two outermost lattice rings at each open end of a tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimCharges {
    /// Odd positions of the terminal ring.
    pub edge: f64,
    /// Even positions of the terminal ring.
    pub edge_alt: f64,
    /// Every position of the ring next to the terminal one.
    pub sub_edge: f64,
}

impl RimCharges {
    pub const NEUTRAL: RimCharges = RimCharges {
        edge: 0.0,
        edge_alt: 0.0,
        sub_edge: 0.0,
    };

    /// Charge of position `k` inside the terminal ring.
    #[inline]
    pub fn terminal(&self, k: usize) -> f64 {
        if k % 2 == 0 { self.edge_alt } else { self.edge }
    }
}

/// Charges of hydrogen and hydroxyl caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogenCapCharges {
    /// Hydrogen on a rim whose even atoms carry plain hydrogens too.
    pub hydrogen: f64,
    /// Hydrogen on the odd atoms of a hydroxylated rim.
    pub hydrogen_beside_hydroxyl: f64,
    pub oxygen: f64,
    pub hydroxyl_hydrogen: f64,
}

/// Charges of carboxyl / carboxylate groups and the hydrogens between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarboxylCharges {
    pub hydrogen: f64,
    pub carbon: f64,
    pub oxygen1: f64,
    pub oxygen2: f64,
    /// Zero for the deprotonated group, which has no hydroxyl hydrogen.
    pub hydroxyl_hydrogen: f64,
}

pub fn rim_charges(kind: StructureKind, functionalization: Functionalization) -> RimCharges {
    use Functionalization as F;
    let (edge, edge_alt, sub_edge) = match (kind, functionalization) {
        (StructureKind::Armchair, F::None) => (-0.16, -0.16, 0.03),
        (StructureKind::Armchair, F::Hydroxyl) => (-0.28, 0.24, 0.01),
        (StructureKind::Armchair, F::Carboxylate) => (-0.34, -0.09, 0.03),
        (StructureKind::Armchair, F::Carboxyl) => (-0.12, -0.10, 0.03),
        (StructureKind::Zigzag, F::None) => (-0.30, -0.30, 0.14),
        (StructureKind::Zigzag, F::Hydroxyl) => (-0.10, 0.20, -0.04),
        (StructureKind::Zigzag, F::Carboxylate) => (-0.43, -0.33, 0.09),
        (StructureKind::Zigzag, F::Carboxyl) => (-0.14, -0.14, 0.06),
        (StructureKind::Graphite, _) => return RimCharges::NEUTRAL,
    };
    RimCharges {
        edge,
        edge_alt,
        sub_edge,
    }
}

pub fn hydrogen_cap_charges(kind: StructureKind) -> HydrogenCapCharges {
    match kind {
        StructureKind::Armchair => HydrogenCapCharges {
            hydrogen: 0.13,
            hydrogen_beside_hydroxyl: 0.18,
            oxygen: -0.53,
            hydroxyl_hydrogen: 0.37,
        },
        StructureKind::Zigzag => HydrogenCapCharges {
            hydrogen: 0.16,
            hydrogen_beside_hydroxyl: 0.31,
            oxygen: -0.40,
            hydroxyl_hydrogen: 0.07,
        },
        StructureKind::Graphite => HydrogenCapCharges {
            hydrogen: 0.0,
            hydrogen_beside_hydroxyl: 0.0,
            oxygen: 0.0,
            hydroxyl_hydrogen: 0.0,
        },
    }
}

pub fn carboxyl_charges(kind: StructureKind, protonated: bool) -> CarboxylCharges {
    let (hydrogen, carbon, oxygen1, oxygen2, hydroxyl_hydrogen) = match (kind, protonated) {
        (StructureKind::Armchair, false) => (0.22, 0.83, -0.84, -0.84, 0.0),
        (StructureKind::Armchair, true) => (0.17, 0.70, -0.55, -0.60, 0.44),
        (StructureKind::Zigzag, false) => (0.39, 0.91, -0.86, -0.86, 0.0),
        (StructureKind::Zigzag, true) => (0.19, 0.72, -0.58, -0.63, 0.46),
        (StructureKind::Graphite, _) => (0.0, 0.0, 0.0, 0.0, 0.0),
    };
    CarboxylCharges {
        hydrogen,
        carbon,
        oxygen1,
        oxygen2,
        hydroxyl_hydrogen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn terminal_alternates_between_even_and_odd() {
        let rim = rim_charges(StructureKind::Armchair, Functionalization::Hydroxyl);
        assert_eq!(rim.terminal(0), 0.24);
        assert_eq!(rim.terminal(1), -0.28);
        assert_eq!(rim.terminal(4), 0.24);
    }

    #[test]
    fn graphite_is_neutral() {
        for f in [
            Functionalization::None,
            Functionalization::Hydroxyl,
            Functionalization::Carboxyl,
        ] {
            assert_eq!(rim_charges(StructureKind::Graphite, f), RimCharges::NEUTRAL);
        }
        let caps = hydrogen_cap_charges(StructureKind::Graphite);
        assert_eq!(caps.hydrogen, 0.0);
        assert_eq!(caps.oxygen, 0.0);
    }

    // One rim ring pair plus its caps must balance for a ring of 2m atoms
    // (m even, m odd positions).
    fn rim_balance(kind: StructureKind, f: Functionalization, ring: usize) -> f64 {
        let rim = rim_charges(kind, f);
        let half = ring / 2;
        let lattice =
            half as f64 * (rim.edge + rim.edge_alt) + ring as f64 * rim.sub_edge;
        let caps = match f {
            Functionalization::None => ring as f64 * hydrogen_cap_charges(kind).hydrogen,
            Functionalization::Hydroxyl => {
                let c = hydrogen_cap_charges(kind);
                half as f64 * (c.oxygen + c.hydroxyl_hydrogen + c.hydrogen_beside_hydroxyl)
            }
            Functionalization::Carboxylate | Functionalization::Carboxyl => {
                let c = carboxyl_charges(kind, f == Functionalization::Carboxyl);
                half as f64
                    * (c.carbon + c.oxygen1 + c.oxygen2 + c.hydroxyl_hydrogen + c.hydrogen)
            }
        };
        lattice + caps
    }

    #[test]
    fn hydrogen_and_hydroxyl_rims_are_neutral() {
        assert!(approx_eq(
            rim_balance(StructureKind::Armchair, Functionalization::None, 10),
            0.0
        ));
        assert!(approx_eq(
            rim_balance(StructureKind::Zigzag, Functionalization::None, 6),
            0.0
        ));
        assert!(approx_eq(
            rim_balance(StructureKind::Armchair, Functionalization::Hydroxyl, 10),
            0.0
        ));
        assert!(approx_eq(
            rim_balance(StructureKind::Zigzag, Functionalization::Hydroxyl, 6),
            0.0
        ));
    }

    #[test]
    fn carboxylate_rims_carry_one_negative_charge_per_group() {
        let armchair = rim_balance(StructureKind::Armchair, Functionalization::Carboxylate, 10);
        assert!(approx_eq(armchair, -5.0));
        let zigzag = rim_balance(StructureKind::Zigzag, Functionalization::Carboxylate, 6);
        assert!(approx_eq(zigzag, -3.0));
    }

    #[test]
    fn carboxyl_rims_are_neutral() {
        assert!(approx_eq(
            rim_balance(StructureKind::Armchair, Functionalization::Carboxyl, 10),
            0.0
        ));
        assert!(approx_eq(
            rim_balance(StructureKind::Zigzag, Functionalization::Carboxyl, 6),
            0.0
        ));
    }
}
