use std::fmt;

/// Elements that occur in carbon allotrope models and their edge groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    C = 6,
    O = 8,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::O => "O",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Bond orders produced by connectivity inference.
///
/// Lattice carbon–carbon bonds are aromatic; every bond that involves an
/// atom added during border saturation is single.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    Single,
    Aromatic,
}

impl BondOrder {
    /// Tag used in the TRIPOS bond section.
    pub fn mol2_tag(&self) -> &'static str {
        match self {
            BondOrder::Single => "1",
            BondOrder::Aromatic => "ar",
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Single => write!(f, "Single"),
            BondOrder::Aromatic => write!(f, "Aromatic"),
        }
    }
}

/// Chemical subtype of an atom, written as its SYBYL type.
///
/// Only used to annotate output; it never influences geometry or bonding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomSubtype {
    /// Lattice carbon (`C.ar`).
    AromaticCarbon,
    /// Carboxyl / carboxylate carbon (`C.2`).
    CarboxylCarbon,
    /// Carboxyl / carboxylate oxygen (`O.co2`).
    CarboxylOxygen,
    /// Hydroxyl oxygen (`O.3`).
    HydroxylOxygen,
    /// Any hydrogen (`H`).
    Hydrogen,
}

impl AtomSubtype {
    pub fn sybyl(&self) -> &'static str {
        match self {
            AtomSubtype::AromaticCarbon => "C.ar",
            AtomSubtype::CarboxylCarbon => "C.2",
            AtomSubtype::CarboxylOxygen => "O.co2",
            AtomSubtype::HydroxylOxygen => "O.3",
            AtomSubtype::Hydrogen => "H",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            AtomSubtype::AromaticCarbon | AtomSubtype::CarboxylCarbon => Element::C,
            AtomSubtype::CarboxylOxygen | AtomSubtype::HydroxylOxygen => Element::O,
            AtomSubtype::Hydrogen => Element::H,
        }
    }
}

impl fmt::Display for AtomSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sybyl())
    }
}
