use super::geometry;
use super::types::{AtomSubtype, Element};

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: [f64; 3],
    pub subtype: AtomSubtype,
    pub charge: f64,
}

impl Atom {
    /// Creates an atom whose element follows from its subtype.
    pub fn new(subtype: AtomSubtype, position: [f64; 3], charge: f64) -> Self {
        Self {
            element: subtype.element(),
            position,
            subtype,
            charge,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position[2]
    }

    #[inline]
    pub fn distance_to(&self, other: &Atom) -> f64 {
        geometry::distance(self.position, other.position)
    }
}
