//! Border saturation and functionalization.
//!
//! Dangling bonds on the open borders of a structure are capped with
//! hydrogens, hydroxyls or carboxyl groups. Saturation only appends atoms;
//! the lattice and its [`BoundaryRanges`](crate::model::structure::BoundaryRanges)
//! stay untouched. Borders along a periodic axis are left open.
//!
//! Append order is fixed: top border, bottom border, then (sheets) the side
//! edges.

mod carboxyl;
mod hydrogen;

pub use carboxyl::add_coo;
pub use hydrogen::add_h;

use std::ops::Range;

use super::config::Functionalization;
use super::error::Error;
use super::params::BondingParams;
use crate::model::structure::Structure;
use crate::model::types::Element;

/// Saturates every open border of `structure` with `functionalization`.
pub fn saturate(
    structure: &mut Structure,
    functionalization: Functionalization,
    params: &BondingParams,
) -> Result<(), Error> {
    match functionalization {
        Functionalization::None => add_h(structure, false, params),
        Functionalization::Hydroxyl => add_h(structure, true, params),
        Functionalization::Carboxylate => add_coo(structure, false, params)?,
        Functionalization::Carboxyl => add_coo(structure, true, params)?,
    }
    Ok(())
}

/// Bond lengths of terminal groups.
#[derive(Debug, Clone, Copy)]
struct CapBonds {
    ch: f64,
    co: f64,
    oh: f64,
    cc: f64,
}

impl CapBonds {
    fn new(params: &BondingParams) -> Self {
        Self {
            ch: params.bond_length(Element::C, Element::H),
            co: params.bond_length(Element::C, Element::O),
            oh: params.bond_length(Element::O, Element::H),
            cc: params.bond_length(Element::C, Element::C),
        }
    }
}

/// An open boundary ring (row) and the sign of its outward `y` direction.
#[derive(Debug, Clone)]
struct Border {
    atoms: Range<usize>,
    sign: f64,
}

/// Top and bottom borders, or nothing when `y` is periodic.
fn open_borders(structure: &Structure) -> Vec<Border> {
    if structure.periodicity.y {
        return Vec::new();
    }
    vec![
        Border {
            atoms: structure.boundary.first.clone(),
            sign: 1.0,
        },
        Border {
            atoms: structure.boundary.last.clone(),
            sign: -1.0,
        },
    ]
}

/// Vector of length `len` pointing away from the tube axis at azimuth `phi`.
#[inline]
fn radial(phi: f64, len: f64) -> [f64; 3] {
    [len * phi.cos(), 0.0, len * phi.sin()]
}

/// Vector of length `len` tilted 60° from the ring plane towards `sign·y`,
/// with its in-plane part along azimuth `phi`.
#[inline]
fn tilted(phi: f64, len: f64, sign: f64) -> [f64; 3] {
    let (s, c) = 60f64.to_radians().sin_cos();
    [len * c * phi.cos(), sign * len * s, len * c * phi.sin()]
}

#[inline]
fn axial(len: f64, sign: f64) -> [f64; 3] {
    [0.0, sign * len, 0.0]
}
