//! Core data structures for generated carbon allotropes.
//!
//! - [`atom`] – Atom with element, position, chemical subtype and partial charge.
//! - [`types`] – Elements, bond orders and SYBYL subtypes.
//! - [`geometry`] – Distance and azimuth helpers.
//! - [`structure`] – Ordered atom sequence plus the lattice bookkeeping
//!   (ring size, boundary ranges, periodic lengths) that saturation and
//!   connectivity depend on.
//! - [`topology`] – Bonds, neighbor lists and the final [`BuiltModel`].
//!
//! [`BuiltModel`]: topology::BuiltModel

pub mod atom;
pub mod geometry;
pub mod structure;
pub mod topology;
pub mod types;
