//! A pure Rust builder for carbon nanotube and graphite models.
//! It lays out armchair and zigzag single-wall nanotubes and rectangular graphite (HOPG)
//! sheets, saturates their open borders with hydrogens or oxygen-containing groups, infers
//! connectivity from interatomic distances and writes the result in common molecular formats.
//!
//! # Features
//!
//! - **Lattice generation** — Armchair `(n, n)` and zigzag `(n, 0)` tubes grown to a
//!   requested length, and graphite sheets of a requested width and height
//! - **Border saturation** — Hydrogen, hydroxyl, carboxyl and carboxylate caps with
//!   tabulated partial charges for the rim atoms
//! - **Connectivity** — Element-aware distance windows derived from covalent radii, with
//!   periodic closure along periodic axes
//! - **Output** — TINKER XYZ, plain XYZ, GROMACS GRO and TRIPOS MOL2 writers
//!
//! # Quick Start
//!
//! ```
//! use carbon_forge::{BuildConfig, Functionalization, Geometry, StructureKind, build};
//!
//! // Armchair (5,5) tube, 10 Å long, with carboxylic acid rims
//! let config = BuildConfig {
//!     structure: StructureKind::Armchair,
//!     geometry: Geometry::Tube { rings: 5, length: 10.0 },
//!     functionalization: Functionalization::Carboxyl,
//!     ..Default::default()
//! };
//! let model = build(&config)?;
//!
//! // 10 atoms per ring, 10 rings
//! assert_eq!(model.structure.ring_size, 10);
//! assert_eq!(model.structure.lattice_atom_count, 100);
//!
//! // Each rim: 5 COOH groups (C, 2 O, H) and 5 hydrogens
//! assert_eq!(model.structure.added_atom_count(), 50);
//!
//! // The carboxyl rims are neutral
//! assert!(model.structure.total_charge().abs() < 1e-9);
//!
//! // Every lattice carbon is three-coordinated once the rims are capped
//! let conn = model.connectivity.as_ref().unwrap();
//! assert!((0..100).all(|i| conn.degree(i) == 3));
//! # Ok::<(), carbon_forge::BuildError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`build()`] — Generation, saturation and connectivity pipeline
//! - [`io`] — Format writers
//!
//! # Data Types
//!
//! - [`Structure`] — Ordered atoms plus ring size, boundary ranges and periodic lengths
//! - [`Atom`] — Element, position, SYBYL subtype and partial charge
//! - [`Connectivity`] — Bonds, periodic seam bonds and per-atom neighbor lists
//! - [`BuiltModel`] — A structure together with its connectivity
//! - [`BuildConfig`] — Structure kind, geometry, functionalization and periodicity
//! - [`BondingParams`] — Covalent radii, tolerances and neighbor capacity

mod build;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::geometry::{azimuth, distance};
pub use model::structure::{AxisLengths, BoundaryRanges, Periodicity, Structure, StructureKind};
pub use model::topology::{Bond, BuiltModel, Connectivity};
pub use model::types::{AtomSubtype, BondOrder, Element};

pub use build::{
    BondWindow, BondingParams, BuildConfig, CarboxylCharges, DEFAULT_BOND_LENGTH,
    Functionalization, Geometry, HydrogenCapCharges, MAX_RINGS, RimCharges,
    add_coo, add_h, armchair, build, carboxyl_charges, connect, get_default_parameters,
    graphite, hydrogen_cap_charges, load_parameters, rim_charges, saturate, zigzag,
};

pub use build::Error as BuildError;
pub use io::Error as WriteError;
