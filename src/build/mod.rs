mod charges;
mod config;
mod connect;
mod error;
mod lattice;
mod params;
mod saturate;

pub use charges::{
    CarboxylCharges, HydrogenCapCharges, RimCharges, carboxyl_charges, hydrogen_cap_charges,
    rim_charges,
};
pub use config::{BuildConfig, DEFAULT_BOND_LENGTH, Functionalization, Geometry};
pub use connect::connect;
pub use error::Error;
pub use lattice::{armchair, graphite, zigzag};
pub use params::{BondWindow, BondingParams, get_default_parameters, load_parameters};
pub use saturate::{add_coo, add_h, saturate};

use log::info;

use crate::model::structure::{Periodicity, Structure, StructureKind};
use crate::model::topology::BuiltModel;

/// Generates, saturates and connects the structure described by `config`.
///
/// Every input is validated before the first atom is generated. Borders
/// along periodic axes are neither saturated nor charged; they are closed by
/// periodic bonds instead.
pub fn build(config: &BuildConfig) -> Result<BuiltModel, Error> {
    validate(config)?;
    let params = load_parameters(config.params.as_deref())?;

    let periodicity = match config.structure {
        StructureKind::Graphite => config.periodicity,
        _ => Periodicity {
            x: false,
            y: config.periodicity.y,
        },
    };
    let rim = if periodicity.y {
        RimCharges::NEUTRAL
    } else {
        rim_charges(config.structure, config.functionalization)
    };

    let mut structure = generate(config, rim);
    structure.periodicity = periodicity;

    saturate(&mut structure, config.functionalization, &params)?;

    let connectivity = config.connectivity.then(|| connect(&structure, &params));

    info!(
        "{}: {} atoms ({} added), {} bonds",
        structure.kind,
        structure.atom_count(),
        structure.added_atom_count(),
        connectivity.as_ref().map_or(0, |c| c.bond_count())
    );

    Ok(BuiltModel {
        structure,
        connectivity,
    })
}

fn generate(config: &BuildConfig, rim: RimCharges) -> Structure {
    let b = config.bond_length;
    // `validate` pairs sheets with graphite and tubes with nanotubes.
    match config.geometry {
        Geometry::Sheet { width, height } => graphite(width, height, b),
        Geometry::Tube { rings, length } if config.structure == StructureKind::Zigzag => {
            zigzag(rings, length, b, rim)
        }
        Geometry::Tube { rings, length } => armchair(rings, length, b, rim),
    }
}

/// Largest accepted ring count; keeps `ring_size` and the atom count far
/// from `usize` overflow.
pub const MAX_RINGS: usize = 10_000;

fn validate(config: &BuildConfig) -> Result<(), Error> {
    let b = config.bond_length;
    if !b.is_finite() || b <= 0.0 {
        return Err(Error::invalid_geometry(format!(
            "bond length must be positive and finite, got {b}"
        )));
    }

    match (config.structure, config.geometry) {
        (StructureKind::Graphite, Geometry::Sheet { width, height }) => {
            check_extent("width", width)?;
            check_extent("height", height)?;
            if config.functionalization.is_carboxyl() {
                return Err(Error::unsupported(
                    config.structure,
                    config.functionalization,
                ));
            }
        }
        (StructureKind::Graphite, Geometry::Tube { .. }) => {
            return Err(Error::invalid_geometry(
                "graphite sheets take a width and a height, not rings and length",
            ));
        }
        (kind, Geometry::Tube { rings, length }) => {
            if rings == 0 {
                return Err(Error::invalid_geometry(format!(
                    "{kind} needs at least one ring"
                )));
            }
            if rings > MAX_RINGS {
                return Err(Error::invalid_geometry(format!(
                    "{kind} supports at most {MAX_RINGS} rings, got {rings}"
                )));
            }
            check_extent("length", length)?;
        }
        (kind, Geometry::Sheet { .. }) => {
            return Err(Error::invalid_geometry(format!(
                "{kind} takes a ring count and a length, not width and height"
            )));
        }
    }
    Ok(())
}

fn check_extent(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_geometry(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{BondOrder, Element};

    fn tube(kind: StructureKind, rings: usize, length: f64) -> BuildConfig {
        BuildConfig {
            structure: kind,
            geometry: Geometry::Tube { rings, length },
            ..Default::default()
        }
    }

    fn sheet(width: f64, height: f64) -> BuildConfig {
        BuildConfig {
            structure: StructureKind::Graphite,
            geometry: Geometry::Sheet { width, height },
            ..Default::default()
        }
    }

    #[test]
    fn default_config_builds_saturated_armchair() {
        let model = build(&BuildConfig::default()).unwrap();
        let s = &model.structure;
        assert_eq!(s.kind, StructureKind::Armchair);
        assert_eq!(s.ring_size, 10);
        assert_eq!(s.lattice_atom_count, 100);
        assert_eq!(s.added_atom_count(), 20);
        assert!(s.total_charge().abs() < 1e-9);

        let conn = model.connectivity.as_ref().unwrap();
        assert_eq!(model.bond_count(), 160);
        for i in 0..s.lattice_atom_count {
            assert_eq!(conn.degree(i), 3, "atom {i}");
        }
    }

    #[test]
    fn zigzag_cooh_gains_fifteen_atoms_per_border() {
        let config = BuildConfig {
            functionalization: Functionalization::Carboxyl,
            ..tube(StructureKind::Zigzag, 6, 10.0)
        };
        let model = build(&config).unwrap();
        assert_eq!(model.structure.added_atom_count(), 30);
        let added = model.structure.added_atoms();
        let carbons = added.iter().filter(|a| a.element == Element::C).count();
        assert_eq!(carbons, 6);
        assert!(model.structure.total_charge().abs() < 1e-9);
    }

    #[test]
    fn periodic_tube_is_closed_and_neutral() {
        let config = BuildConfig {
            periodicity: Periodicity::XY,
            functionalization: Functionalization::Hydroxyl,
            ..tube(StructureKind::Armchair, 5, 10.0)
        };
        let model = build(&config).unwrap();
        let s = &model.structure;
        assert_eq!(s.periodicity, Periodicity::Y);
        assert_eq!(s.added_atom_count(), 0);
        assert!(s.atoms.iter().all(|a| a.charge == 0.0));
        let conn = model.connectivity.unwrap();
        assert_eq!(conn.periodic_bonds.len(), 10);
        assert!(conn.periodic_bonds.iter().all(|b| b.order == BondOrder::Aromatic));
    }

    #[test]
    fn sheet_with_carboxylate_fails_before_generating() {
        let config = BuildConfig {
            functionalization: Functionalization::Carboxylate,
            ..sheet(10.0, 10.0)
        };
        assert!(matches!(
            build(&config),
            Err(Error::UnsupportedConfiguration { .. })
        ));
    }

    #[test]
    fn sheet_with_hydroxyl_is_supported() {
        let config = BuildConfig {
            functionalization: Functionalization::Hydroxyl,
            ..sheet(6.0, 6.0)
        };
        let model = build(&config).unwrap();
        assert!(model.structure.added_atom_count() > 0);
        assert!(
            model
                .structure
                .added_atoms()
                .iter()
                .any(|a| a.element == Element::O)
        );
    }

    #[test]
    fn zero_extent_sheet_is_not_empty() {
        let model = build(&sheet(0.0, 0.0)).unwrap();
        assert_eq!(model.structure.lattice_atom_count, 4);
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let bad = [
            tube(StructureKind::Armchair, 0, 10.0),
            tube(StructureKind::Armchair, usize::MAX, 10.0),
            tube(StructureKind::Zigzag, MAX_RINGS + 1, 10.0),
            tube(StructureKind::Zigzag, 6, -1.0),
            tube(StructureKind::Zigzag, 6, f64::NAN),
            sheet(-2.0, 5.0),
            sheet(5.0, f64::INFINITY),
            BuildConfig {
                bond_length: 0.0,
                ..Default::default()
            },
            BuildConfig {
                bond_length: f64::NAN,
                ..Default::default()
            },
            BuildConfig {
                structure: StructureKind::Graphite,
                ..Default::default()
            },
            BuildConfig {
                geometry: Geometry::Sheet {
                    width: 5.0,
                    height: 5.0,
                },
                ..Default::default()
            },
        ];
        for config in &bad {
            assert!(
                matches!(build(config), Err(Error::InvalidGeometry(_))),
                "{config:?}"
            );
        }
    }

    #[test]
    fn one_unit_periodic_tube_closes_every_ring_atom() {
        let config = BuildConfig {
            periodicity: Periodicity::Y,
            ..tube(StructureKind::Armchair, 5, 0.0)
        };
        let model = build(&config).unwrap();
        let conn = model.connectivity.as_ref().unwrap();
        assert_eq!(model.structure.atom_count(), 20);
        assert_eq!(conn.periodic_bonds.len(), 10);
        assert!((0..20).all(|i| conn.degree(i) == 3));
    }

    #[test]
    fn zero_length_tube_is_valid() {
        let model = build(&tube(StructureKind::Zigzag, 6, 0.0)).unwrap();
        assert_eq!(model.structure.lattice_atom_count, 24);
    }

    #[test]
    fn connectivity_can_be_skipped() {
        let config = BuildConfig {
            connectivity: false,
            ..Default::default()
        };
        let model = build(&config).unwrap();
        assert!(model.connectivity.is_none());
        assert_eq!(model.bond_count(), 0);
    }

    #[test]
    fn malformed_custom_params_are_reported() {
        let config = BuildConfig {
            params: Some("[radii\nC = ".to_string()),
            ..Default::default()
        };
        assert!(matches!(build(&config), Err(Error::ParameterParse(_))));
    }

    #[test]
    fn rebuilding_yields_identical_models() {
        let config = tube(StructureKind::Zigzag, 7, 14.0);
        let a = build(&config).unwrap();
        let b = build(&config).unwrap();
        assert_eq!(a.structure.atoms, b.structure.atoms);
        assert_eq!(
            a.connectivity.unwrap().bonds,
            b.connectivity.unwrap().bonds
        );
    }
}
