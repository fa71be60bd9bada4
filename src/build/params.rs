use super::error::Error;
use crate::model::types::Element;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_BONDING_TOML: &str = include_str!("../../resources/default.bonding.toml");

static DEFAULT_PARAMS: OnceLock<BondingParams> = OnceLock::new();

/// Covalent radii, tolerance bands and neighbor capacity.
///
/// One immutable value drives both the bond lengths used to place
/// saturation atoms and the distance windows of connectivity inference.
#[derive(Debug, Clone, Deserialize)]
pub struct BondingParams {
    #[serde(default)]
    pub radii: CovalentRadii,
    #[serde(default)]
    pub tolerance: Tolerances,
    #[serde(default)]
    pub neighbors: NeighborLimits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CovalentRadii {
    #[serde(rename = "C", default = "default_carbon_radius")]
    pub carbon: f64,
    #[serde(rename = "H", default = "default_hydrogen_radius")]
    pub hydrogen: f64,
    #[serde(rename = "O", default = "default_oxygen_radius")]
    pub oxygen: f64,
}

fn default_carbon_radius() -> f64 {
    0.77
}
fn default_hydrogen_radius() -> f64 {
    0.32
}
fn default_oxygen_radius() -> f64 {
    0.66
}

impl Default for CovalentRadii {
    fn default() -> Self {
        Self {
            carbon: default_carbon_radius(),
            hydrogen: default_hydrogen_radius(),
            oxygen: default_oxygen_radius(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tolerances {
    /// Relative tolerance for carbon–carbon pairs.
    #[serde(default = "default_carbon_carbon_tolerance")]
    pub carbon_carbon: f64,
    /// Relative tolerance for every pair involving hydrogen or oxygen.
    #[serde(default = "default_hetero_tolerance")]
    pub hetero: f64,
}

fn default_carbon_carbon_tolerance() -> f64 {
    0.15
}
fn default_hetero_tolerance() -> f64 {
    0.05
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            carbon_carbon: default_carbon_carbon_tolerance(),
            hetero: default_hetero_tolerance(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeighborLimits {
    #[serde(default = "default_max_neighbors")]
    pub max: usize,
}

fn default_max_neighbors() -> usize {
    3
}

impl Default for NeighborLimits {
    fn default() -> Self {
        Self {
            max: default_max_neighbors(),
        }
    }
}

/// Half-open distance range `[lo, hi)` in which two atoms count as bonded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondWindow {
    pub lo: f64,
    pub hi: f64,
}

impl BondWindow {
    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.lo && distance < self.hi
    }
}

impl BondingParams {
    pub fn radius(&self, element: Element) -> f64 {
        match element {
            Element::C => self.radii.carbon,
            Element::H => self.radii.hydrogen,
            Element::O => self.radii.oxygen,
        }
    }

    /// Reference bond length: the sum of both covalent radii.
    #[inline]
    pub fn bond_length(&self, a: Element, b: Element) -> f64 {
        self.radius(a) + self.radius(b)
    }

    pub fn window(&self, a: Element, b: Element) -> BondWindow {
        let length = self.bond_length(a, b);
        let tolerance = match (a, b) {
            (Element::C, Element::C) => self.tolerance.carbon_carbon,
            _ => self.tolerance.hetero,
        };
        let delta = length * tolerance;
        BondWindow {
            lo: length - delta,
            hi: length + delta,
        }
    }

    /// Neighbor capacity per atom, `None` when unlimited.
    pub fn max_neighbors(&self) -> Option<usize> {
        match self.neighbors.max {
            0 => None,
            n => Some(n),
        }
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<BondingParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: BondingParams = toml::from_str(toml)?;
            Ok(params)
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static BondingParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_BONDING_TOML)
            .expect("Failed to parse embedded bonding parameters. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn default_parameters_match_literature_radii() {
        let params = get_default_parameters();
        assert!(approx_eq(params.radius(Element::C), 0.77));
        assert!(approx_eq(params.radius(Element::H), 0.32));
        assert!(approx_eq(params.radius(Element::O), 0.66));
        assert_eq!(params.max_neighbors(), Some(3));
    }

    #[test]
    fn carbon_carbon_window_is_fifteen_percent() {
        let w = get_default_parameters().window(Element::C, Element::C);
        assert!(approx_eq(w.lo, 1.54 - 0.231));
        assert!(approx_eq(w.hi, 1.54 + 0.231));
    }

    #[test]
    fn hetero_windows_are_five_percent_and_symmetric_in_order() {
        let params = get_default_parameters();
        let ch = params.window(Element::C, Element::H);
        assert!(approx_eq(ch.lo, 1.09 * 0.95));
        assert!(approx_eq(ch.hi, 1.09 * 1.05));
        assert_eq!(params.window(Element::H, Element::C), ch);

        let oh = params.window(Element::O, Element::H);
        assert!(approx_eq(oh.lo, 0.98 * 0.95));
        let co = params.window(Element::C, Element::O);
        assert!(approx_eq(co.hi, 1.43 * 1.05));
    }

    #[test]
    fn window_is_half_open() {
        let w = BondWindow { lo: 1.0, hi: 2.0 };
        assert!(w.contains(1.0));
        assert!(w.contains(1.999));
        assert!(!w.contains(2.0));
        assert!(!w.contains(0.999));
    }

    #[test]
    fn custom_parameters_fill_missing_fields_with_defaults() {
        let custom = r#"
            [radii]
            C = 0.71

            [neighbors]
            max = 0
        "#;
        let params = load_parameters(Some(custom)).unwrap();
        assert!(approx_eq(params.radii.carbon, 0.71));
        assert!(approx_eq(params.radii.hydrogen, 0.32));
        assert!(approx_eq(params.tolerance.carbon_carbon, 0.15));
        assert_eq!(params.max_neighbors(), None);
    }

    #[test]
    fn empty_custom_toml_equals_defaults() {
        let params = load_parameters(Some("")).unwrap();
        assert!(approx_eq(params.radii.oxygen, 0.66));
        assert_eq!(params.max_neighbors(), Some(3));
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let result = load_parameters(Some("not valid [[[toml"));
        assert!(matches!(result, Err(Error::ParameterParse(_))));
    }
}
