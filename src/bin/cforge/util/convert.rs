use carbon_forge::io::Format;
use carbon_forge::{Functionalization, Periodicity};

use crate::cli;

impl From<cli::TubeGroup> for Functionalization {
    fn from(g: cli::TubeGroup) -> Self {
        match g {
            cli::TubeGroup::None => Self::None,
            cli::TubeGroup::Oh => Self::Hydroxyl,
            cli::TubeGroup::Coo => Self::Carboxylate,
            cli::TubeGroup::Cooh => Self::Carboxyl,
        }
    }
}

impl From<cli::SheetGroup> for Functionalization {
    fn from(g: cli::SheetGroup) -> Self {
        match g {
            cli::SheetGroup::None => Self::None,
            cli::SheetGroup::Oh => Self::Hydroxyl,
        }
    }
}

impl From<cli::SheetAxes> for Periodicity {
    fn from(a: cli::SheetAxes) -> Self {
        match a {
            cli::SheetAxes::X => Periodicity { x: true, y: false },
            cli::SheetAxes::Y => Periodicity::Y,
            cli::SheetAxes::Xy => Periodicity::XY,
        }
    }
}

impl From<cli::OutputFormat> for Format {
    fn from(f: cli::OutputFormat) -> Self {
        match f {
            cli::OutputFormat::Tinker => Self::Tinker,
            cli::OutputFormat::Xyz => Self::Xyz,
            cli::OutputFormat::Gro => Self::Gro,
            cli::OutputFormat::Mol2 => Self::Mol2,
        }
    }
}

/// Human-readable periodicity for summaries.
pub fn periodicity_label(p: Periodicity) -> &'static str {
    match (p.x, p.y) {
        (false, false) => "none",
        (true, false) => "x",
        (false, true) => "y",
        (true, true) => "x, y",
    }
}
