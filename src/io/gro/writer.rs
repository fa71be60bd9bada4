use crate::io::TITLE;
use crate::model::structure::Structure;
use std::io::{self, Write};

const RESIDUE_ID: usize = 1;
const RESIDUE_NAME: &str = "CNT1";
/// Box edge (nm) used along every non-periodic direction.
const OPEN_EDGE_NM: f64 = 10.0;
/// Box height (nm) of a periodic sheet.
const SHEET_HEIGHT_NM: f64 = 1.0;
const SERIAL_MODULUS: usize = 100_000;

pub fn write<W: Write>(mut writer: W, structure: &Structure) -> io::Result<()> {
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, " {}", structure.atom_count())?;
    for (i, atom) in structure.atoms.iter().enumerate() {
        writeln!(
            writer,
            "{:>5}{:<5}{:>5}{:>5}{:8.3}{:8.3}{:8.3}",
            RESIDUE_ID,
            RESIDUE_NAME,
            atom.element.symbol(),
            (i + 1) % SERIAL_MODULUS,
            atom.position[0] / 10.0,
            atom.position[1] / 10.0,
            atom.position[2] / 10.0
        )?;
    }
    let [a, b, c] = box_vectors(structure);
    writeln!(writer, "{a:10.5}{b:10.5}{c:10.5}")?;
    Ok(())
}

/// Rectangular box edges in nm.
///
/// Periodic axes take the achieved periodic length; a periodic sheet is
/// one nanometre thick.
fn box_vectors(structure: &Structure) -> [f64; 3] {
    let p = structure.periodicity;
    if !p.any() {
        return [OPEN_EDGE_NM; 3];
    }
    let lengths = structure.periodic_lengths;
    let along_x = match lengths.x {
        Some(a) if p.x => a / 10.0,
        _ => OPEN_EDGE_NM,
    };
    let along_y = if p.y {
        lengths.y / 10.0
    } else {
        OPEN_EDGE_NM
    };
    let along_z = if structure.kind.is_tube() {
        OPEN_EDGE_NM
    } else {
        SHEET_HEIGHT_NM
    };
    [along_x, along_y, along_z]
}
