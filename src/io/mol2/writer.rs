use crate::model::structure::Structure;
use crate::model::topology::Connectivity;
use std::io::{self, Write};

const MOLECULE_NAME: &str = "CNT";
const SUBSTRUCTURE: &str = "CNT1";

/// Writes a TRIPOS MOL2 file with SYBYL subtypes and user charges.
///
/// Only in-box bonds are listed; periodic seam bonds have no MOL2
/// representation.
pub fn write<W: Write>(mut writer: W, structure: &Structure, conn: &Connectivity) -> io::Result<()> {
    writeln!(writer, "@<TRIPOS>MOLECULE")?;
    writeln!(writer, "{MOLECULE_NAME}")?;
    writeln!(
        writer,
        " {} {} 0 0 0",
        structure.atom_count(),
        conn.bond_count()
    )?;
    writeln!(writer, "SMALL")?;
    writeln!(writer, "USER_CHARGES")?;
    writeln!(writer)?;

    writeln!(writer, "@<TRIPOS>ATOM")?;
    for (i, atom) in structure.atoms.iter().enumerate() {
        writeln!(
            writer,
            "{:>7} {:>5} {:8.3} {:8.3} {:8.3} {:>7} {:>7} {:>7} {:8.3}",
            i + 1,
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2],
            atom.subtype.sybyl(),
            1,
            SUBSTRUCTURE,
            atom.charge
        )?;
    }

    writeln!(writer, "@<TRIPOS>BOND")?;
    for (i, bond) in conn.bonds.iter().enumerate() {
        writeln!(
            writer,
            "{:>7} {:>7} {:>7} {:>7}",
            i + 1,
            bond.i + 1,
            bond.j + 1,
            bond.order.mol2_tag()
        )?;
    }

    Ok(())
}
