use crate::model::structure::Structure;
use crate::model::topology::Connectivity;
use std::io::{self, Write};

/// TINKER force-field atom type; generated models are left untyped.
const ATOM_TYPE: u32 = 0;

pub fn write<W: Write>(mut writer: W, structure: &Structure, conn: &Connectivity) -> io::Result<()> {
    writeln!(writer, " {}", structure.atom_count())?;
    for (i, atom) in structure.atoms.iter().enumerate() {
        write!(
            writer,
            "{:>3}  {:<3}{:12.6}{:12.6}{:12.6}{:>6}",
            i + 1,
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2],
            ATOM_TYPE
        )?;
        for &neighbor in conn.neighbors_of(i) {
            write!(writer, "{:>6}", neighbor + 1)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
