use crate::io::TITLE;
use crate::model::structure::Structure;
use std::io::{self, Write};

pub fn write<W: Write>(mut writer: W, structure: &Structure) -> io::Result<()> {
    writeln!(writer, " {}", structure.atom_count())?;
    writeln!(writer, "{TITLE}")?;
    for atom in &structure.atoms {
        writeln!(
            writer,
            "{:<3}{:12.6}{:12.6}{:12.6}",
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::types::AtomSubtype;

    #[test]
    fn writes_header_and_fixed_width_rows() {
        let structure = Structure {
            atoms: vec![
                Atom::new(AtomSubtype::AromaticCarbon, [1.5, -2.25, 0.125], 0.0),
                Atom::new(AtomSubtype::HydroxylOxygen, [-10.0, 0.0, 3.0], -0.53),
            ],
            lattice_atom_count: 1,
            ..Default::default()
        };
        let mut buf = Vec::new();
        write(&mut buf, &structure).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 2");
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[2], "C      1.500000   -2.250000    0.125000");
        assert_eq!(lines[3], "O    -10.000000    0.000000    3.000000");
    }
}
