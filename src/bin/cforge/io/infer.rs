use std::path::Path;

use carbon_forge::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "txyz" | "tnk" | "arc" => Some(Format::Tinker),
        "xyz" => Some(Format::Xyz),
        "gro" => Some(Format::Gro),
        "mol2" => Some(Format::Mol2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(output(Path::new("cnt.txyz")), Some(Format::Tinker));
        assert_eq!(output(Path::new("cnt.arc")), Some(Format::Tinker));
        assert_eq!(output(Path::new("out/cnt.XYZ")), Some(Format::Xyz));
        assert_eq!(output(Path::new("cnt.gro")), Some(Format::Gro));
        assert_eq!(output(Path::new("cnt.mol2")), Some(Format::Mol2));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(output(Path::new("cnt.pdb")), None);
        assert_eq!(output(Path::new("cnt")), None);
    }
}
