use crate::elements;
use crate::errors::LookupError;
use rustc_hash::FxHashMap;

/// Conversion factor from the Angstrom coordinates of a mol2 file to the Bohr
/// coordinates of a cube file. Applied once at parse time so every geometric
/// quantity downstream is already in Bohr.
pub const BOHR_PER_ANGSTROM: f64 = 1.88972599;

/// A single point charge read from the structure file.
///
/// > name: String - the atom name field as written in the file
/// > atomic_number: usize - from the static symbol table, 0 for extra points
/// > position: [f64; 3] - cartesian coordinates in Bohr
/// > charge: f64 - the partial charge
pub struct Atom {
    pub name: String,
    pub atomic_number: usize,
    pub position: [f64; 3],
    pub charge: f64,
}

impl Atom {
    /// Builds an atom from the fields of a mol2 record. The element symbol is
    /// the name with trailing digits stripped and must be in the table.
    pub fn from_record(
        table: &FxHashMap<&'static str, usize>,
        name: &str,
        position: [f64; 3],
        charge: f64,
    ) -> Result<Self, LookupError> {
        let atomic_number = elements::atomic_number(table, element_symbol(name))?;
        Ok(Self {
            name: String::from(name),
            atomic_number,
            position,
            charge,
        })
    }
}

/// Strips trailing digits from an atom name, "Cl12" names a chlorine.
pub fn element_symbol(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// The minimum and maximum coordinate over all atoms along each axis.
pub fn extents(atoms: &[Atom]) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for atom in atoms {
        for i in 0..3 {
            min[i] = min[i].min(atom.position[i]);
            max[i] = max[i].max(atom.position[i]);
        }
    }
    (min, max)
}
