use crate::atoms::{Atom, BOHR_PER_ANGSTROM};
use crate::elements;
use crate::errors::{FormatError, ReadError};
use crate::io::parse_token;
use regex::Regex;
use std::fs;

/// Record markers delimiting the two sections we read.
const MOLECULE_MARKER: &str = "@<TRIPOS>MOLECULE";
const ATOM_MARKER: &str = "@<TRIPOS>ATOM";
/// Fields of an atom record: id name x y z type subst_id subst_name charge.
const RECORD_FIELDS: usize = 9;
/// The partial charge sits in a fixed slot of the record.
const CHARGE_FIELD: usize = 8;

/// Reads a mol2 file into an ordered list of atoms.
pub fn read(filename: &str) -> Result<Vec<Atom>, ReadError> {
    let text = fs::read_to_string(filename)?;
    parse(&text, filename)
}

/// Parses mol2 text. The atom count is the first token two lines below the
/// MOLECULE marker and that many records are read from directly below the
/// ATOM marker. Coordinates are converted to Bohr here, nothing downstream
/// sees Angstrom. Atoms keep file order, the cube atom block preserves it.
pub fn parse(text: &str, filename: &str) -> Result<Vec<Atom>, ReadError> {
    let lines = text.lines().collect::<Vec<&str>>();
    let molecule_line = section_start(&lines, filename, MOLECULE_MARKER)?;
    let atom_line = section_start(&lines, filename, ATOM_MARKER)?;
    let count_line = lines.get(molecule_line + 2).ok_or_else(|| {
        FormatError::Truncated(
            String::from(filename),
            String::from("the atom count line was read"),
        )
    })?;
    let natoms: usize = match count_line.split_whitespace().next() {
        Some(token) => parse_token(filename, token, "positive integer")?,
        None => {
            return Err(FormatError::BadToken(
                String::from(filename),
                String::from(*count_line),
                String::from("positive integer"),
            )
            .into())
        }
    };
    let table = elements::symbol_table();
    let mut atoms = Vec::with_capacity(natoms);
    for i in 0..natoms {
        let line = lines.get(atom_line + 1 + i).ok_or_else(|| {
            FormatError::Truncated(
                String::from(filename),
                format!("{} atom records were read", natoms),
            )
        })?;
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        if fields.len() < RECORD_FIELDS {
            return Err(FormatError::ShortRecord(
                String::from(filename),
                atom_line + 2 + i,
                fields.len(),
                RECORD_FIELDS,
            )
            .into());
        }
        let x: f64 = parse_token(filename, fields[2], "float")?;
        let y: f64 = parse_token(filename, fields[3], "float")?;
        let z: f64 = parse_token(filename, fields[4], "float")?;
        let charge: f64 = parse_token(filename, fields[CHARGE_FIELD], "float")?;
        let position = [
            x * BOHR_PER_ANGSTROM,
            y * BOHR_PER_ANGSTROM,
            z * BOHR_PER_ANGSTROM,
        ];
        atoms.push(Atom::from_record(&table, fields[1], position, charge)?);
    }
    Ok(atoms)
}

/// Index of the first line matching a section marker.
fn section_start(
    lines: &[&str],
    filename: &str,
    marker: &str,
) -> Result<usize, FormatError> {
    // markers contain no metacharacters
    let pattern = Regex::new(marker).unwrap();
    lines
        .iter()
        .position(|line| pattern.is_match(line))
        .ok_or_else(|| {
            FormatError::MissingSection(
                String::from(filename),
                String::from(marker),
            )
        })
}
