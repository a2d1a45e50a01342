use crate::atoms::Atom;
use crate::errors::{FormatError, ReadError};
use crate::grid::{Grid, GridSpec};
use crate::io::parse_token;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// The two fixed comment lines opening every output file.
const COMMENT: &str =
    " Electrostatic potential from point charges\n Generated from a mol2 structure\n";
/// The data block of a cube file holds six values per line.
const VALUES_PER_LINE: usize = 6;

/// Formats a value as `d.dddddE+dd`, the five digit scientific form of the
/// cube data block. A non-finite value prints as-is, a NaN marks a grid
/// point sat exactly on an atom.
pub fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // {:E} leaves the exponent unsigned and unpadded, e.g. 1.50000E-1
    let formatted = format!("{:.5E}", value);
    let (mantissa, exponent) = match formatted.split_once('E') {
        Some(split) => split,
        // UpperExp always writes an exponent
        None => unreachable!(),
    };
    // the exponent of an f64 always fits an i32
    let exponent = exponent.parse::<i32>().unwrap();
    format!("{}E{:+03}", mantissa, exponent)
}

/// Writes the cube file: two comment lines, the origin line, three axis
/// lines, the atom block and the field six values to a line. Header numbers
/// are I5/F12.6 fixed-width columns. Overwrites the target, a failure part
/// way through leaves a truncated file behind.
pub fn write(
    filename: &str,
    atoms: &[Atom],
    grid: &Grid,
    field: &[f64],
) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut out = BufWriter::new(file);
    out.write_all(COMMENT.as_bytes())?;
    writeln!(
        out,
        "{:5}{:12.6}{:12.6}{:12.6}",
        atoms.len(),
        grid.x.origin,
        grid.y.origin,
        grid.z.origin
    )?;
    writeln!(out, "{:5}{:12.6}{:12.6}{:12.6}", grid.x.count, grid.x.spacing, 0., 0.)?;
    writeln!(out, "{:5}{:12.6}{:12.6}{:12.6}", grid.y.count, 0., grid.y.spacing, 0.)?;
    writeln!(out, "{:5}{:12.6}{:12.6}{:12.6}", grid.z.count, 0., 0., grid.z.spacing)?;
    for atom in atoms {
        // the second column is the cube format's charge slot, left at 0.0
        writeln!(
            out,
            "{:5}{:12.6}{:12.6}{:12.6}{:12.6}",
            atom.atomic_number,
            0.,
            atom.position[0],
            atom.position[1],
            atom.position[2]
        )?;
    }
    for (i, value) in field.iter().enumerate() {
        if i > 0 && i % VALUES_PER_LINE == 0 {
            out.write_all(b"\n")?;
        }
        write!(out, "{} ", scientific(*value))?;
    }
    out.write_all(b"\n\n")?;
    out.flush()
}

/// Reads the header of an existing cube file into a [`GridSpec`]. Only the
/// first six lines matter: two comments, the atom count and origin, then one
/// line per axis carrying the count and the spacing in that axis's own slot.
/// The grid is taken verbatim, nothing is checked against the molecule.
pub fn read_header(filename: &str) -> Result<GridSpec, ReadError> {
    let text = fs::read_to_string(filename)?;
    let lines = text.lines().collect::<Vec<&str>>();
    if lines.len() < 6 {
        return Err(FormatError::Truncated(
            String::from(filename),
            String::from("the six header lines were read"),
        )
        .into());
    }
    let fields = lines[2].split_whitespace().collect::<Vec<&str>>();
    if fields.len() < 4 {
        return Err(FormatError::ShortRecord(
            String::from(filename),
            3,
            fields.len(),
            4,
        )
        .into());
    }
    // the count is parsed only to validate the line
    let _natoms: usize = parse_token(filename, fields[0], "integer")?;
    let mut origin = [0f64; 3];
    for (i, o) in origin.iter_mut().enumerate() {
        *o = parse_token(filename, fields[i + 1], "float")?;
    }
    let mut counts = [0usize; 3];
    let mut spacings = [0f64; 3];
    for axis in 0..3 {
        let fields = lines[3 + axis].split_whitespace().collect::<Vec<&str>>();
        if fields.len() < 4 {
            return Err(FormatError::ShortRecord(
                String::from(filename),
                4 + axis,
                fields.len(),
                4,
            )
            .into());
        }
        counts[axis] = parse_token(filename, fields[0], "integer")?;
        // only the diagonal slot of the spacing vector is meaningful
        spacings[axis] = parse_token(filename, fields[1 + axis], "float")?;
    }
    Ok(GridSpec::Supplied {
        origin,
        counts,
        spacings,
    })
}
