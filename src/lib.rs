//! Converts a mol2 structure file holding partially charged atoms into a
//! Gaussian [cube] file of the electrostatic potential those point charges
//! generate, sampled on a regular axis-aligned grid.
//!
//! ## Installing the binary
//! ### From Source
//! Building creates the ./target/release/m2c executable.
//! ```sh
//! $ cargo build --release
//! ```
//! From here you can either move or link the binary to a folder in your path.
//! ```sh
//! $ mv ./target/release/m2c ~/bin
//! ```
//!
//! ## Usage
//! In the default mode a box is generated that bounds the molecule plus a
//! margin of 10 Bohr, sampled every 0.5 Bohr along each axis.
//! ```sh
//! $ m2c input.mol2 output.cube
//! ```
//! An existing grid can be reused by passing the head section of a cube file
//! (at least the first 6 lines) as a third argument. The box origin, point
//! counts and spacings are then taken from it verbatim.
//! ```sh
//! $ m2c input.mol2 output.cube head
//! ```
//! The potential at each grid point is the sum of charge over distance across
//! all atoms. A grid point that lands exactly on an atom has no defined
//! potential and is written as NaN.
//! ## License
//! MIT
//!
//! [cube]: <https://gaussian.com/>

/// For parsing command-line arguments.
pub mod arguments;
/// Contains [Atom](atoms::Atom) and the Angstrom to Bohr conversion applied
/// as structures are parsed.
pub mod atoms;
/// The static element symbol to atomic number table.
pub mod elements;
/// Provides custom errors types.
pub mod errors;
/// Evaluates the point-charge potential over the grid.
pub mod esp;
/// Contains [Grid](grid::Grid) for deriving and holding the sampling box the
/// potential is evaluated on.
pub mod grid;
/// Handles the File I/O for the mol2 input, the cube output and the optional
/// cube header describing an existing grid.
pub mod io;
/// Progress reporting for the field evaluation.
pub mod progress;
/// Misc functions for vector manipulation.
pub mod utils;
