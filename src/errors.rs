use std::fmt::{Debug, Display};
use std::io;

/// An error for a structure or header file that doesn't match the expected
/// layout. Each variant carries the name of the offending file so the message
/// can point at it.
pub enum FormatError {
    /// A required section marker is missing.
    /// MissingSection(file, marker)
    MissingSection(String, String),
    /// A token couldn't be parsed as the required type.
    /// BadToken(file, token, type)
    BadToken(String, String, String),
    /// A record has fewer fields than the format requires.
    /// ShortRecord(file, line, found, required)
    ShortRecord(String, usize, usize, usize),
    /// The file ended before the declared number of records was read.
    /// Truncated(file, expected)
    Truncated(String, String),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(file, marker) => write!(
                f,
                "Error: No \"{}\" section found in \"{}\".",
                marker, file
            ),
            Self::BadToken(file, token, typ) => write!(
                f,
                "Error: The token \"{}\" in \"{}\" is unparsable as a {}.",
                token, file, typ
            ),
            Self::ShortRecord(file, line, found, required) => write!(
                f,
                "Error: Record on line {} of \"{}\" has {} fields, {} are required.",
                line, file, found, required
            ),
            Self::Truncated(file, expected) => {
                write!(f, "Error: \"{}\" ended before {}.", file, expected)
            }
        }
    }
}

impl Debug for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// An error for an element symbol with no entry in the atomic number table.
/// The message names the symbol so the table can be extended.
pub struct LookupError {
    /// The symbol after trailing digits have been stripped from the atom name.
    pub symbol: String,
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error: Unknown element symbol \"{}\", add it to the table in elements.rs.",
            self.symbol
        )
    }
}

impl Debug for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Umbrella error for reading input files, allows the parsers to use `?` on
/// all three failure kinds.
pub enum ReadError {
    Io(io::Error),
    Format(FormatError),
    Lookup(LookupError),
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<FormatError> for ReadError {
    fn from(error: FormatError) -> Self {
        Self::Format(error)
    }
}

impl From<LookupError> for ReadError {
    fn from(error: LookupError) -> Self {
        Self::Lookup(error)
    }
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error: {}", e),
            Self::Format(e) => write!(f, "{}", e),
            Self::Lookup(e) => write!(f, "{}", e),
        }
    }
}

impl Debug for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
