//! Error kinds raised by the tracing engine itself, as opposed to its
//! collaborators (container loading, emission, verification -- see
//! `crate::cli::Error` for those). Recoverable kinds are logged and
//! absorbed by the component that raises them; fatal kinds propagate out
//! of construction or finalisation.

use std::{error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A worklist entry or vector pointed outside the PRG image.
    /// Recoverable: the entry is dropped and tracing continues.
    OutOfRangeAddress(u32),
    /// The static instruction catalogue is inconsistent. Fatal.
    MalformedInstructionTable(&'static str),
    /// Two catalogues assigned conflicting names to the same address. Fatal.
    DuplicateSymbol(u16),
    /// The code/data log's shape doesn't match the PRG image. Recoverable:
    /// tracing proceeds without hints.
    CodeDataLogShape(&'static str),
    /// An internal invariant was violated (e.g. demotion on re-entry
    /// couldn't find the owning instruction). Fatal: indicates a bug.
    InternalInvariant(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRangeAddress(addr) => write!(f, "address {addr:#06x} is out of range"),
            Self::MalformedInstructionTable(why) => {
                write!(f, "malformed instruction table: {why}")
            }
            Self::DuplicateSymbol(addr) => {
                write!(f, "duplicate symbol at address {addr:#06x}")
            }
            Self::CodeDataLogShape(why) => write!(f, "code/data log shape mismatch: {why}"),
            Self::InternalInvariant(why) => write!(f, "internal invariant violated: {why}"),
        }
    }
}

impl error::Error for Error {}

impl Error {
    /// Whether the caller should log this and keep tracing rather than abort.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfRangeAddress(_) | Self::CodeDataLogShape(_))
    }
}
