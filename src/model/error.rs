use super::isotope::ParseIsotopeError;
use thiserror::Error;

/// Violations of the composition data model's structural invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An isotope name appears twice in a sample, profile or network.
    #[error("isotope '{0}' appears more than once")]
    DuplicateIsotope(String),

    /// A column or sample has the wrong number of values.
    #[error("'{name}' has {found} values but {expected} are required")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A profile operation referenced a column that does not exist.
    #[error("no column named '{0}' in the composition profile")]
    UnknownColumn(String),

    /// A network entry is not a valid isotope token.
    #[error(transparent)]
    InvalidIsotope(#[from] ParseIsotopeError),

    /// Network entries are not in ascending `(Z, A)` order.
    #[error("network is not sorted by (Z, A): '{previous}' precedes '{next}'")]
    UnsortedNetwork { previous: String, next: String },
}

impl Error {
    pub fn length_mismatch(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            name: name.into(),
            expected,
            found,
        }
    }
}
