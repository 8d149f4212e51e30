//! Reading and writing the files around a composition profile.
//!
//! - [`composition`] – the solver's composition table (write only)
//! - [`net`] – isotope lists from reaction network definition files
//! - [`layers`] – hand-written tables of compositions at chosen `xq`

use std::fmt;

pub mod composition;
pub mod error;
pub mod layers;
pub mod net;

pub use composition::{Rendered, render, write as write_composition, write_file};
pub use error::Error;
pub use layers::{LayerTable, read as read_layers};
pub use net::{NetEntry, NetLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Composition,
    Net,
    Layers,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Composition => write!(f, "composition"),
            Format::Net => write!(f, "network"),
            Format::Layers => write!(f, "layer table"),
        }
    }
}
