//! Isotope lists from MESA reaction network (`.net`) files.
//!
//! Only the statements that name isotopes are interpreted: `add_isos`
//! blocks and their inline forms, `add_iso` and `include`. Reactions and
//! other settings are skipped.

mod loader;
mod reader;

pub use loader::NetLoader;
pub use reader::{NetEntry, read};
