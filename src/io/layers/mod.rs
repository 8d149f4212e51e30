//! Hand-written layer tables: one composition per row, keyed by the `xq`
//! where the layer begins.

mod reader;

pub use reader::{LayerTable, read};
