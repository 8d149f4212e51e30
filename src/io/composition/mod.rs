//! The stellar-structure solver's composition table.
//!
//! ```text
//! <rows> <isotopes>
//! <xq, %.15e> <X_1, %.8e> ... <X_k, %.8e>
//! ```
//!
//! Columns follow the network's order. Profile isotopes outside the network
//! are folded into a resolved alternate first, network isotopes the profile
//! lacks are written as `0.00000000e+00`, and the text carries no trailing
//! newline.

mod writer;

pub use writer::{Rendered, render, write, write_file};
