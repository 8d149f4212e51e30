//! Blended composition profiles for relaxing stellar models.
//!
//! A profile describes how isotope mass fractions change with the exterior
//! mass coordinate `xq` (0 at the surface, 1 at the centre). It is built
//! from a surface composition and a list of sharp transitions, reconciled
//! with the isotopes a reaction network tracks, and written as the plain
//! text table the MESA relax-composition step reads.
//!
//! # Features
//!
//! - **Profile building**: every transition becomes a pair of rows that
//!   straddle it within a relative half-width, so linear interpolation
//!   reproduces a step
//! - **Isotope folding**: isotopes the network does not track are merged
//!   into the closest tracked isotope, preferring the same element
//! - **Network files**: isotope lists read from `.net` files, with includes
//! - **Composition files**: the solver's exact numeric layout
//!
//! # Quick Start
//!
//! ```
//! use compo_forge::{CompositionSample, Network, Transition, build, io};
//!
//! let surface = CompositionSample::from_pairs([("h1", 0.7), ("he4", 0.3)])?;
//! let core = CompositionSample::from_pairs([("h1", 0.0), ("he4", 1.0)])?;
//!
//! // Hydrogen envelope down to xq = 0.5, helium below.
//! let profile = build(&surface, &[Transition::at(0.5, core)])?;
//! assert_eq!(profile.row_count(), 4);
//! assert_eq!(profile.xq()[0], 0.0);
//! assert_eq!(profile.xq()[3], 1.0);
//!
//! let network = Network::new(["h1", "he4", "c12"])?;
//! let rendered = io::render(&profile, &network)?;
//! assert!(rendered.text.starts_with("4 3\n"));
//! assert!(rendered.folds.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: network, layer table and composition files
//! - [`build`] / [`build_with`]: profile construction
//! - [`resolve`] / [`fold_into_network`]: reconciling a profile with a network
//!
//! # Data Types
//!
//! - [`CompositionSample`]: one row of mass fractions over ordered fields
//! - [`Transition`]: where the composition changes and to what
//! - [`CompositionProfile`]: the `xq` column plus one column per isotope
//! - [`Network`]: the ordered isotopes a reaction network tracks
//! - [`Isotope`] / [`Element`]: parsed isotope tokens such as `c12`
//! - [`Fold`]: a record of one isotope merged into another

mod blend;
mod model;

pub mod io;

pub use model::element::{Element, ParseElementError};
pub use model::isotope::{Isotope, NEUTRON, ParseIsotopeError, Species, element_key};
pub use model::network::Network;
pub use model::profile::CompositionProfile;
pub use model::sample::CompositionSample;
pub use model::transition::Transition;

pub use blend::{
    BlendConfig, DEFAULT_STEEPNESS, Fold, build, build_with, fold_into_network, resolve,
};

pub use blend::Error as BlendError;
pub use model::error::Error as ModelError;
