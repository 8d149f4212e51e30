mod builder;
mod config;
mod error;
mod fold;
mod resolver;

pub use config::{BlendConfig, DEFAULT_STEEPNESS};
pub use error::Error;
pub use fold::Fold;

use crate::model::network::Network;
use crate::model::profile::CompositionProfile;
use crate::model::sample::CompositionSample;
use crate::model::transition::Transition;

/// Builds a blended profile with the default steepness.
///
/// See [`build_with`].
pub fn build(
    surface: &CompositionSample,
    transitions: &[Transition],
) -> Result<CompositionProfile, Error> {
    build_with(surface, transitions, &BlendConfig::default())
}

/// Builds a blended composition profile from a surface sample and
/// transitions ordered from the surface inward.
///
/// The profile has `2 × transitions.len() + 2` rows: the surface at
/// `xq = 0`, two rows straddling each transition at
/// `xq0 × (1 ∓ steepness)` (outer row with the previous composition, inner
/// row with the transition's), and the last transition's composition at
/// `xq = 1`.
///
/// # Errors
///
/// Fails without building anything if `transitions` is empty, a coordinate
/// lies outside `[0, 1]`, coordinates are not increasing, a sample's
/// isotope fields differ from the surface's, or the steepness is invalid.
pub fn build_with(
    surface: &CompositionSample,
    transitions: &[Transition],
    config: &BlendConfig,
) -> Result<CompositionProfile, Error> {
    builder::build_profile(surface, transitions, config)
}

/// Chooses the network isotope that should absorb `isotope`.
///
/// Prefers network isotopes of the same element present in the profile,
/// picking the one with the largest integrated mass (first in field order
/// on ties). Otherwise, with `use_fallback`, picks an isotope of the
/// network's heaviest element: the most massive such profile field, or the
/// network's last isotope if the profile has none.
///
/// # Errors
///
/// Returns [`Error::UnresolvableIsotope`] if no candidate exists and
/// `use_fallback` is `false` (or the network is empty).
pub fn resolve(
    isotope: &str,
    network: &Network,
    profile: &CompositionProfile,
    use_fallback: bool,
) -> Result<String, Error> {
    resolver::resolve_alternate(isotope, network, profile, use_fallback)
}

/// Folds every profile isotope outside `network` into a resolved
/// alternate, in field order, and returns what was folded where.
///
/// Resolution runs against the partially folded profile, so later folds
/// see mass accumulated by earlier ones.
pub fn fold_into_network(
    profile: &mut CompositionProfile,
    network: &Network,
) -> Result<Vec<Fold>, Error> {
    fold::fold_profile(profile, network)
}
