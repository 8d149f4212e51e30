use super::error::Error;
use crate::model::isotope::element_key;
use crate::model::network::Network;
use crate::model::profile::CompositionProfile;
use tracing::debug;

pub fn resolve_alternate(
    isotope: &str,
    network: &Network,
    profile: &CompositionProfile,
    use_fallback: bool,
) -> Result<String, Error> {
    let element = element_key(isotope);

    let candidates: Vec<&str> = profile
        .isotopes()
        .filter(|name| element_key(name) == element && network.contains(name))
        .collect();
    if let Some(best) = most_massive(profile, &candidates) {
        debug!(isotope, alternate = best, "resolved to same-element isotope");
        return Ok(best.to_string());
    }

    if !use_fallback {
        return Err(Error::UnresolvableIsotope(isotope.to_string()));
    }

    // Network order is (Z, A), so the last entry belongs to the heaviest element.
    let heaviest = network
        .heaviest()
        .ok_or_else(|| Error::UnresolvableIsotope(isotope.to_string()))?;
    let fallback_element = element_key(heaviest);

    let fallbacks: Vec<&str> = profile
        .isotopes()
        .filter(|name| element_key(name) == fallback_element)
        .collect();
    let alternate = match fallbacks.as_slice() {
        [] => heaviest,
        [only] => *only,
        _ => most_massive(profile, &fallbacks).unwrap_or(heaviest),
    };

    debug!(isotope, alternate, "resolved via heaviest-element fallback");
    Ok(alternate.to_string())
}

/// Candidate with the largest integrated mass; the first one wins ties.
///
/// A NaN mass outranks every number, and the first NaN candidate wins.
fn most_massive<'a>(profile: &CompositionProfile, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for &name in candidates {
        let mass = profile.total_mass(name).unwrap_or(0.0);
        let replace = match best {
            None => true,
            Some((_, best_mass)) => !best_mass.is_nan() && (mass.is_nan() || mass > best_mass),
        };
        if replace {
            best = Some((name, mass));
        }
    }
    best.map(|(name, _)| name)
}
