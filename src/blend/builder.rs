use super::config::BlendConfig;
use super::error::Error;
use crate::model::profile::CompositionProfile;
use crate::model::sample::CompositionSample;
use crate::model::transition::Transition;
use tracing::debug;

pub fn build_profile(
    surface: &CompositionSample,
    transitions: &[Transition],
    config: &BlendConfig,
) -> Result<CompositionProfile, Error> {
    if !config.steepness.is_finite() || config.steepness < 0.0 {
        return Err(Error::InvalidSteepness(config.steepness));
    }
    let core = transitions.last().ok_or(Error::EmptyTransitions)?;

    for (index, transition) in transitions.iter().enumerate() {
        check_fields(index, surface, &transition.composition)?;
    }

    // Two rows per transition plus the surface and core rows.
    let mut rows: Vec<(f64, &[f64])> = Vec::with_capacity(2 * transitions.len() + 2);
    rows.push((0.0, surface.fractions()));

    let mut outer = surface;
    let mut previous: Option<f64> = None;
    for (index, transition) in transitions.iter().enumerate() {
        let xq0 = transition.xq;
        if !xq0.is_finite() || !(0.0..=1.0).contains(&xq0) {
            return Err(Error::invalid_transition(
                index,
                xq0,
                "coordinate must lie in [0, 1]",
            ));
        }

        // The transition's own width is not used for placement.
        let half_width = config.steepness * xq0;
        let (lower, upper) = (xq0 - half_width, xq0 + half_width);

        if let Some(prev_upper) = previous.filter(|&p| lower < p) {
            let prev_xq = transitions[index - 1].xq;
            debug!(index, lower, prev_upper, "transition rows overlap");
            return Err(Error::UnorderedTransitions {
                index,
                previous: prev_xq,
                current: xq0,
            });
        }
        if upper > 1.0 {
            return Err(Error::invalid_transition(
                index,
                xq0,
                "inner row would lie past the centre (xq = 1)",
            ));
        }

        debug!(index, xq0, lower, upper, "placing transition");
        rows.push((lower, outer.fractions()));
        rows.push((upper, transition.composition.fractions()));

        outer = &transition.composition;
        previous = Some(upper);
    }

    rows.push((1.0, core.composition.fractions()));

    Ok(CompositionProfile::from_rows(surface.isotopes(), rows)?)
}

fn check_fields(
    index: usize,
    surface: &CompositionSample,
    sample: &CompositionSample,
) -> Result<(), Error> {
    if surface.same_fields(sample) {
        return Ok(());
    }

    let detail = match surface
        .isotopes()
        .iter()
        .zip(sample.isotopes())
        .position(|(a, b)| a != b)
    {
        Some(pos) => format!(
            "field {} is '{}' but the surface has '{}'",
            pos,
            sample.isotopes()[pos],
            surface.isotopes()[pos]
        ),
        None => format!(
            "{} fields but the surface has {}",
            sample.len(),
            surface.len()
        ),
    };
    Err(Error::sample_mismatch(index, detail))
}
