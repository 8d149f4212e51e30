use super::sample::CompositionSample;

/// A composition jump at an exterior mass coordinate.
///
/// Inward of `xq` the profile carries `composition`; outward of it, the
/// composition of the previous transition (or the surface).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Exterior fractional mass coordinate of the jump.
    pub xq: f64,
    /// Nominal width of the jump in `xq`.
    ///
    /// Kept for callers that track it, but the profile builder places the
    /// straddling rows from its steepness setting instead.
    pub width: f64,
    /// Composition inward of the jump.
    pub composition: CompositionSample,
}

impl Transition {
    pub fn new(xq: f64, width: f64, composition: CompositionSample) -> Self {
        Self {
            xq,
            width,
            composition,
        }
    }

    /// A transition with zero nominal width.
    pub fn at(xq: f64, composition: CompositionSample) -> Self {
        Self::new(xq, 0.0, composition)
    }
}
