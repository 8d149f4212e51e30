/// Default relative steepness of transitions.
pub const DEFAULT_STEEPNESS: f64 = 1e-6;

/// Configuration for profile construction.
///
/// # Examples
///
/// ```
/// use compo_forge::BlendConfig;
///
/// let sharp = BlendConfig::default();
/// assert_eq!(sharp.steepness, 1e-6);
///
/// let soft = BlendConfig { steepness: 1e-3 };
/// assert!(soft.steepness > sharp.steepness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendConfig {
    /// Half-width of every transition relative to its coordinate.
    ///
    /// A transition at `xq0` is straddled by rows at
    /// `xq0 × (1 − steepness)` and `xq0 × (1 + steepness)`, narrow enough to
    /// act as a step once the solver interpolates linearly between rows.
    pub steepness: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            steepness: DEFAULT_STEEPNESS,
        }
    }
}
