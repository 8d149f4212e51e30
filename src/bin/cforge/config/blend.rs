use compo_forge::BlendConfig;

/// Command-line steepness wins over the recipe's, which wins over the
/// library default.
pub fn build_blend_config(flag: Option<f64>, recipe: Option<f64>) -> BlendConfig {
    flag.or(recipe)
        .map(|steepness| BlendConfig { steepness })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use compo_forge::DEFAULT_STEEPNESS;

    #[test]
    fn flag_overrides_recipe() {
        assert_eq!(build_blend_config(Some(1e-3), Some(1e-4)).steepness, 1e-3);
        assert_eq!(build_blend_config(None, Some(1e-4)).steepness, 1e-4);
        assert_eq!(build_blend_config(None, None).steepness, DEFAULT_STEEPNESS);
    }
}
