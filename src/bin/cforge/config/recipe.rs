use anyhow::{Context, Result, bail};
use serde::Deserialize;

use compo_forge::{CompositionSample, Transition};

/// A blend described in TOML: the isotope fields shared by every sample,
/// the surface composition and the transitions below it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub isotopes: Vec<String>,
    #[serde(default)]
    pub steepness: Option<f64>,
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    pub surface: Layer,
    #[serde(default, rename = "transition")]
    pub transitions: Vec<TransitionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    pub fractions: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionEntry {
    pub xq: f64,
    #[serde(default)]
    pub width: f64,
    pub fractions: Vec<f64>,
}

impl Recipe {
    pub fn parse(text: &str) -> Result<Self> {
        let recipe: Recipe = toml::from_str(text).context("Invalid recipe")?;
        if recipe.isotopes.is_empty() {
            bail!("Recipe lists no isotopes");
        }
        Ok(recipe)
    }

    pub fn surface(&self) -> Result<CompositionSample> {
        self.sample(&self.surface.fractions)
            .context("Invalid [surface] composition")
    }

    pub fn transitions(&self) -> Result<Vec<Transition>> {
        self.transitions
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let sample = self
                    .sample(&entry.fractions)
                    .with_context(|| format!("Invalid composition in [[transition]] {}", i + 1))?;
                Ok(Transition::new(entry.xq, entry.width, sample))
            })
            .collect()
    }

    fn sample(&self, fractions: &[f64]) -> Result<CompositionSample> {
        Ok(CompositionSample::new(
            self.isotopes.clone(),
            fractions.to_vec(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE: &str = r#"
isotopes = ["h1", "he4", "c12", "o16"]
steepness = 1e-5
net = "co_burn.net"

[surface]
fractions = [0.7, 0.28, 0.01, 0.01]

[[transition]]
xq = 0.01
width = 0.002
fractions = [0.0, 0.98, 0.01, 0.01]

[[transition]]
xq = 0.3
fractions = [0.0, 0.0, 0.5, 0.5]
"#;

    #[test]
    fn parses_full_recipe() {
        let recipe = Recipe::parse(RECIPE).expect("parse");
        assert_eq!(recipe.steepness, Some(1e-5));
        assert_eq!(recipe.net.as_deref(), Some("co_burn.net"));
        assert!(recipe.output.is_none());

        let surface = recipe.surface().expect("surface");
        assert_eq!(surface.get("he4"), Some(0.28));

        let transitions = recipe.transitions().expect("transitions");
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].width, 0.002);
        assert_eq!(transitions[1].width, 0.0);
        assert_eq!(transitions[1].composition.get("o16"), Some(0.5));
    }

    #[test]
    fn fraction_count_must_match_isotopes() {
        let text = r#"
isotopes = ["h1", "he4"]
[surface]
fractions = [1.0]
"#;
        let recipe = Recipe::parse(text).expect("parse");
        let err = recipe.surface().unwrap_err();
        assert!(format!("{err:#}").contains("[surface]"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = r#"
isotopes = ["h1"]
steepnes = 1e-6
[surface]
fractions = [1.0]
"#;
        assert!(Recipe::parse(text).is_err());
    }

    #[test]
    fn empty_isotope_list_is_rejected() {
        let text = "isotopes = []\n[surface]\nfractions = []\n";
        assert!(Recipe::parse(text).is_err());
    }
}
