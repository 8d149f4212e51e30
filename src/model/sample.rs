use super::error::Error;
use super::isotope::canonical_name;
use std::collections::HashSet;

/// Mass fractions for a fixed, ordered set of isotope fields.
///
/// A sample is a single row of composition, typically taken from one zone
/// of a stellar model. Field order is significant: samples that feed the
/// same profile must agree on both the set and the order of their fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionSample {
    isotopes: Vec<String>,
    fractions: Vec<f64>,
}

impl CompositionSample {
    /// Creates a sample from parallel name and value vectors.
    ///
    /// Names that parse as isotopes are stored in canonical spelling, so
    /// `He4` and `he4` are the same field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the vectors differ in length and
    /// [`Error::DuplicateIsotope`] if a name repeats.
    pub fn new(isotopes: Vec<String>, fractions: Vec<f64>) -> Result<Self, Error> {
        let isotopes: Vec<String> = isotopes.iter().map(|name| canonical_name(name)).collect();
        if isotopes.len() != fractions.len() {
            return Err(Error::length_mismatch(
                "sample fractions",
                isotopes.len(),
                fractions.len(),
            ));
        }
        let mut seen = HashSet::with_capacity(isotopes.len());
        for name in &isotopes {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateIsotope(name.clone()));
            }
        }
        Ok(Self {
            isotopes,
            fractions,
        })
    }

    /// Creates a sample from `(isotope, mass fraction)` pairs, keeping their
    /// order.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (isotopes, fractions) = pairs
            .into_iter()
            .map(|(name, x)| (name.into(), x))
            .unzip();
        Self::new(isotopes, fractions)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.isotopes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty()
    }

    pub fn isotopes(&self) -> &[String] {
        &self.isotopes
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn get(&self, isotope: &str) -> Option<f64> {
        self.isotopes
            .iter()
            .position(|name| name == isotope)
            .map(|idx| self.fractions[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.isotopes
            .iter()
            .map(String::as_str)
            .zip(self.fractions.iter().copied())
    }

    /// Sum of all mass fractions.
    pub fn total(&self) -> f64 {
        self.fractions.iter().sum()
    }

    /// Returns `true` if both samples list the same isotopes in the same
    /// order.
    pub fn same_fields(&self, other: &CompositionSample) -> bool {
        self.isotopes == other.isotopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_keeps_order() {
        let sample = CompositionSample::from_pairs([("he4", 0.3), ("h1", 0.7)]).unwrap();
        assert_eq!(sample.isotopes(), ["he4", "h1"]);
        assert_eq!(sample.fractions(), [0.3, 0.7]);
        assert_eq!(sample.get("h1"), Some(0.7));
        assert_eq!(sample.get("c12"), None);
        assert!((sample.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = CompositionSample::new(vec!["h1".into()], vec![0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 1,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_isotopes() {
        let err = CompositionSample::from_pairs([("h1", 0.5), ("h1", 0.5)]).unwrap_err();
        assert_eq!(err, Error::DuplicateIsotope("h1".into()));
    }

    #[test]
    fn isotope_names_take_canonical_spelling() {
        let sample = CompositionSample::from_pairs([("H1", 0.7), ("He4", 0.3), ("al26-1", 0.0)])
            .unwrap();
        assert_eq!(sample.isotopes(), ["h1", "he4", "al26-1"]);

        let err = CompositionSample::from_pairs([("he4", 0.5), ("HE4", 0.5)]).unwrap_err();
        assert_eq!(err, Error::DuplicateIsotope("he4".into()));
    }

    #[test]
    fn same_fields_is_order_sensitive() {
        let a = CompositionSample::from_pairs([("h1", 0.7), ("he4", 0.3)]).unwrap();
        let b = CompositionSample::from_pairs([("h1", 0.0), ("he4", 1.0)]).unwrap();
        let c = CompositionSample::from_pairs([("he4", 0.3), ("h1", 0.7)]).unwrap();
        assert!(a.same_fields(&b));
        assert!(!a.same_fields(&c));
    }
}
