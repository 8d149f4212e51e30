use super::error::Error;
use super::isotope::{Isotope, canonical_name};
use std::collections::{BTreeSet, HashSet};

/// The ordered isotope list a reaction network tracks.
///
/// # Contract
///
/// Every entry is a valid isotope token, no entry repeats, and entries are
/// in ascending `(Z, A)` order. The last entry is therefore an isotope of
/// the heaviest element in the network; the isotope resolver's fallback
/// relies on this. [`Network::new`] checks the contract,
/// [`Network::from_unsorted`] establishes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Network {
    isotopes: Vec<String>,
    members: HashSet<String>,
}

impl Network {
    /// Wraps an already ordered isotope list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIsotope`] for an unparseable name,
    /// [`Error::DuplicateIsotope`] for a repeated one and
    /// [`Error::UnsortedNetwork`] if the list is not in `(Z, A)` order.
    pub fn new<I, S>(isotopes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut members = HashSet::new();
        let mut previous: Option<Isotope> = None;

        for raw in isotopes {
            let isotope: Isotope = raw.as_ref().parse()?;
            let name = isotope.name();
            if !members.insert(name.clone()) {
                return Err(Error::DuplicateIsotope(name));
            }
            if let Some(prev) = previous.filter(|p| *p > isotope) {
                return Err(Error::UnsortedNetwork {
                    previous: prev.name(),
                    next: name,
                });
            }
            previous = Some(isotope);
            names.push(name);
        }

        Ok(Self {
            isotopes: names,
            members,
        })
    }

    /// Builds a network from isotopes in any order, dropping duplicates and
    /// sorting by `(Z, A)`.
    pub fn from_unsorted<I, S>(isotopes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique = isotopes
            .into_iter()
            .map(|raw| raw.as_ref().parse::<Isotope>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let isotopes: Vec<String> = unique.iter().map(Isotope::name).collect();
        let members = isotopes.iter().cloned().collect();
        Ok(Self { isotopes, members })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.isotopes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty()
    }

    /// Membership by canonical spelling, so `He4` is found as `he4`.
    pub fn contains(&self, isotope: &str) -> bool {
        self.members.contains(isotope) || self.members.contains(&canonical_name(isotope))
    }

    pub fn isotopes(&self) -> &[String] {
        &self.isotopes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.isotopes.iter().map(String::as_str)
    }

    /// The last entry: the heaviest isotope of the highest-Z element.
    pub fn heaviest(&self) -> Option<&str> {
        self.isotopes.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_sorted_list() {
        let net = Network::new(["neut", "h1", "he4", "c12", "c13", "o16"]).unwrap();
        assert_eq!(net.len(), 6);
        assert!(net.contains("c13"));
        assert!(!net.contains("n14"));
        assert_eq!(net.heaviest(), Some("o16"));
    }

    #[test]
    fn new_normalises_spelling() {
        let net = Network::new(["H1", "He4"]).unwrap();
        assert_eq!(net.isotopes(), ["h1", "he4"]);
        assert!(net.contains("he4"));
        assert!(net.contains("H1"));
        assert!(net.contains("HE4"));
        assert!(!net.contains("He3"));
    }

    #[test]
    fn new_rejects_unsorted_list() {
        let err = Network::new(["h1", "c12", "he4"]).unwrap_err();
        assert_eq!(
            err,
            Error::UnsortedNetwork {
                previous: "c12".into(),
                next: "he4".into()
            }
        );
    }

    #[test]
    fn new_rejects_duplicates_and_bad_names() {
        assert_eq!(
            Network::new(["h1", "h1"]).unwrap_err(),
            Error::DuplicateIsotope("h1".into())
        );
        assert!(matches!(
            Network::new(["h1", "zz9"]).unwrap_err(),
            Error::InvalidIsotope(_)
        ));
    }

    #[test]
    fn from_unsorted_sorts_and_dedups() {
        let net = Network::from_unsorted(["o16", "he4", "h1", "c12", "he4", "neut"]).unwrap();
        assert_eq!(net.isotopes(), ["neut", "h1", "he4", "c12", "o16"]);
        assert_eq!(net.heaviest(), Some("o16"));
    }

    #[test]
    fn empty_network_has_no_heaviest() {
        let net = Network::new(Vec::<String>::new()).unwrap();
        assert!(net.is_empty());
        assert_eq!(net.heaviest(), None);
    }
}
