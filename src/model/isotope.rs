use super::element::Element;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token used by reaction networks for the free neutron.
pub const NEUTRON: &str = "neut";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid isotope name '{name}': {reason}")]
pub struct ParseIsotopeError {
    name: String,
    reason: &'static str,
}

impl ParseIsotopeError {
    fn new(name: &str, reason: &'static str) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Neutron,
    Element(Element),
}

/// A nuclide identified by species and mass number.
///
/// Isotopes order by `(Z, A)` with the neutron first at `(0, 1)`, which is
/// the order reaction networks list them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isotope {
    pub species: Species,
    pub mass_number: u16,
}

impl Isotope {
    pub fn neutron() -> Self {
        Self {
            species: Species::Neutron,
            mass_number: 1,
        }
    }

    pub fn new(element: Element, mass_number: u16) -> Self {
        Self {
            species: Species::Element(element),
            mass_number,
        }
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        match self.species {
            Species::Neutron => 0,
            Species::Element(el) => el.atomic_number(),
        }
    }

    pub fn sort_key(&self) -> (u8, u16) {
        (self.atomic_number(), self.mass_number)
    }

    /// Network spelling: lower-case symbol followed by the mass number.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl Ord for Isotope {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Isotope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.species {
            Species::Neutron => f.write_str(NEUTRON),
            Species::Element(el) => {
                write!(f, "{}{}", el.symbol().to_ascii_lowercase(), self.mass_number)
            }
        }
    }
}

impl FromStr for Isotope {
    type Err = ParseIsotopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case(NEUTRON) {
            return Ok(Isotope::neutron());
        }

        let split = name
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| ParseIsotopeError::new(s, "missing mass number"))?;
        let (symbol, digits) = name.split_at(split);
        if symbol.is_empty() {
            return Err(ParseIsotopeError::new(s, "missing element symbol"));
        }

        let element = Element::from_symbol(symbol)
            .ok_or_else(|| ParseIsotopeError::new(s, "unknown element symbol"))?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIsotopeError::new(s, "mass number must be an integer"));
        }
        let mass_number = digits
            .parse::<u16>()
            .map_err(|_| ParseIsotopeError::new(s, "mass number out of range"))?;
        if mass_number == 0 {
            return Err(ParseIsotopeError::new(s, "mass number must be positive"));
        }

        Ok(Isotope::new(element, mass_number))
    }
}

/// Spelling used for an isotope field: the canonical token (`He4` becomes
/// `he4`) when the name parses as an [`Isotope`], the name as given
/// otherwise.
pub fn canonical_name(name: &str) -> String {
    name.parse::<Isotope>()
        .map(|iso| iso.name())
        .unwrap_or_else(|_| name.to_string())
}

/// Element part of an arbitrary isotope field name: its alphabetic
/// characters, lower-cased.
///
/// Works on names that do not parse as an [`Isotope`] (`al26-1` gives
/// `al`), so profile fields never need to be valid network tokens. The
/// neutron token is its own element key.
pub fn element_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(s: &str) -> Isotope {
        s.parse().expect("valid isotope")
    }

    #[test]
    fn parses_network_tokens() {
        assert_eq!(iso("h1"), Isotope::new(Element::H, 1));
        assert_eq!(iso("he4"), Isotope::new(Element::HE, 4));
        assert_eq!(iso("Fe56"), Isotope::new(Element::FE, 56));
        assert_eq!(iso("neut"), Isotope::neutron());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "h", "12", "xx4", "c12x", "c0", "al26-1", "c99999"] {
            assert!(bad.parse::<Isotope>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn error_names_the_token() {
        let err = "c".parse::<Isotope>().unwrap_err();
        assert_eq!(err.to_string(), "invalid isotope name 'c': missing mass number");
    }

    #[test]
    fn orders_by_atomic_then_mass_number() {
        let mut isos = vec![iso("o16"), iso("he4"), iso("c13"), iso("neut"), iso("c12"), iso("h1")];
        isos.sort();
        let names: Vec<String> = isos.iter().map(Isotope::name).collect();
        assert_eq!(names, ["neut", "h1", "he4", "c12", "c13", "o16"]);
    }

    #[test]
    fn display_uses_lower_case_symbol() {
        assert_eq!(Isotope::new(Element::FE, 56).to_string(), "fe56");
        assert_eq!(Isotope::neutron().to_string(), "neut");
    }

    #[test]
    fn element_key_strips_mass_numbers() {
        assert_eq!(element_key("c12"), "c");
        assert_eq!(element_key("He4"), "he");
        assert_eq!(canonical_name("He4"), "he4");
        assert_eq!(canonical_name("NEUT"), "neut");
        assert_eq!(canonical_name("al26-1"), "al26-1");
        assert_eq!(element_key("neut"), "neut");
        assert_eq!(element_key("al26-1"), "al");
    }
}
