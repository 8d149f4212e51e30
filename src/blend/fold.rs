use super::error::Error;
use super::resolver::resolve_alternate;
use crate::model::error::Error as ModelError;
use crate::model::network::Network;
use crate::model::profile::CompositionProfile;
use tracing::info;

/// Record of one isotope folded into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Profile isotope absent from the network.
    pub isotope: String,
    /// Isotope that received its mass fractions.
    pub alternate: String,
    /// `true` if the alternate column did not exist and was created.
    pub created: bool,
}

pub fn fold_profile(profile: &mut CompositionProfile, network: &Network) -> Result<Vec<Fold>, Error> {
    // Columns created below are network members, so only the original
    // fields can need folding.
    let missing: Vec<String> = profile
        .isotopes()
        .filter(|name| !network.contains(name))
        .map(str::to_string)
        .collect();

    let mut folds = Vec::with_capacity(missing.len());
    for isotope in missing {
        let alternate = resolve_alternate(&isotope, network, profile, true)?;

        let created = !profile.contains(&alternate);
        if created {
            let values = profile
                .column(&isotope)
                .map(<[f64]>::to_vec)
                .ok_or_else(|| ModelError::UnknownColumn(isotope.clone()))?;
            profile.add_column(alternate.clone(), values)?;
        } else {
            profile.accumulate_into(&alternate, &isotope)?;
        }

        info!(%isotope, %alternate, created, "folded isotope outside network");
        folds.push(Fold {
            isotope,
            alternate,
            created,
        });
    }

    Ok(folds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(isotopes: &[&str]) -> Network {
        Network::new(isotopes).expect("network")
    }

    fn base_profile() -> CompositionProfile {
        CompositionProfile::from_columns(
            vec![0.0, 0.5, 0.5, 1.0],
            [
                ("h1", vec![0.7, 0.7, 0.0, 0.0]),
                ("he4", vec![0.29, 0.29, 0.98, 0.98]),
                ("c12", vec![0.01, 0.01, 0.02, 0.02]),
            ],
        )
        .expect("profile")
    }

    #[test]
    fn folds_missing_isotope_into_fallback() {
        let original = base_profile();
        let mut profile = original.clone();
        let folds = fold_profile(&mut profile, &network(&["h1", "he4"])).unwrap();

        assert_eq!(
            folds,
            [Fold {
                isotope: "c12".into(),
                alternate: "he4".into(),
                created: false
            }]
        );
        let he4 = profile.column("he4").unwrap();
        let before_he4 = original.column("he4").unwrap();
        let c12 = original.column("c12").unwrap();
        for row in 0..profile.row_count() {
            assert_eq!(he4[row], before_he4[row] + c12[row]);
        }
    }

    #[test]
    fn creates_alternate_column_when_absent() {
        let mut profile = base_profile();
        let folds = fold_profile(&mut profile, &network(&["h1", "he4", "o16"])).unwrap();

        assert_eq!(folds.len(), 1);
        assert_eq!(folds[0].alternate, "o16");
        assert!(folds[0].created);
        assert_eq!(profile.column("o16"), Some(&[0.01, 0.01, 0.02, 0.02][..]));
        assert_eq!(profile.isotopes().last(), Some("o16"));
    }

    #[test]
    fn later_folds_compound_onto_same_target() {
        let mut profile = base_profile();
        profile.add_column("n14", vec![0.1, 0.1, 0.1, 0.1]).unwrap();
        let folds = fold_profile(&mut profile, &network(&["h1", "he4", "o16"])).unwrap();

        assert_eq!(folds.len(), 2);
        assert!(folds[0].created);
        assert!(!folds[1].created);
        let o16 = profile.column("o16").unwrap();
        assert!((o16[0] - 0.11).abs() < 1e-12);
        assert!((o16[3] - 0.12).abs() < 1e-12);
    }

    #[test]
    fn network_members_are_untouched() {
        let original = base_profile();
        let mut profile = original.clone();
        let folds = fold_profile(&mut profile, &network(&["h1", "he4", "c12"])).unwrap();
        assert!(folds.is_empty());
        assert_eq!(profile, original);
    }
}
