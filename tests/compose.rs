use std::fs;

use compo_forge::io::{NetLoader, read_layers, write_file};
use compo_forge::{
    BlendConfig, BlendError, CompositionSample, Network, Transition, build, build_with, resolve,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

fn sample(pairs: &[(&str, f64)]) -> CompositionSample {
    CompositionSample::from_pairs(pairs.iter().copied()).expect("sample")
}

#[test]
fn two_isotope_profile_round_trips_to_text() {
    let surface = sample(&[("h1", 0.7), ("he4", 0.3)]);
    let core = sample(&[("h1", 0.0), ("he4", 1.0)]);
    let profile = build(&surface, &[Transition::at(0.5, core)]).expect("build");
    let network = Network::new(["h1", "he4"]).expect("network");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("comp.data");
    let folds = write_file(&path, &profile, &network).expect("write");
    assert!(folds.is_empty());

    let text = fs::read_to_string(&path).expect("read back");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("4 2"));

    let rows: Vec<Vec<f64>> = lines
        .map(|line| line.split(' ').map(|v| v.parse().expect("number")).collect())
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], [0.0, 0.7, 0.3]);
    assert!(approx_eq(rows[1][0], 0.5 * (1.0 - 1e-6)));
    assert_eq!(&rows[1][1..], [0.7, 0.3]);
    assert!(approx_eq(rows[2][0], 0.5 * (1.0 + 1e-6)));
    assert_eq!(&rows[2][1..], [0.0, 1.0]);
    assert_eq!(rows[3], [1.0, 0.0, 1.0]);
}

#[test]
fn writing_overwrites_an_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("comp.data");
    fs::write(&path, "stale contents that are much longer than the new table\n".repeat(50))
        .expect("seed");

    let surface = sample(&[("he4", 1.0)]);
    let profile = build(&surface, &[Transition::at(0.2, surface.clone())]).expect("build");
    write_file(&path, &profile, &Network::new(["he4"]).unwrap()).expect("write");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("4 1\n"));
    assert!(!text.contains("stale"));
}

#[test]
fn carbon_outside_network_folds_into_helium() {
    let surface = sample(&[("h1", 0.7), ("he4", 0.29), ("c12", 0.01)]);
    let core = sample(&[("h1", 0.0), ("he4", 0.9), ("c12", 0.1)]);
    let profile = build(&surface, &[Transition::at(0.3, core)]).expect("build");
    let network = Network::new(["h1", "he4"]).expect("network");

    assert_eq!(resolve("c12", &network, &profile, true).unwrap(), "he4");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("comp.data");
    let folds = write_file(&path, &profile, &network).expect("write");
    assert_eq!(folds.len(), 1);
    assert_eq!((folds[0].isotope.as_str(), folds[0].alternate.as_str()), ("c12", "he4"));

    // Mass moves, it is not created or lost.
    let text = fs::read_to_string(&path).unwrap();
    for line in text.lines().skip(1) {
        let values: Vec<f64> = line.split(' ').map(|v| v.parse().unwrap()).collect();
        let total: f64 = values[1..].iter().sum();
        assert!(approx_eq(total, 1.0), "row {line} sums to {total}");
    }
}

#[test]
fn resolution_without_fallback_fails() {
    let surface = sample(&[("h1", 0.7), ("c12", 0.3)]);
    let profile = build(&surface, &[Transition::at(0.5, surface.clone())]).unwrap();
    let network = Network::new(["h1", "he4"]).unwrap();

    let err = resolve("c12", &network, &profile, false).unwrap_err();
    assert_eq!(err, BlendError::UnresolvableIsotope("c12".into()));
}

#[test]
fn width_never_moves_the_straddling_rows() {
    let surface = sample(&[("h1", 1.0)]);
    let config = BlendConfig { steepness: 1e-3 };
    let narrow = build_with(&surface, &[Transition::new(0.4, 0.0, surface.clone())], &config);
    let wide = build_with(&surface, &[Transition::new(0.4, 0.2, surface.clone())], &config);
    assert_eq!(narrow.unwrap().xq(), wide.unwrap().xq());
}

#[test]
fn network_files_and_layer_tables_feed_the_builder() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("tiny.net"),
        "! tiny network\nadd_isos(\n  h1\n  he4\n  c 12 13\n  o16\n)\n",
    )
    .unwrap();

    let network = NetLoader::new([dir.path()]).load("tiny").expect("net");
    assert_eq!(network.isotopes(), ["h1", "he4", "c12", "c13", "o16"]);

    let table = "xq,h1,he4,c12,o16\n0.1,0.7,0.3,0,0\n0.6,0,1,0,0\n1.0,0,0,0.6,0.4\n";
    let layers = read_layers(table.as_bytes(), &network, true).expect("layers");
    let (surface, transitions) = layers.into_transitions().expect("split");
    let profile = build(&surface, &transitions).expect("build");

    assert_eq!(profile.row_count(), 6);
    assert_eq!(profile.isotope_count(), network.len());
    assert_eq!(profile.column("o16").unwrap()[5], 0.4);
}
