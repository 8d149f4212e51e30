use crate::io::{Format, error::Error};
use crate::model::isotope::canonical_name;
use crate::model::network::Network;
use crate::model::sample::CompositionSample;
use crate::model::transition::Transition;
use std::collections::HashSet;
use std::io::BufRead;
use tracing::debug;

const XQ_COLUMN: &str = "xq";

/// Layers read from a table, each sample laid out in network order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerTable {
    pub xq: Vec<f64>,
    pub samples: Vec<CompositionSample>,
    /// Table columns that are not network isotopes, in header order.
    pub ignored: Vec<String>,
}

impl LayerTable {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Splits the table into a surface sample and one sharp transition per
    /// following row. Transition `i` sits at the `xq` of row `i` and carries
    /// the composition of row `i + 1`.
    pub fn into_transitions(self) -> Result<(CompositionSample, Vec<Transition>), Error> {
        if self.samples.len() < 2 {
            return Err(Error::TooFewLayers(self.samples.len()));
        }

        let mut samples = self.samples.into_iter();
        let Some(surface) = samples.next() else {
            return Err(Error::TooFewLayers(0));
        };
        let transitions = self
            .xq
            .into_iter()
            .zip(samples)
            .map(|(xq, sample)| Transition::at(xq, sample))
            .collect();
        Ok((surface, transitions))
    }
}

/// A table column that feeds a network isotope.
struct Mapped {
    column: usize,
    slot: usize,
}

/// Reads a comma-separated layer table whose header names `xq` and any
/// number of isotope columns.
///
/// Isotope headers are matched against the network by canonical name, so
/// `He4` feeds `he4`. With `normalize`, each row is scaled so that its
/// network isotopes sum to one (rows summing to zero are left alone).
pub fn read<R: BufRead>(
    reader: R,
    network: &Network,
    normalize: bool,
) -> Result<LayerTable, Error> {
    let mut header: Option<(usize, Vec<Mapped>)> = None;
    let mut columns = 0;
    let mut table = LayerTable::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let Some((xq_column, mapped)) = &header else {
            columns = fields.len();
            header = Some(parse_header(&fields, network, line_no, &mut table.ignored)?);
            continue;
        };

        if fields.len() != columns {
            return Err(Error::parse(
                Format::Layers,
                line_no,
                format!("expected {columns} fields, found {}", fields.len()),
            ));
        }

        let number = |column: usize| -> Result<f64, Error> {
            fields[column].parse::<f64>().map_err(|_| {
                Error::parse(
                    Format::Layers,
                    line_no,
                    format!("'{}' is not a number", fields[column]),
                )
            })
        };

        let xq = number(*xq_column)?;
        let mut fractions = vec![0.0; network.len()];
        for m in mapped {
            fractions[m.slot] = number(m.column)?;
        }

        if normalize {
            let total: f64 = mapped.iter().map(|m| fractions[m.slot]).sum();
            if total > 0.0 {
                fractions.iter_mut().for_each(|x| *x /= total);
            }
        }

        table.xq.push(xq);
        table
            .samples
            .push(CompositionSample::new(network.isotopes().to_vec(), fractions)?);
    }

    if header.is_none() {
        return Err(Error::parse(Format::Layers, 0, "missing header line"));
    }

    debug!(
        layers = table.len(),
        ignored = table.ignored.len(),
        "read layer table"
    );
    Ok(table)
}

fn parse_header(
    fields: &[&str],
    network: &Network,
    line_no: usize,
    ignored: &mut Vec<String>,
) -> Result<(usize, Vec<Mapped>), Error> {
    let mut xq_column = None;
    let mut mapped = Vec::new();
    let mut seen = HashSet::new();

    for (column, &raw) in fields.iter().enumerate() {
        if raw.eq_ignore_ascii_case(XQ_COLUMN) {
            if xq_column.replace(column).is_some() {
                return Err(Error::parse(Format::Layers, line_no, "duplicate 'xq' column"));
            }
            continue;
        }

        let name = canonical_name(raw);
        if !seen.insert(name.clone()) {
            return Err(Error::parse(
                Format::Layers,
                line_no,
                format!("duplicate column '{raw}'"),
            ));
        }

        match network.isotopes().iter().position(|iso| *iso == name) {
            Some(slot) => mapped.push(Mapped { column, slot }),
            None => ignored.push(raw.to_string()),
        }
    }

    let xq_column = xq_column
        .ok_or_else(|| Error::parse(Format::Layers, line_no, "header has no 'xq' column"))?;
    Ok((xq_column, mapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Network {
        Network::new(["h1", "he4", "c12", "o16"]).expect("network")
    }

    const TABLE: &str = "\
# xq where each layer begins
xq, h1, He4, c12, fe56
0.02, 0.7, 0.3, 0.0, 0.0
0.5,  0.0, 0.9, 0.1, 0.0
0.0,  0.0, 0.0, 0.5, 0.5
";

    #[test]
    fn lays_samples_out_in_network_order() {
        let table = read(TABLE.as_bytes(), &network(), false).expect("read");
        assert_eq!(table.len(), 3);
        assert_eq!(table.xq, [0.02, 0.5, 0.0]);
        assert_eq!(table.ignored, ["fe56"]);
        for sample in &table.samples {
            assert_eq!(sample.isotopes(), network().isotopes());
        }
        assert_eq!(table.samples[1].fractions(), [0.0, 0.9, 0.1, 0.0]);
        assert_eq!(table.samples[2].get("o16"), Some(0.0));
    }

    #[test]
    fn normalizes_over_provided_network_isotopes() {
        let table = read(TABLE.as_bytes(), &network(), true).expect("read");
        let last = &table.samples[2];
        assert_eq!(last.get("c12"), Some(1.0));
        assert!((table.samples[0].total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_zero_rows_are_left_alone_when_normalizing() {
        let text = "xq,h1,he4\n0.1,0,0\n";
        let table = read(text.as_bytes(), &network(), true).expect("read");
        assert_eq!(table.samples[0].total(), 0.0);
    }

    #[test]
    fn rows_become_surface_and_transitions() {
        let table = read(TABLE.as_bytes(), &network(), false).expect("read");
        let (surface, transitions) = table.into_transitions().expect("split");
        assert_eq!(surface.get("h1"), Some(0.7));
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].xq, 0.02);
        assert_eq!(transitions[0].width, 0.0);
        assert_eq!(transitions[0].composition.get("c12"), Some(0.1));
        assert_eq!(transitions[1].xq, 0.5);
        assert_eq!(transitions[1].composition.get("c12"), Some(0.5));
    }

    #[test]
    fn single_row_cannot_form_transitions() {
        let table = read("xq,h1\n0.1,1.0\n".as_bytes(), &network(), false).unwrap();
        assert!(matches!(
            table.into_transitions(),
            Err(Error::TooFewLayers(1))
        ));
    }

    #[test]
    fn header_without_xq_is_rejected() {
        let err = read("\nh1,he4\n0.5,0.5\n".as_bytes(), &network(), false).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                format: Format::Layers,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_isotope_columns_are_rejected() {
        let err = read("xq,h1,H1\n".as_bytes(), &network(), false).unwrap_err();
        assert!(err.to_string().contains("duplicate column 'H1'"));
    }

    #[test]
    fn bad_numbers_report_their_line() {
        let err = read("xq,h1\n0.1,1.0\n0.2,lots\n".as_bytes(), &network(), false).unwrap_err();
        match err {
            Error::Parse { line, details, .. } => {
                assert_eq!(line, 3);
                assert!(details.contains("'lots'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = read("xq,h1,he4\n0.1,1.0\n".as_bytes(), &network(), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }
}
