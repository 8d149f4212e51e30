use crate::blend::{self, Fold};
use crate::io::error::Error;
use crate::model::network::Network;
use crate::model::profile::CompositionProfile;
use std::fs;
use std::io::Write;
use std::path::Path;

const XQ_DIGITS: usize = 15;
const FRACTION_DIGITS: usize = 8;
const ABSENT_FRACTION: &str = "0.00000000e+00";

/// A composition table ready to be written, with the folds that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub folds: Vec<Fold>,
}

pub fn render(profile: &CompositionProfile, network: &Network) -> Result<Rendered, Error> {
    let mut working = profile.clone();
    let folds = blend::fold_into_network(&mut working, network)?;

    let columns: Vec<Option<&[f64]>> = network.iter().map(|iso| working.column(iso)).collect();

    let mut text = String::with_capacity(
        (working.row_count() + 1) * (XQ_DIGITS + 8 + network.len() * (FRACTION_DIGITS + 8)),
    );
    text.push_str(&format!("{} {}\n", working.row_count(), network.len()));

    for (row, &xq) in working.xq().iter().enumerate() {
        text.push_str(&format_sci(xq, XQ_DIGITS));
        for column in &columns {
            text.push(' ');
            match column {
                Some(values) => text.push_str(&format_sci(values[row], FRACTION_DIGITS)),
                None => text.push_str(ABSENT_FRACTION),
            }
        }
        text.push('\n');
    }

    let trimmed = text.trim_end().len();
    text.truncate(trimmed);

    Ok(Rendered { text, folds })
}

pub fn write<W: Write>(
    mut writer: W,
    profile: &CompositionProfile,
    network: &Network,
) -> Result<Vec<Fold>, Error> {
    let rendered = render(profile, network)?;
    writer.write_all(rendered.text.as_bytes())?;
    writer.flush()?;
    Ok(rendered.folds)
}

/// Renders the table in full, then creates or truncates `path` with it.
pub fn write_file(
    path: impl AsRef<Path>,
    profile: &CompositionProfile,
    network: &Network,
) -> Result<Vec<Fold>, Error> {
    let rendered = render(profile, network)?;
    fs::write(path, rendered.text)?;
    Ok(rendered.folds)
}

/// Scientific notation with `digits` decimals and a C-style exponent
/// (explicit sign, at least two digits), e.g. `5.00000000e-01`.
pub(crate) fn format_sci(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{value:.digits$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
