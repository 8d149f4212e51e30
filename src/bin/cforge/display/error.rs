use std::io::{self, Write};

use anyhow::Error;

use compo_forge::io::{Error as IoError, Format};
use compo_forge::{BlendError, ModelError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Hints for the first library error found in the chain, or generic
/// advice derived from the messages when there is none.
fn hints_for(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<IoError>() {
            io_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<BlendError>() {
            blend_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<ModelError>() {
            model_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<io::Error>() {
            std_io_hints(e, &mut hints);
        } else {
            continue;
        }
        return hints;
    }

    fallback_hints(err, &mut hints);
    hints
}

fn io_hints(err: &IoError, hints: &mut Vec<String>) {
    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { format, line, .. } => {
            hints.push(format!("Check the {format} file around line {line}"));
            match format {
                Format::Net => {
                    hints.push("Isotopes belong in add_isos( ... ) blocks closed by ')'".into());
                    hints.push("Ranges are written as 'element first last', e.g. 'fe 52 56'".into());
                }
                Format::Layers => {
                    hints.push("The header needs an 'xq' column plus one column per isotope".into());
                    hints.push("Every row needs one number per header column".into());
                }
                Format::Composition => {}
            }
        }

        IoError::NetNotFound { name } => {
            hints.push(format!("No '{name}.net' or '{name}' in the search directories"));
            hints.push("Set MESA_DIR or add a directory with --nets-dir".into());
        }

        IoError::IncludeCycle(_) => {
            hints.push("A network file includes itself through the chain shown".into());
            hints.push("Remove one of the include lines".into());
        }

        IoError::TooFewLayers(_) => {
            hints.push("The first row is the surface; each further row adds a layer".into());
            hints.push("Add at least one more row below the surface".into());
        }

        IoError::Blend(e) => blend_hints(e, hints),
        IoError::Model(e) => model_hints(e, hints),
    }
}

fn blend_hints(err: &BlendError, hints: &mut Vec<String>) {
    match err {
        BlendError::EmptyTransitions => {
            hints.push("Add at least one [[transition]] to the recipe".into());
        }

        BlendError::InvalidTransition { index, .. } => {
            hints.push(format!("Transition {index} must lie within 0 <= xq <= 1"));
            hints.push("Lower the steepness if a transition sits very close to the centre".into());
        }

        BlendError::UnorderedTransitions { .. } => {
            hints.push("List transitions from the surface inward, by increasing xq".into());
            hints.push("Transitions closer than the steepness allows overlap; spread them out or lower --steepness".into());
        }

        BlendError::SampleMismatch { index, .. } => {
            hints.push(format!(
                "Composition {index} must list the same isotopes, in the same order, as the surface"
            ));
        }

        BlendError::InvalidSteepness(_) => {
            hints.push("Steepness must be a finite, non-negative number such as 1e-6".into());
        }

        BlendError::UnresolvableIsotope(iso) => {
            hints.push(format!("Add '{iso}' or another isotope of its element to the network"));
        }

        BlendError::Model(e) => model_hints(e, hints),
    }
}

fn model_hints(err: &ModelError, hints: &mut Vec<String>) {
    match err {
        ModelError::DuplicateIsotope(iso) => {
            hints.push(format!("Isotope '{iso}' is listed more than once"));
        }
        ModelError::LengthMismatch { .. } => {
            hints.push("Give exactly one mass fraction per listed isotope".into());
        }
        ModelError::UnknownColumn(_) => {
            hints.push("This looks like an internal inconsistency; please report it".into());
        }
        ModelError::InvalidIsotope(_) => {
            hints.push("Isotopes are written as element symbol + mass number, e.g. 'he4', 'fe56'".into());
            hints.push("The free neutron is written 'neut'".into());
        }
        ModelError::UnsortedNetwork { .. } => {
            hints.push("Network isotopes must be ordered by charge, then mass number".into());
        }
    }
}

fn std_io_hints(source: &io::Error, hints: &mut Vec<String>) {
    use io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("The program reading stdout exited early".into());
        }
        ErrorKind::InvalidData => {
            hints.push("The file is not valid UTF-8 text".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let text = err
        .chain()
        .map(|cause| cause.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("stdin") || text.contains("terminal") {
        hints.push("Pass the input file as an argument or pipe it to stdin".into());
    } else if text.contains("recipe") || text.contains("toml") {
        hints.push("A recipe needs 'isotopes', a [surface] table and [[transition]] tables".into());
    } else if text.contains("network") {
        hints.push("Use --net <NAME> or --isotopes <ISO,...>".into());
    }
}
