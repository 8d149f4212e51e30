mod blend;
mod isos;
mod manual;

use blend::run_blend;
use isos::run_isos;
use manual::run_manual;

use anyhow::{Context as _, Result};

use compo_forge::io::render;
use compo_forge::{CompositionProfile, Network};

use crate::cli::Command;
use crate::display::{Context, Progress, print_profile_summary};
use crate::io::OutputTarget;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Blend(args) => run_blend(args, ctx),
        Command::Manual(args) => run_manual(args, ctx),
        Command::Isos(args) => run_isos(args),
    }
}

/// Folds, renders and writes the profile, announcing every fold.
///
/// The text is complete before the target is touched, so a failed fold
/// leaves an existing file as it was.
fn write_profile(
    profile: &CompositionProfile,
    network: &Network,
    target: &OutputTarget<'_>,
    progress: &mut Progress,
    ctx: Context,
) -> Result<()> {
    progress.step("Writing composition");
    let rendered = match render(profile, network) {
        Ok(rendered) => rendered,
        Err(e) => {
            progress.abandon();
            return Err(e).context("Failed to reconcile the profile with the network");
        }
    };

    for fold in &rendered.folds {
        target.notice(&format!(
            "Isotope {} not in network. Dumping into {}.",
            fold.isotope, fold.alternate
        ));
    }

    if let Err(e) = target.write_text(&rendered.text) {
        progress.abandon();
        return Err(e);
    }

    let details = vec![
        format!("{} rows × {} isotopes", profile.row_count(), network.len()),
        format!("Written to {}", target.describe()),
    ];
    progress.complete_step("Writing composition", &details);

    if ctx.interactive {
        print_profile_summary(profile, network, &rendered.folds);
    }
    Ok(())
}
