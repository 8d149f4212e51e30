use anyhow::{Context, Result, bail};

use compo_forge::build_with;
use compo_forge::io::read_layers;

use super::write_profile;
use crate::cli::ManualArgs;
use crate::config::{build_blend_config, load_network};
use crate::display::{Context as DisplayContext, Progress, print_composition};
use crate::io::{OutputTarget, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_manual(args: ManualArgs, ctx: DisplayContext) -> Result<()> {
    if args.table.is_none() && stdin_is_tty() {
        bail!(
            "No layer table specified and stdin is a terminal.\n\nUsage: cforge manual <TABLE> --net <NAME> or pipe a table via stdin."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading layers");
    let network = load_network(&args.net, None)?;
    let table = read_layers(
        open_input(args.table.as_deref())?,
        &network,
        !args.no_normalize,
    )
    .context("Failed to read layer table")?;

    let target = OutputTarget::new(args.io.output.as_deref());
    for iso in &table.ignored {
        target.notice(&format!("Warning: Isotope {iso} from table not in network."));
    }
    progress.complete_step(
        "Reading layers",
        &[
            format!("{} layers", table.len()),
            format!("{} columns outside the network", table.ignored.len()),
        ],
    );

    progress.step("Blending profile");
    let (surface, transitions) = table.into_transitions()?;
    let config = build_blend_config(args.steepness, None);
    let profile = build_with(&surface, &transitions, &config).context("Failed to build profile")?;
    progress.complete_step(
        "Blending profile",
        &[format!("{} transitions", transitions.len())],
    );

    if ctx.interactive {
        print_composition("Surface", &surface);
    }

    write_profile(&profile, &network, &target, &mut progress, ctx)?;

    progress.finish("Composition complete");
    Ok(())
}
