use std::path::Path;

use anyhow::{Context, Result, bail};

use compo_forge::build_with;

use super::write_profile;
use crate::cli::BlendArgs;
use crate::config::{Recipe, build_blend_config, load_network};
use crate::display::{Context as DisplayContext, Progress, print_composition};
use crate::io::{OutputTarget, read_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_blend(args: BlendArgs, ctx: DisplayContext) -> Result<()> {
    if args.recipe.is_none() && stdin_is_tty() {
        bail!(
            "No recipe specified and stdin is a terminal.\n\nUsage: cforge blend <RECIPE> or pipe a recipe via stdin."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading recipe");
    let recipe = Recipe::parse(&read_input(args.recipe.as_deref())?)?;
    let network = load_network(&args.net, recipe.net.as_deref())?;
    progress.complete_step(
        "Reading recipe",
        &[
            format!(
                "{} isotopes, {} transitions",
                recipe.isotopes.len(),
                recipe.transitions.len()
            ),
            format!("Network of {} isotopes", network.len()),
        ],
    );

    progress.step("Blending profile");
    let surface = recipe.surface()?;
    let transitions = recipe.transitions()?;
    let config = build_blend_config(args.steepness, recipe.steepness);
    let profile = build_with(&surface, &transitions, &config).context("Failed to build profile")?;
    progress.complete_step(
        "Blending profile",
        &[format!("Steepness {:e}", config.steepness)],
    );

    if ctx.interactive {
        print_composition("Surface", &surface);
        if let Some(core) = transitions.last() {
            print_composition("Core", &core.composition);
        }
    }

    let output = args
        .io
        .output
        .as_deref()
        .or(recipe.output.as_deref().map(Path::new));
    write_profile(&profile, &network, &OutputTarget::new(output), &mut progress, ctx)?;

    progress.finish("Composition complete");
    Ok(())
}
