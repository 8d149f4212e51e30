use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::IsosArgs;
use crate::config::build_net_loader;

pub fn run_isos(args: IsosArgs) -> Result<()> {
    let network = build_net_loader(&args.dirs)
        .load(&args.net)
        .with_context(|| format!("Failed to load network '{}'", args.net))?;

    let mut out = io::stdout().lock();
    for (i, iso) in network.iter().enumerate() {
        writeln!(out, "{} {iso}", i + 1)?;
    }
    out.flush()?;
    Ok(())
}
