use anyhow::{Context, Result, bail};

use compo_forge::Network;
use compo_forge::io::NetLoader;

use crate::cli::{NetDirs, NetOptions};

pub fn build_net_loader(dirs: &NetDirs) -> NetLoader {
    let mut search = dirs.nets_dirs.clone();
    if let Some(mesa) = &dirs.mesa_dir {
        search.push(mesa.join("data").join("net_data").join("nets"));
    }
    NetLoader::new(search)
}

/// Picks the network from `--isotopes`, then `--net`, then the recipe.
pub fn load_network(opts: &NetOptions, fallback: Option<&str>) -> Result<Network> {
    if !opts.isotopes.is_empty() {
        return Network::from_unsorted(&opts.isotopes).context("Invalid --isotopes list");
    }

    let Some(name) = opts.net.as_deref().or(fallback) else {
        bail!("No network given.\n\nUse --net <NAME> or --isotopes <ISO,...>.");
    };

    let loader = build_net_loader(&opts.dirs);
    if loader.search_dirs().is_empty() && !name.contains(std::path::MAIN_SEPARATOR) {
        bail!(
            "Cannot locate network '{name}': no search directory.\n\nSet MESA_DIR or pass --nets-dir."
        );
    }

    loader
        .load(name)
        .with_context(|| format!("Failed to load network '{name}'"))
}
