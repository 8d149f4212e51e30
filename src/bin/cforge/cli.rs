use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cforge",
    about = "Blended composition profiles for MESA relax_composition",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a profile from a TOML recipe (surface + transitions)
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// Build a profile from a CSV table of layers
    #[command(visible_alias = "m")]
    Manual(ManualArgs),

    /// List the isotopes of a network
    #[command(visible_alias = "i")]
    Isos(IsosArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Blend(args) => args.io.quiet,
            Command::Manual(args) => args.io.quiet,
            Command::Isos(_) => true,
        }
    }

    pub fn verbosity(&self) -> u8 {
        match self {
            Command::Blend(args) => args.io.verbose,
            Command::Manual(args) => args.io.verbose,
            Command::Isos(args) => args.verbose,
        }
    }
}

/// I/O options shared by the profile commands.
#[derive(Args)]
pub struct IoOptions {
    /// Composition file to write (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress banner, progress and tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Log library events to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where network files are looked up.
#[derive(Args)]
#[command(next_help_heading = "Network Lookup")]
pub struct NetDirs {
    /// Directory holding `.net` files, searched before $MESA_DIR
    #[arg(long = "nets-dir", value_name = "DIR", action = ArgAction::Append)]
    pub nets_dirs: Vec<PathBuf>,

    /// MESA installation; its data/net_data/nets is searched last
    #[arg(long, value_name = "DIR", env = "MESA_DIR", hide_env_values = true)]
    pub mesa_dir: Option<PathBuf>,
}

/// Which isotopes the composition file lists.
#[derive(Args)]
#[command(next_help_heading = "Network")]
pub struct NetOptions {
    /// Reaction network file name (e.g. approx21.net)
    #[arg(long, value_name = "NAME", conflicts_with = "isotopes")]
    pub net: Option<String>,

    /// Explicit isotope list instead of a network file
    #[arg(long, value_name = "ISO,...", value_delimiter = ',')]
    pub isotopes: Vec<String>,

    #[command(flatten)]
    pub dirs: NetDirs,
}

#[derive(Args)]
pub struct BlendArgs {
    /// Recipe file (stdin if omitted)
    #[arg(value_name = "RECIPE")]
    pub recipe: Option<PathBuf>,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub net: NetOptions,

    /// Relative half-width of every transition (overrides the recipe)
    #[arg(long, value_name = "S")]
    pub steepness: Option<f64>,
}

#[derive(Args)]
pub struct ManualArgs {
    /// Layer table, comma separated with an `xq` column (stdin if omitted)
    #[arg(value_name = "TABLE")]
    pub table: Option<PathBuf>,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub net: NetOptions,

    /// Relative half-width of every transition
    #[arg(long, value_name = "S")]
    pub steepness: Option<f64>,

    /// Keep each row's mass fractions as written
    #[arg(long)]
    pub no_normalize: bool,
}

#[derive(Args)]
pub struct IsosArgs {
    /// Network file name
    #[arg(value_name = "NET")]
    pub net: String,

    #[command(flatten)]
    pub dirs: NetDirs,

    /// Log library events to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse() -> Cli {
    Cli::parse()
}
