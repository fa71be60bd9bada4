use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "cforge",
    about = "Carbon nanotube and graphite model builder",
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
    /// Build an armchair (n,n) nanotube
    #[command(visible_alias = "armcnt")]
    Armchair(TubeArgs),

    /// Build a zigzag (n,0) nanotube
    #[command(visible_alias = "zigzagcnt")]
    Zigzag(TubeArgs),

    /// Build a rectangular graphite (HOPG) sheet
    #[command(visible_alias = "hopg")]
    Sheet(SheetArgs),
}

impl Command {
    pub fn common(&self) -> &CommonOptions {
        match self {
            Command::Armchair(args) | Command::Zigzag(args) => &args.common,
            Command::Sheet(args) => &args.common,
        }
    }
}

#[derive(Args)]
pub struct TubeArgs {
    /// Number of hexagonal rings around the circumference
    #[arg(value_name = "RINGS")]
    pub rings: usize,

    /// Requested tube length (Å)
    #[arg(value_name = "LENGTH")]
    pub length: f64,

    /// Group used to saturate the open rims
    #[arg(short, long, value_name = "GROUP", default_value = "none")]
    pub functionalization: TubeGroup,

    /// Make the tube periodic along its axis (rims are left open)
    #[arg(short, long)]
    pub periodic: bool,

    #[command(flatten)]
    pub common: CommonOptions,
}

#[derive(Args)]
pub struct SheetArgs {
    /// Requested sheet width along x (Å)
    #[arg(value_name = "WIDTH")]
    pub width: f64,

    /// Requested sheet height along y (Å)
    #[arg(value_name = "HEIGHT")]
    pub height: f64,

    /// Group used to saturate the open borders
    #[arg(short, long, value_name = "GROUP", default_value = "none")]
    pub functionalization: SheetGroup,

    /// Periodic axes; a bare -p means both
    #[arg(
        short,
        long,
        value_name = "AXES",
        num_args = 0..=1,
        default_missing_value = "xy"
    )]
    pub periodic: Option<SheetAxes>,

    #[command(flatten)]
    pub common: CommonOptions,
}

/// Output and build options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct CommonOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from the extension if omitted)
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Overwrite an existing output file instead of renaming it to <FILE>_bak-<k>
    #[arg(long = "no-backup")]
    pub no_backup: bool,

    /// Aromatic C–C bond length (Å)
    #[arg(
        long = "bond-length",
        value_name = "Å",
        default_value_t = carbon_forge::DEFAULT_BOND_LENGTH,
        help_heading = "Geometry"
    )]
    pub bond_length: f64,

    /// Custom bonding parameters (TOML: radii, tolerances, neighbor limit)
    #[arg(long, value_name = "FILE", help_heading = "Geometry")]
    pub params: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TubeGroup {
    /// Hydrogen caps
    None,
    /// Hydroxyl groups
    Oh,
    /// Carboxylate (COO⁻) groups
    Coo,
    /// Carboxylic acid (COOH) groups
    Cooh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetGroup {
    /// Hydrogen caps
    None,
    /// Hydroxyl groups
    Oh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetAxes {
    X,
    Y,
    Xy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TINKER XYZ with connectivity
    Tinker,
    /// Plain XYZ
    Xyz,
    /// GROMACS coordinates
    Gro,
    /// TRIPOS MOL2
    Mol2,
}

pub fn parse() -> Cli {
    Cli::parse()
}
