use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scriptrun", about = "Config-driven rhai script runner", version)]
pub struct Cli {
    /// Path to the scripts file (JSON). Overrides SCRIPTS_PATH.
    #[arg(value_name = "SCRIPTS_FILE")]
    pub scripts_file: Option<PathBuf>,

    /// Run only the named script. Can be used multiple times.
    #[arg(long = "script", action = clap::ArgAction::Append)]
    pub script: Vec<String>,

    /// Seed for the sample parameter generator (deterministic runs).
    #[arg(long)]
    pub seed: Option<u64>,

    /// List configured script names and exit.
    #[arg(short = 'l', long = "list-scripts", visible_alias = "ls")]
    pub list_scripts: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
