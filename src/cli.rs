use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  license-list
      Writes $SRCROOT/licenses.json from $SRCROOT/SourcePackages
  license-list Sources/licenses.json
      Finds the nearest SourcePackages directory above the project root
  license-list Sources/licenses.json DerivedData/App/SourcePackages
      Uses both paths as given";

/// Generate a license list for the Swift packages resolved by a project
#[derive(Parser, Debug)]
#[command(name = "license-list")]
#[command(version)]
#[command(about = "Generate a license list for the Swift packages resolved by a project", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// [OUTPUT] [SOURCE_PACKAGES]: output file, then the directory holding
    /// workspace-state.json and checkouts/
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to a config file (defaults to license-list.config.yml in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Usage line followed by invocation examples
pub fn usage_with_examples() -> String {
    let usage = Args::command().render_usage();
    format!("{}\n\n{}", usage, EXAMPLES)
}
