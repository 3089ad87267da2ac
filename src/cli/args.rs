use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate OpenShift EgressNetworkPolicy declarations from allow/deny destination files"
)]
pub struct Args {
    /// Namespace for the EgressNetworkPolicy object
    #[arg(short, long, env = "NAMESPACE")]
    pub namespace: String,

    /// Directory to search for destination files
    #[arg(short, long, env = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern for destination files
    #[arg(short, long, env = "GLOB", default_value = "*.allow")]
    pub glob: String,

    /// Output format for the EgressNetworkPolicy declaration
    #[arg(short, long, env = "OUTPUT", value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, env = "WRITE", value_name = "PATH")]
    pub write: Option<PathBuf>,
}
