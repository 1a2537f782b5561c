use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validate scan requests and enrich container image SBOMs with source repository metadata
#[derive(Parser, Debug)]
#[command(name = "sbom-enricher")]
#[command(version)]
#[command(about = "Validate scan requests and enrich container image SBOMs with source repository metadata", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./sbom-enricher.config.yml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a scan request document and print it in canonical form
    Validate {
        /// Path to the scan request JSON file
        #[arg(value_name = "REQUEST")]
        path: PathBuf,
    },
    /// Enrich one or more syft CycloneDX SBOM documents
    Enrich {
        /// Paths to SBOM JSON files
        #[arg(value_name = "SBOM", required = true)]
        paths: Vec<PathBuf>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
