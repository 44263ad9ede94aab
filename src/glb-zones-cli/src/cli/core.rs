//! Core CLI definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Model file read when no input is given
pub const DEFAULT_MODEL: &str = "SM_MFF.glb";

#[derive(Parser)]
#[command(name = "glb-zones")]
#[command(about = "Extract zone markers from GLB models", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract zones and write the JSON report and TypeScript snippet
    #[command(visible_alias = "x")]
    Extract {
        /// Path to .glb model
        #[arg(default_value = DEFAULT_MODEL)]
        input: PathBuf,

        /// Directory for zone_coordinates.json and zones.ts (uses configured default if not provided)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Node name prefix marking a zone (uses configured default, then ZONE_)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Only write the JSON report
        #[arg(long)]
        json_only: bool,
    },

    /// Show container framing and scene contents of a GLB file
    #[command(visible_alias = "i")]
    Inspect {
        /// Path to .glb model
        input: PathBuf,

        /// Node name prefix to count as zones
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default zone prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Set default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["glb-zones", "extract"]).unwrap();
        match cli.command {
            Commands::Extract {
                input,
                output_dir,
                prefix,
                json_only,
            } => {
                assert_eq!(input, PathBuf::from(DEFAULT_MODEL));
                assert!(output_dir.is_none());
                assert!(prefix.is_none());
                assert!(!json_only);
            }
            _ => panic!("expected extract"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_extract_args() {
        let cli = Cli::try_parse_from([
            "glb-zones", "x", "venue.glb", "-o", "out", "-p", "POI_", "--json-only", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Extract {
                input,
                output_dir,
                prefix,
                json_only,
            } => {
                assert_eq!(input, PathBuf::from("venue.glb"));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
                assert_eq!(prefix.as_deref(), Some("POI_"));
                assert!(json_only);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_inspect_requires_input() {
        assert!(Cli::try_parse_from(["glb-zones", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["glb-zones", "i", "m.glb"]).is_ok());
    }
}
