mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            output_dir,
            prefix,
            json_only,
        } => {
            commands::extract::handle(&input, output_dir.as_deref(), prefix.as_deref(), json_only)?;
        }

        Commands::Inspect { input, prefix } => {
            commands::inspect::handle(&input, prefix.as_deref())?;
        }

        Commands::Configure {
            prefix,
            output_dir,
            show,
        } => {
            commands::configure::handle(prefix, output_dir, show)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("glb_zones={}", level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
