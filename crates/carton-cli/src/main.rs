mod cli;

use std::io::{self, BufRead};

use anyhow::Result;
use carton_config::Config;
use carton_core::RenderMode;
use carton_engine::Packager;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    let sizes = match cli.sizes {
        Some(sizes) => sizes,
        None => read_sizes_from_stdin()?,
    };

    let mode = if cli.aggregate {
        RenderMode::Aggregated
    } else if cli.per_carton {
        RenderMode::PerCarton
    } else if sizes.len() > config.display.aggregate_threshold {
        RenderMode::Aggregated
    } else {
        RenderMode::PerCarton
    };

    let packager = Packager::new();
    match packager.pack(&sizes, mode) {
        Ok(cartons) => {
            println!("Here are the cartons to pack:");
            if mode == RenderMode::Aggregated {
                println!("(the number of cartons for each size combination is in parentheses)");
            }
            println!("{cartons}");
            Ok(())
        }
        Err(e) => {
            // Invalid input is reported, never propagated as a panic
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_sizes_from_stdin() -> Result<String> {
    println!("Enter the sizes of the items to pack:");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
