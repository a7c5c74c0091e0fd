//! typetour - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use typetour::util::logger;
use typetour::{tour, RunOptions, NAME, VERSION};

/// A guided console tour of value semantics, string canonicalization, and
/// ordered collections
#[derive(Parser, Debug)]
#[command(name = "typetour")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored banners
    #[arg(long)]
    plain: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the tour, or a single vignette by name
    Run {
        /// Vignette to run (all when omitted)
        #[arg(value_name = "VIGNETTE")]
        vignette: Option<String>,
    },

    /// List the available vignettes
    List,

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_cli();
    }

    let options = if args.plain {
        RunOptions::plain()
    } else {
        RunOptions::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        None
        | Some(Commands::Run { vignette: None }) => {
            tour::run_all(&mut out, &options).context("Failed to run the tour")?;
        }
        Some(Commands::Run {
            vignette: Some(name),
        }) => {
            tour::run_one(&name, &mut out, &options)
                .with_context(|| format!("Failed to run vignette: {}", name))?;
        }
        Some(Commands::List) => {
            for vignette in tour::all() {
                println!("{:<12} {}", vignette.name(), vignette.title());
            }
        }
        Some(Commands::Version) => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
