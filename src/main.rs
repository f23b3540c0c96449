//! feature-pack - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use feature_pack::cli::{check, list, routes_cmd};
use feature_pack::cli::{CheckOptions, ListOptions, RoutesOptions};

/// Inspect and validate feature pack trees
#[derive(Parser)]
#[command(name = "feature-pack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a features tree and report totals
    Check {
        /// Application root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Features directory, relative to the root
        #[arg(long)]
        features_dir: Option<PathBuf>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// List discovered groups and features
    List {
        /// Application root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Features directory, relative to the root
        #[arg(long)]
        features_dir: Option<PathBuf>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Print the route plan in registration order
    Routes {
        /// Application root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Features directory, relative to the root
        #[arg(long)]
        features_dir: Option<PathBuf>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (rendered, success) = match cli.command {
        Commands::Check {
            root,
            features_dir,
            json,
        } => {
            let output = check::run(&CheckOptions {
                root,
                features_dir,
                json,
            });
            (check::render(&output, json), output.success)
        }
        Commands::List {
            root,
            features_dir,
            json,
        } => {
            let output = list::run(&ListOptions {
                root,
                features_dir,
                json,
            });
            (list::render(&output, json), output.success)
        }
        Commands::Routes {
            root,
            features_dir,
            json,
        } => {
            let output = routes_cmd::run(&RoutesOptions {
                root,
                features_dir,
                json,
            });
            (routes_cmd::render(&output, json), output.success)
        }
    };

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
