//! pkgdoc CLI - package documentation renderer.
//!
//! Provides commands for:
//! - `render`: Render parsed package documentation through a template
//! - `check`: Parse the template set and list its templates

mod commands;
mod error;
mod output;
mod registry;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// pkgdoc - package documentation renderer.
#[derive(Parser)]
#[command(name = "pkgdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render package documentation JSON with a template.
    Render(RenderArgs),
    /// Parse all templates and list them.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.verbose,
            Self::Check(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::stderr();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.failure(&err);
        std::process::exit(1);
    }
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
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["pkgdoc", "render", "fmt.json"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.template, "package.html");
        assert_eq!(args.status, 200);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::try_parse_from([
            "pkgdoc", "render", "fmt.json", "-t", "package.txt", "-s", "404", "--dev", "-v",
        ])
        .unwrap();
        assert!(cli.command.verbose());
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.template, "package.txt");
        assert_eq!(args.status, 404);
        assert!(args.dev);
    }

    #[test]
    fn test_render_requires_data() {
        assert!(Cli::try_parse_from(["pkgdoc", "render"]).is_err());
    }
}
