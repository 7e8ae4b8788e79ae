//! Fakheem CLI - preview the storefront grid from a catalog export.
//!
//! Commands:
//! - `fakheem render` - Render the storefront page to HTML
//! - `fakheem list` - Print the products the grid would show
//! - `fakheem config` - Inspect or create the storefront configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ListArgs, RenderArgs};

/// Fakheem CLI - preview the jewelry storefront from the command line
#[derive(Parser)]
#[command(name = "fakheem")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the storefront page to HTML
    Render(RenderArgs),

    /// List the products shown for a search, category and sort
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        fakheem_observability::init_tracing(fakheem_observability::DEFAULT_FILTER);
    }

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
