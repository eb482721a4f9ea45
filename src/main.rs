use clap::{Parser, Subcommand};
use readme_gallery::{config, fill, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "readme-gallery")]
#[command(about = "Fill a README template with a gallery of SVGs")]
#[command(long_about = "\
Fill a README template with a gallery of SVGs

Run from the gallery directory. Every *.svg file there (except test.svg)
becomes a cell in a three-column Markdown table, titled from its filename:

  two-rects.svg   → Two Rects
  ALL-CAPS.svg    → ALL CAPS

The table replaces every %gallery% in ../../README.md.in and the result
overwrites ../../README.md.

Settings can be changed in an optional gallery.toml next to the images.
Run 'readme-gallery gen-config' to print a documented one.")]
#[command(version)]
struct Cli {
    /// Gallery directory
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    /// Template file, relative to the gallery directory
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Output file, relative to the gallery directory
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Sort images by filename instead of filesystem order
    #[arg(long, global = true)]
    sort: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery into the output file (default)
    Fill,
    /// List the images that would be included, without writing
    Check,
    /// Print the gallery table to stdout, without writing
    Table,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Command::Fill) {
        Command::Fill => {
            let site = resolve_config(&cli)?;
            let report = fill::fill(&cli.dir, &site)?;
            output::print_fill_output(&report);
        }
        Command::Check => {
            let site = resolve_config(&cli)?;
            let (listing, _) = fill::build(&cli.dir, &site)?;
            output::print_scan_output(&listing);
        }
        Command::Table => {
            let site = resolve_config(&cli)?;
            let (_, table) = fill::build(&cli.dir, &site)?;
            print!("{}", table.into_markdown());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `gallery.toml` from the gallery directory, then apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<config::GalleryConfig, config::ConfigError> {
    let mut site = config::load_config(&cli.dir)?;
    if let Some(template) = &cli.template {
        site.template = template.clone();
    }
    if let Some(output) = &cli.output {
        site.output = output.clone();
    }
    site.sort |= cli.sort;
    Ok(site)
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
