//! CLI entry point for ptree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use ptree::{IconMap, RenderOptions, Result, TreeRenderer, UserConfig};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ptree")]
#[command(about = "Print a directory tree with emoji icons")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print all files and directories including those starting with a dot
    #[arg(short, long)]
    all: bool,

    /// Print only directories
    #[arg(short = 'd', long = "dir")]
    dir: bool,

    /// Mapping of file extensions to emojis, as a JSON object
    #[arg(short = 'e', long = "emojis", value_name = "JSON", default_value = "{}")]
    emojis: String,

    /// Maximum depth to traverse
    #[arg(short = 'l', long = "level", value_parser = clap::value_parser!(u64).range(1..))]
    level: Option<u64>,

    /// Include files matching this pattern
    #[arg(short = 'i', long = "include", value_name = "GLOB")]
    include: Option<String>,

    /// Exclude files matching this pattern
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    exclude: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Read settings from FILE instead of ~/.ptree.json
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    /// Build render options from the config file and flags. Flag emojis
    /// override config emojis per extension.
    fn render_options(&self) -> Result<RenderOptions> {
        let config = match &self.config {
            Some(path) => UserConfig::load_required(path)?,
            None => UserConfig::load_default()?,
        };

        let mut icons = config.emojis;
        icons.merge(IconMap::from_json(&self.emojis)?);

        let mut options = RenderOptions::new()
            .with_icons(icons)
            .with_show_hidden(self.all)
            .with_directory_only(self.dir)
            .with_max_depth(self.level.map(|l| usize::try_from(l).unwrap_or(usize::MAX)));

        if let Some(pattern) = &self.include {
            options = options.with_include(pattern)?;
        }
        if let Some(pattern) = &self.exclude {
            options = options.with_exclude(pattern)?;
        }
        Ok(options)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let options = args.render_options()?;

    let choice = if should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let summary = TreeRenderer::new(options).render(&args.path, &mut stdout)?;
    tracing::debug!(
        directories = summary.directories,
        files = summary.files,
        "render complete"
    );
    Ok(())
}

fn main() {
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("ptree: {}", e);
        process::exit(1);
    }
}
