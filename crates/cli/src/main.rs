use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::page::ContactForm;
use folio_core::page::form::SUCCESS_MESSAGE;
use folio_core::scenes::default_skills;
use folio_core::svg::render_svg;
use folio_core::{PageConfig, compose_bar_chart, compose_geometric, compose_winter};
use folio_protocol::{Element, ViewportProfile};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a scene as a standalone SVG document.
    Render(RenderArgs),
    /// Check a contact form submission the way the page does.
    Validate(ValidateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    Chart,
    Winter,
    Geometric,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    scene: Scene,

    /// Viewport width used to pick the chart layout.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// JSON page config; only `compact_breakpoint` affects rendering.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path. Writes to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(&args),
        Command::Validate(args) => cmd_validate(&args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Ok(PageConfig::from_json(&json)?)
}

fn compose(scene: Scene, viewport_width: f64, config: &PageConfig) -> Element {
    match scene {
        Scene::Chart => {
            let profile = ViewportProfile::for_width(viewport_width, config.compact_breakpoint);
            compose_bar_chart(&default_skills(), &profile).settled()
        }
        Scene::Winter => compose_winter(),
        Scene::Geometric => compose_geometric(),
    }
}

fn cmd_render(args: &RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let svg = render_svg(&compose(args.scene, args.viewport_width, &config));

    match &args.output {
        Some(path) => {
            std::fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(scene = ?args.scene, path = %path.display(), "wrote svg");
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(svg.as_bytes())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_validate(args: &ValidateArgs) -> anyhow::Result<()> {
    ContactForm::new(&args.name, &args.email, &args.message).validate()?;
    writeln!(std::io::stdout().lock(), "{SUCCESS_MESSAGE}")?;
    Ok(())
}
