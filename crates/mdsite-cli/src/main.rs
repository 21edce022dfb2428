use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mdsite_cli::{build_site, Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static site from markdown content")]
struct Cli {
    /// Prefix for root-relative links (defaults to "/")
    base_path: Option<String>,

    /// Config file, ignored if missing
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Markdown source directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static assets directory
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Page template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.into_config()?;
    let report = build_site(&config).context("Site build failed")?;

    for (path, err) in &report.failed {
        eprintln!("Failed {}: {}", path.display(), err);
    }
    Ok(report.is_success())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
