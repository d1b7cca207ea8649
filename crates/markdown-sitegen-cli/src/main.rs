use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    FailurePolicy, generate_pages_recursive, io, publish_static, render_document,
};
use std::path::{Path, PathBuf};

mod cli;
use cli::{Cli, Commands};

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG, when set, wins over the flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let mut config = Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?;
            if let Some(root) = path.parent() {
                config.resolve_against(root);
            }
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                Ok(config)
            }
            None => {
                log::info!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn build(config: &Config, base_path: Option<String>, keep_going: bool) -> Result<()> {
    let base_path = base_path.unwrap_or_else(|| config.base_path.clone());
    let policy = if keep_going {
        FailurePolicy::Skip
    } else {
        config.on_error
    };

    for input in [&config.content_dir, &config.template_path] {
        io::ensure_outside(input, &config.output_dir)
            .context("Output directory would overwrite the site sources")?;
    }

    let copied = publish_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to publish {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        )
    })?;
    log::info!(
        "Copied {copied} static files to {}",
        config.output_dir.display()
    );

    let report = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &base_path,
        policy,
    )
    .context("Failed to generate pages")?;

    println!(
        "Generated {} pages into {}",
        report.generated.len(),
        config.output_dir.display()
    );
    if !report.skipped.is_empty() {
        eprintln!("Skipped {} pages:", report.skipped.len());
        for (source, error) in &report.skipped {
            eprintln!("  {source}: {error}");
        }
    }

    Ok(())
}

fn render(file: &Path) -> Result<()> {
    let markdown =
        io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let html = render_document(&markdown)
        .with_context(|| format!("Failed to render {}", file.display()))?;
    println!("{html}");
    Ok(())
}

fn init(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }
    Config::default().save_to_path(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Build {
            base_path,
            keep_going,
        } => {
            let config = load_config(cli.config.as_deref())?;
            build(&config, base_path, keep_going)
        }
        Commands::Render { ref file } => render(file),
        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(Config::config_path);
            init(path, force)
        }
    }
}
