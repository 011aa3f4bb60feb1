//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use docnav_core::{PatchOutcome, build_outline, render_outline, update_config_nav};
use docnav_shared::{DocNavError, Settings, init_settings, load_settings, resolve};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docnav: keep a static site's navigation in sync with its documentation tree.
#[derive(Parser)]
#[command(
    name = "docnav",
    version,
    about = "Generate site navigation from a documentation tree and patch it into mkdocs.yml.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root holding the docs directory and site config (defaults to cwd).
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Settings file (defaults to <project-root>/docnav.toml when present).
    #[arg(long = "settings", global = true)]
    pub settings_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Outline output format for `generate`.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum OutlineFormat {
    /// Indented `nav` block, ready to paste into mkdocs.yml.
    Text,
    /// Structured outline as JSON.
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the generated navigation outline.
    Generate {
        /// Documentation root, relative to the project root.
        #[arg(long)]
        docs_dir: Option<String>,

        /// Output format.
        #[arg(long, default_value = "text")]
        format: OutlineFormat,
    },

    /// Replace the nav section of the site config with the generated outline.
    Update {
        /// Documentation root, relative to the project root.
        #[arg(long)]
        docs_dir: Option<String>,

        /// Site configuration file, relative to the project root.
        #[arg(long)]
        config_file: Option<String>,
    },

    /// Settings file management.
    Settings {
        /// Settings subcommand.
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Write a default docnav.toml at the project root.
    Init,
    /// Show resolved settings.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout carries
/// command output only.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docnav=warn",
        1 => "docnav=info",
        2 => "docnav=debug",
        _ => "docnav=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<ExitCode> {
    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().wrap_err("cannot determine working directory")?,
    };

    match cli.command {
        Command::Generate { docs_dir, format } => {
            let mut settings = load_settings(&project_root, cli.settings_file.as_deref())?;
            if let Some(dir) = docs_dir {
                settings.docs_dir = dir;
            }
            cmd_generate(&project_root, &settings, &format)
        }
        Command::Update {
            docs_dir,
            config_file,
        } => {
            let mut settings = load_settings(&project_root, cli.settings_file.as_deref())?;
            if let Some(dir) = docs_dir {
                settings.docs_dir = dir;
            }
            if let Some(file) = config_file {
                settings.config_file = file;
            }
            cmd_update(&project_root, &settings)
        }
        Command::Settings { action } => match action {
            SettingsAction::Init => cmd_settings_init(&project_root),
            SettingsAction::Show => {
                let settings = load_settings(&project_root, cli.settings_file.as_deref())?;
                cmd_settings_show(&settings)
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(
    project_root: &Path,
    settings: &Settings,
    format: &OutlineFormat,
) -> Result<ExitCode> {
    let docs_root = resolve(project_root, &settings.docs_dir);
    info!(docs_root = %docs_root.display(), "generating navigation");

    let outline = build_outline(&docs_root, &settings.layout());
    match format {
        OutlineFormat::Text => println!("{}", render_outline(&outline)),
        OutlineFormat::Json => println!("{}", serde_json::to_string_pretty(&outline)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_update(project_root: &Path, settings: &Settings) -> Result<ExitCode> {
    let docs_root = resolve(project_root, &settings.docs_dir);
    let config_path = resolve(project_root, &settings.config_file);
    let name = &settings.config_file;

    info!(
        docs_root = %docs_root.display(),
        config = %config_path.display(),
        "updating nav section"
    );

    let report = match update_config_nav(&config_path, &docs_root, &settings.layout()) {
        Ok(report) => report,
        Err(DocNavError::ConfigNotFound { .. }) => {
            eprintln!("Error: {name} not found");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    match report.outcome {
        PatchOutcome::Updated => {
            println!("✓ Updated nav section in {name}");
            println!("  Generated {} navigation items", report.nav_items);
        }
        PatchOutcome::NavNotFound => {
            eprintln!("Warning: no nav section found in {name}; file left unchanged");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_settings_init(project_root: &Path) -> Result<ExitCode> {
    let path = init_settings(project_root)?;
    println!("Settings initialized at: {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_settings_show(settings: &Settings) -> Result<ExitCode> {
    let toml_str = toml::to_string_pretty(settings)?;
    println!("{toml_str}");
    Ok(ExitCode::SUCCESS)
}
