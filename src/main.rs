use clap::{Parser, Subcommand};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splash_manifest::models::SplashConfig;
use splash_manifest::services::{self, ImageAnalyzer, ManifestBuilder};

const DEFAULT_SPLASH_DIR: &str = "splash-images";
const DEFAULT_MANIFEST_FILE: &str = "image_data.json";

/// How long to wait for reads still parked on the blocking pool at exit
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "splash-manifest")]
#[command(about = "Build the themed splash-image manifest for the site front-end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every image set and write the manifest
    Build {
        /// Folder holding the numbered image sets [env: SPLASH_DIR]
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Manifest file to write [env: MANIFEST_FILE]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML configuration file [env: CONFIG_FILE]
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyze a single image and print the result as JSON
    Analyze {
        /// Image file to analyze
        file: PathBuf,

        /// YAML configuration file [env: CONFIG_FILE]
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the flat gallery listing of a directory
    Gallery {
        /// Directory with the gallery images
        #[arg(short, long, default_value = "DJ-images")]
        dir: PathBuf,

        /// Gallery file to write
        #[arg(short, long, default_value = "gallery_images.json")]
        output: PathBuf,
    },
    /// Write the default configuration as YAML
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    block_on_and_shutdown(run(cli))?
}

/// Run `future` on a fresh runtime, then shut it down without waiting on
/// blocking tasks for longer than [`SHUTDOWN_GRACE`]. A read that hit its
/// timeout keeps its blocking thread, and a plain runtime drop would wait
/// for it forever.
fn block_on_and_shutdown<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(output)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Build {
            root,
            output,
            config,
        }) => run_build_command(root, output, config).await,
        Some(Commands::Analyze { file, config }) => run_analyze_command(&file, config).await,
        Some(Commands::Gallery { dir, output }) => run_gallery_command(&dir, &output).await,
        Some(Commands::Init { output, force }) => run_init_command(&output, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn load_config(flag: Option<PathBuf>) -> anyhow::Result<SplashConfig> {
    let path = flag.or_else(|| env_path("CONFIG_FILE"));
    Ok(SplashConfig::load(path.as_deref())?)
}

/// Analyze all sets under the splash folder and write the manifest
async fn run_build_command(
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    init_logging("splash_manifest=info");

    let root = root
        .or_else(|| env_path("SPLASH_DIR"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SPLASH_DIR));
    let output = output
        .or_else(|| env_path("MANIFEST_FILE"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE));

    // Configuration problems abort before any folder is touched
    let pipeline = Arc::new(load_config(config)?.resolve()?);
    tracing::info!(
        root = %root.display(),
        brand_colors = pipeline.refiner.palette().len(),
        workers = pipeline.workers,
        "Building manifest"
    );

    let entries = ManifestBuilder::new(pipeline).build_entries(&root).await?;
    services::write_json(&output, &entries, 4)?;

    tracing::info!(
        output = %output.display(),
        sets = entries.len(),
        "Successfully built manifest"
    );
    Ok(())
}

/// Analyze one image; handy when a set picks an unexpected theme
async fn run_analyze_command(file: &Path, config: Option<PathBuf>) -> anyhow::Result<()> {
    init_logging("splash_manifest=warn");

    let pipeline = Arc::new(load_config(config)?.resolve()?);
    let result = ImageAnalyzer::new(pipeline).analyze(file).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_gallery_command(dir: &Path, output: &Path) -> anyhow::Result<()> {
    init_logging("splash_manifest=info");

    let entries = services::build_gallery(dir).await?;
    services::write_json(output, &entries, 2)?;

    println!(
        "Generated {} with {} images",
        output.display(),
        entries.len()
    );
    Ok(())
}

fn run_init_command(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let yaml = SplashConfig::default().to_yaml()?;
    services::write_atomic(output, yaml.as_bytes())?;

    println!("Wrote default configuration to {}", output.display());
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let splash_dir = std::env::var("SPLASH_DIR").ok();
    let manifest_file = std::env::var("MANIFEST_FILE").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("splash-manifest v{VERSION}");
    println!("Themed splash-image manifest builder\n");

    println!("Environment Variables:");
    println!(
        "  SPLASH_DIR    = {}",
        splash_dir
            .as_deref()
            .unwrap_or("splash-images (default)")
    );
    println!(
        "  MANIFEST_FILE = {}",
        manifest_file
            .as_deref()
            .unwrap_or("image_data.json (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "built-in defaults (file not found)".to_string(),
        None => "built-in defaults".to_string(),
    };
    println!("\nConfiguration: {config_source}");

    let defaults = SplashConfig::default();
    println!("  Brand palette: {}", defaults.brand_palette.join(" "));
    println!("  Background:    {}", defaults.background);
    println!(
        "  Thresholds:    contrast {} / saturation {}",
        defaults.contrast_threshold, defaults.saturation_threshold
    );

    // Image sets found under the splash folder
    let root = PathBuf::from(splash_dir.as_deref().unwrap_or(DEFAULT_SPLASH_DIR));
    let sets = std::fs::read_dir(&root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_dir())
                .filter(|e| {
                    e.file_name()
                        .to_str()
                        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                })
                .count()
        })
        .ok();
    match sets {
        Some(n) => println!("\nImage sets:    {n} in {}", root.display()),
        None => println!("\nImage sets:    {} not found", root.display()),
    }

    println!("\nCommands:");
    println!("  splash-manifest build      Analyze image sets and write the manifest");
    println!("  splash-manifest analyze    Analyze one image and print its colors");
    println!("  splash-manifest gallery    Write the flat gallery listing");
    println!("  splash-manifest init       Write the default config.yaml");
    println!("\nRun 'splash-manifest --help' for more options.");
}
