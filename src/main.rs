//! Scopeworks settings workbench entry point.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use iced::Size;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scopeworks::app::SettingsApp;
use scopeworks::model::SettingsModel;

/// Command-line arguments for the settings workbench
#[derive(Parser, Debug)]
#[command(name = "scopeworks")]
#[command(version, about = "Settings workbench for the Scopeworks decisioning demo", long_about = None)]
pub struct Args {
    /// Environment file id to pre-fill in the form
    #[arg(long, env = "SCOPEWORKS_ENVIRONMENT_ID")]
    pub environment_file_id: Option<String>,

    /// Inspector session URL to pre-fill in the form
    #[arg(long, env = "SCOPEWORKS_INSPECTOR_URL")]
    pub inspector_url: Option<String>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "pretty")]
    pub log_format: String,

    /// Write logs to file (in addition to stdout)
    #[arg(long)]
    pub log_file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args)?;

    info!("════════════════════════════════════════════════════════");
    info!("  scopeworks v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {} {}", env!("BUILD_DATE"), env!("BUILD_TIME"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    info!("════════════════════════════════════════════════════════");

    // Seed the model with CLI overrides
    if let Some(environment_file_id) = &args.environment_file_id {
        info!("Pre-filling environment file id: {}", environment_file_id);
    }
    if let Some(inspector_url) = &args.inspector_url {
        info!("Pre-filling inspector session URL: {}", inspector_url);
    }
    let model =
        SettingsModel::default().with_overrides(args.environment_file_id, args.inspector_url);
    tracing::debug!("Settings model: {:?}", model);

    info!("Opening settings window");
    iced::application(
        move || SettingsApp::with_model(model.clone()),
        SettingsApp::update,
        SettingsApp::view,
    )
    .title("Scopeworks Settings")
    .window_size(Size::new(520.0, 760.0))
    .centered()
    .antialiasing(true)
    .subscription(SettingsApp::subscription)
    .run()
    .map_err(|err| anyhow!("settings window exited with error: {}", err))
}

fn init_logging(args: &Args) -> Result<()> {
    use std::fs::File;

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // GUI stack crates log surface churn at info; keep them at warn
        tracing_subscriber::EnvFilter::new(format!(
            "scopeworks={level},wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_winit=warn,warn",
            level = log_level
        ))
    });

    // If log file is specified, write to both stdout and file
    if let Some(log_file_path) = &args.log_file {
        let file = File::create(log_file_path)
            .with_context(|| format!("failed to create log file: {}", log_file_path))?;

        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path);
    } else {
        // Stdout only
        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().compact())
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .init();
            }
        }
    }

    Ok(())
}
