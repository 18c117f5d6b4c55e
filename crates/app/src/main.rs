use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ServicesConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Cybersecurity compliance self-assessment.
#[derive(Parser, Debug)]
#[command(name = "assess", version, about, long_about = None)]
struct Cli {
    /// SQLite database holding the completed assessment.
    #[arg(
        long = "db",
        env = "ASSESS_DB_URL",
        default_value = "sqlite://assessment.sqlite3",
        global = true
    )]
    db_url: String,

    /// Directory reports are written to. Defaults to the user's download folder.
    #[arg(long, env = "ASSESS_REPORTS_DIR", global = true)]
    reports_dir: Option<PathBuf>,

    /// Simulated lead submission latency in milliseconds.
    #[arg(long, env = "ASSESS_SUBMIT_DELAY_MS", default_value_t = 1500, global = true)]
    submit_delay_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the desktop wizard (default).
    Ui,
    /// Export the report for the stored assessment without opening a window.
    Report,
}

impl Cli {
    fn services_config(&self) -> ServicesConfig {
        let reports_dir = self
            .reports_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        ServicesConfig {
            clock: Clock::System,
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            reports_dir,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// sqlx does not create missing database files, so touch it first.
fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_url = normalize_sqlite_url(&cli.db_url);
    let config = cli.services_config();
    tracing::debug!(%db_url, reports_dir = %config.reports_dir.display(), "starting");

    // Storage is opened and migrated before any window exists.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, config)
        .await
        .context("opening assessment storage")?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Cybersecurity Assessment")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Report => {
            let Some(document) = services.lead_capture().load_saved().await? else {
                bail!("no completed assessment is stored in {db_url}");
            };
            let reports = services.reports();
            tracing::debug!(dir = %reports.output_dir().display(), "exporting stored assessment");
            let path = reports.export(&document.state).await?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
