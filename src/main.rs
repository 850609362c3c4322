use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dockhand::app::App;
use dockhand::config::{Config, LogConfig};
use dockhand::core::ConnectionInfo;
use dockhand::docker::DockerClient;

/// Dockhand - Docker container TUI
#[derive(Parser, Debug)]
#[command(name = "dockhand")]
#[command(about = "A terminal UI for starting and stopping Docker containers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<std::path::PathBuf>,

    /// Docker host to connect to
    #[arg(short = 'H', long, value_name = "HOST", global = true)]
    host: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the TUI (default)
    #[command(alias = "tui")]
    Run,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        _ => run_tui(cli).await,
    }
}

fn print_version() {
    println!("dockhand {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

async fn run_tui(cli: Cli) -> Result<()> {
    // Load configuration first so the logging section applies
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    let config = apply_cli_overrides(config, &cli);

    init_logging(&cli, &config.logging);

    info!("Starting Dockhand v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded successfully");

    // Probe the daemon before entering the alternate screen, so the
    // warning is visible on the normal terminal
    match check_docker_connection(&config).await {
        Ok(info) => {
            info!(
                "Connected to Docker: {} (API: {})",
                info.version, info.api_version
            );
        }
        Err(e) => {
            warn!("Could not connect to Docker: {}", e);
            eprintln!("⚠️  Warning: Could not connect to Docker daemon.");
            eprintln!("   Please ensure Docker is running and you have permissions.");
            eprintln!("   Error: {}", e);
        }
    }

    let mut app = App::new(config).await?;
    app.run().await?;

    info!("Dockhand shutting down gracefully");
    Ok(())
}

/// Resolve effective log level and file: debug flag, then CLI level,
/// then the config file, then defaults
fn resolve_log_settings(
    debug: bool,
    cli_level: Option<&str>,
    logging: &LogConfig,
) -> (String, PathBuf) {
    let level = if debug {
        "debug".to_string()
    } else {
        cli_level
            .map(|l| l.to_string())
            .unwrap_or_else(|| logging.level.clone())
    };

    let file = logging
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("/tmp/dockhand.log"));

    (level, file)
}

fn init_logging(cli: &Cli, logging: &LogConfig) {
    // Logs go to a file, never stdout: stdout belongs to the TUI
    let (level, path) = resolve_log_settings(cli.debug, cli.log_level.as_deref(), logging);

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(format!("dockhand={}", level))
            .with_writer(std::sync::Arc::new(file))
            .init();
    } else {
        // If can't open log file, disable logging
        tracing_subscriber::fmt().with_env_filter("off").init();
    }
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(host) = &cli.host {
        config.docker.host = Some(host.clone());
    }
    config
}

async fn check_docker_connection(config: &Config) -> Result<ConnectionInfo> {
    let client = if let Some(host) = &config.docker.host {
        DockerClient::with_host(host).await?
    } else {
        DockerClient::from_env().await?
    };

    client.ping().await?;
    Ok(client.connection_info().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_settings_from_config() {
        let logging = LogConfig {
            level: "trace".to_string(),
            file: Some(PathBuf::from("/var/log/dockhand.log")),
        };

        let (level, file) = resolve_log_settings(false, None, &logging);
        assert_eq!(level, "trace");
        assert_eq!(file, PathBuf::from("/var/log/dockhand.log"));
    }

    #[test]
    fn test_cli_level_overrides_config() {
        let logging = LogConfig {
            level: "trace".to_string(),
            file: None,
        };

        let (level, file) = resolve_log_settings(false, Some("warn"), &logging);
        assert_eq!(level, "warn");
        assert_eq!(file, PathBuf::from("/tmp/dockhand.log"));
    }

    #[test]
    fn test_debug_flag_wins() {
        let logging = LogConfig::default();

        let (level, _) = resolve_log_settings(true, Some("error"), &logging);
        assert_eq!(level, "debug");
    }
}
