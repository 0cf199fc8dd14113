use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rinkwatch::config::Config;
use rinkwatch::logging::init_tracing;
use rinkwatch::shutdown::ShutdownHandle;
use rinkwatch::ui::runtime::{self, CompanionCommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rinkwatch")]
#[command(about = "Live NHL scoreboard in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the data companion on stdin/stdout (started by the display)
    Companion,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Some(Commands::Companion) => run_companion(config),
        None => run_display(&cli, &config),
    }
}

fn run_display(cli: &Cli, config: &Config) -> Result<()> {
    init_tracing("display");
    let program = std::env::current_exe().context("cannot locate own executable")?;
    let mut args = Vec::new();
    if let Some(path) = &cli.config {
        args.push("--config".to_string());
        args.push(path.display().to_string());
    }
    args.push("companion".to_string());

    runtime::run(&config.display, &CompanionCommand { program, args })
        .context("display failed")
}

fn run_companion(config: Config) -> Result<()> {
    init_tracing("companion");
    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    async_runtime.block_on(async {
        let shutdown = ShutdownHandle::new();
        let signal = shutdown.clone();
        tokio::spawn(async move {
            wait_for_signal().await;
            signal.signal();
        });
        rinkwatch::companion::run(config.companion, shutdown)
            .await
            .context("companion failed")
    })
}

async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_display() {
        let cli = Cli::try_parse_from(["rinkwatch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_reaches_companion() {
        let cli =
            Cli::try_parse_from(["rinkwatch", "--config", "/tmp/rw.toml", "companion"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Companion)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rw.toml")));
    }
}
