// Command-line entry point: one check, or a cron loop of checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use job_monitor_core::{
    kernel::MonitorDeps,
    server::{handle_invocation, init_tracing},
    Config,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

#[derive(Parser)]
#[command(name = "job-monitor", about = "Watch a careers page and report job changes to Telegram")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single check and print the result (default)
    Check,
    /// Run checks on a schedule until interrupted
    Watch {
        /// Minutes between checks, a divisor of 60 so runs stay evenly spaced
        /// across the hour (defaults to CHECK_INTERVAL_MINUTES)
        #[arg(long)]
        every_minutes: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = MonitorDeps::from_config(&config).context("Failed to initialize dependencies")?;

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => {
            let response = handle_invocation(&config, &deps, &serde_json::Value::Null).await;
            println!("{}", serde_json::to_string_pretty(&response)?);

            Ok(if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Watch { every_minutes } => {
            let minutes = every_minutes.unwrap_or(config.check_interval_minutes);
            watch(Arc::new(config), Arc::new(deps), minutes).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn watch(config: Arc<Config>, deps: Arc<MonitorDeps>, minutes: u32) -> Result<()> {
    let schedule = cron_schedule(minutes)?;
    let mut scheduler = JobScheduler::new().await?;

    let check_job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let config = config.clone();
        let deps = deps.clone();
        Box::pin(async move {
            let response = handle_invocation(&config, &deps, &serde_json::Value::Null).await;
            tracing::info!(
                status = response.status_code,
                body = %response.body,
                "Scheduled check complete"
            );
        })
    })?;

    scheduler.add(check_job).await?;
    scheduler.start().await?;
    tracing::info!("Checking every {} minutes, press Ctrl-C to stop", minutes);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutting down scheduler");
    scheduler.shutdown().await?;
    Ok(())
}

/// Cron expression firing every `minutes` minutes, on the minute.
///
/// `*/N` restarts at the top of every hour, so only divisors of 60 give
/// even gaps.
fn cron_schedule(minutes: u32) -> Result<String> {
    if minutes == 0 || minutes >= 60 || 60 % minutes != 0 {
        anyhow::bail!(
            "check interval must divide 60 evenly (1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30), got {}",
            minutes
        );
    }
    Ok(format!("0 */{} * * * *", minutes))
}
