use anyhow::Context;
use clap::Parser;
use lvm_driver::{
  config::{LogFormat, Options},
  server::ServerError,
  LvmDriver,
};
use std::{process::ExitCode, sync::Arc};
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(options: &Options) -> anyhow::Result<()> {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::try_new(&options.log_level)
      .with_context(|| format!("invalid log level {:?}", options.log_level))?,
  };

  let builder = tracing_subscriber::fmt().with_env_filter(filter);
  let result = match options.log_format {
    LogFormat::Text => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };

  result.map_err(|e| anyhow::anyhow!(e))
}

async fn next_signal(interrupt: &mut Signal, terminate: &mut Signal) -> Option<&'static str> {
  tokio::select! {
    s = interrupt.recv() => s.map(|_| "SIGINT"),
    s = terminate.recv() => s.map(|_| "SIGTERM"),
  }
}

/// The first signal stops the driver gracefully, the second forces it.
async fn handle_signals(driver: Arc<LvmDriver>) -> anyhow::Result<()> {
  let mut interrupt = signal(SignalKind::interrupt()).context("failed to install SIGINT handler")?;
  let mut terminate =
    signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

  if let Some(name) = next_signal(&mut interrupt, &mut terminate).await {
    info!(signal = name, "shutting down");
    driver.stop();
  }

  if let Some(name) = next_signal(&mut interrupt, &mut terminate).await {
    warn!(signal = name, "forcing shutdown");
    driver.force_stop();
  }

  Ok(())
}

async fn run(options: Options) -> anyhow::Result<()> {
  if options.node_id.is_empty() {
    warn!("node id is empty, set --nodeid or NODE_ID");
  }

  let driver = Arc::new(LvmDriver::new(options.driver_options()));
  let signals = tokio::spawn(handle_signals(driver.clone()));

  let result = driver.run().await;
  signals.abort();

  match result {
    Err(ServerError::ForceStopped) => Err(anyhow::anyhow!(ServerError::ForceStopped)),
    result => result.with_context(|| format!("failed to serve on {}", options.endpoint)),
  }
}

/// Exits 0 only after a graceful shutdown.
#[tokio::main]
async fn main() -> ExitCode {
  let options = Options::parse();
  if let Err(e) = init_tracing(&options) {
    eprintln!("lvm-driver: {:#}", e);
    return ExitCode::FAILURE;
  }

  match run(options).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{:#}", e);
      ExitCode::FAILURE
    }
  }
}
