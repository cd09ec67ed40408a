use crate::{driver::LvmDriverOptions, endpoint::DEFAULT_ENDPOINT};
use clap::{Parser, ValueEnum};

pub const DEFAULT_DRIVER_NAME: &str = "lvm.redhat.com";

#[derive(Eq, Clone, Copy, PartialEq, Debug, ValueEnum)]
pub enum LogFormat {
  Text,
  Json,
}

/// CSI node plugin for LVM backed volumes.
#[derive(Debug, Clone, Parser)]
#[command(name = "lvm-driver", version)]
pub struct Options {
  /// CSI endpoint, unix://<path> or tcp://<host:port>
  #[arg(long, env = "CSI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
  pub endpoint: String,

  /// Identifier of the node this plugin runs on
  #[arg(long = "nodeid", env = "NODE_ID", default_value = "")]
  pub node_id: String,

  /// Name the plugin registers under
  #[arg(long = "drivername", env = "DRIVER_NAME", default_value = DEFAULT_DRIVER_NAME)]
  pub driver_name: String,

  /// Log filter used when RUST_LOG is not set
  #[arg(long, default_value = "info")]
  pub log_level: String,

  #[arg(long, value_enum, default_value_t = LogFormat::Text)]
  pub log_format: LogFormat,
}

impl Options {
  pub fn driver_options(&self) -> LvmDriverOptions {
    LvmDriverOptions {
      node_id: self.node_id.clone(),
      driver_name: self.driver_name.clone(),
      endpoint: self.endpoint.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags() {
    let options = Options::try_parse_from(vec![
      "lvm-driver",
      "--endpoint",
      "tcp://127.0.0.1:10000",
      "--nodeid",
      "worker-1",
      "--drivername",
      "lvm.example.com",
      "--log-format",
      "json",
    ])
    .unwrap();

    assert_eq!(options.log_format, LogFormat::Json);
    let driver = options.driver_options();
    assert_eq!(driver.endpoint, "tcp://127.0.0.1:10000");
    assert_eq!(driver.node_id, "worker-1");
    assert_eq!(driver.driver_name, "lvm.example.com");
  }

  #[test]
  fn unknown_log_format_is_rejected() {
    assert!(Options::try_parse_from(vec!["lvm-driver", "--log-format", "xml"]).is_err());
  }

  #[test]
  fn command_is_well_formed() {
    use clap::CommandFactory;
    Options::command().debug_assert();
  }
}
